use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use enumander::{
    calc_limits,
    io::{read_graph_from_json_file, write_partitions_to_json_file},
    Cancellation, EnumerateOptions, Enumerator, RemainderCheck,
};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::EnumerateArgs) -> Result<()> {
    let band = &args.band;

    println!("[enumerate] loading graph from {}", band.graph.display());
    let labeled = read_graph_from_json_file(&band.graph)
        .with_context(|| format!("Failed to read graph: {}", band.graph.display()))?;
    let graph = labeled.graph();

    let limits = calc_limits(graph, band.parts, band.ratio)?;
    println!(
        "[enumerate] {} nodes, {} edges, district weight band [{:.6}, {:.6}]",
        graph.node_count(), graph.edge_count(), limits.min_weight(), limits.max_weight(),
    );

    let mut options = EnumerateOptions::default();
    if args.exact { options = options.with_part_count(band.parts) }
    if args.unchecked_remainders { options = options.with_remainder_check(RemainderCheck::Unchecked) }
    if let Some(secs) = args.timeout {
        options = options.with_cancellation(Cancellation::never().with_timeout(Duration::from_secs(secs)));
    }

    let started = Instant::now();
    let mut enumerator = Enumerator::with_options(limits, options);
    let partitions = enumerator.all_partitions(graph)
        .context("Enumeration did not complete")?;
    println!("[enumerate] found {} partitions in {:.3?}", partitions.len(), started.elapsed());

    if cli.verbose > 0 {
        let stats = enumerator.stats();
        eprintln!(
            "[enumerate] accretion_steps={} candidates={} duplicates={} pruned={}",
            stats.accretion_steps, stats.candidates, stats.duplicate_candidates, stats.remainders_pruned,
        );
    }

    if args.verify {
        for (i, partition) in partitions.iter().enumerate() {
            partition.validate(graph, &limits).with_context(|| format!("Partition {i} failed validation"))?;
        }
        println!("[enumerate] verified {} partitions", partitions.len());
    }

    match &args.output {
        Some(out_path) => {
            println!("[enumerate] writing partitions to {}", out_path.display());
            write_partitions_to_json_file(out_path, &labeled, &limits, &partitions)?;
        }
        None => {
            for (i, partition) in partitions.iter().enumerate() {
                let districts = partition.iter()
                    .map(|district| {
                        let nodes = district.iter().map(|id| labeled.label(id)).collect::<Vec<_>>();
                        format!("{{{}}} ({})", nodes.join(", "), district.weight())
                    })
                    .collect::<Vec<_>>();
                println!("{i}: {}", districts.join(" | "));
            }
        }
    }

    Ok(())
}
