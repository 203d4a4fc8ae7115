use anyhow::{Context, Result};
use enumander::{calc_limits, io::read_graph_from_json_file};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::LimitsArgs) -> Result<()> {
    let band = &args.band;
    let labeled = read_graph_from_json_file(&band.graph)
        .with_context(|| format!("Failed to read graph: {}", band.graph.display()))?;
    let limits = calc_limits(labeled.graph(), band.parts, band.ratio)?;

    println!(
        "[limits] total={} parts={} ratio={} -> min={:.6} max={:.6}",
        labeled.graph().total_weight(), band.parts, band.ratio, limits.min_weight(), limits.max_weight(),
    );

    Ok(())
}
