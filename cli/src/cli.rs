use std::path::PathBuf;

/// Exhaustive district enumeration CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "enumander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the district weight band for a graph
    Limits(LimitsArgs),

    /// Enumerate every valid partition of a graph
    Enumerate(EnumerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct BandArgs {
    /// Input graph file (JSON with "nodes" and "edges")
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub graph: PathBuf,

    /// Number of districts
    #[arg(short, long)]
    pub parts: usize,

    /// Largest allowed ratio between a district weight and the average
    #[arg(short, long, default_value_t = 1.1)]
    pub ratio: f64,
}

#[derive(clap::Args, Debug)]
pub struct LimitsArgs {
    #[command(flatten)]
    pub band: BandArgs,
}

#[derive(clap::Args, Debug)]
pub struct EnumerateArgs {
    #[command(flatten)]
    pub band: BandArgs,

    /// Output partitions file (JSON)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Only keep partitions with exactly --parts districts
    #[arg(long)]
    pub exact: bool,

    /// Partition disconnected remainders whole, without checking their components
    #[arg(long)]
    pub unchecked_remainders: bool,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Re-validate every partition against the graph before writing
    #[arg(long)]
    pub verify: bool,
}
