use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vantage-point tree nearest-neighbour search.
#[derive(Parser)]
#[command(
    name = "vantage",
    version,
    about = "Nearest-neighbour search over point files with vantage-point trees"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a tree over a point file and query it.
    Search(SearchArgs),
    /// Build a tree over a point file and print its compact text form.
    Stringify(StringifyArgs),
}

/// Arguments shared by every command that builds a tree.
#[derive(clap::Args)]
pub struct TreeArgs {
    /// Path to the point file (one point per line, comma or whitespace separated).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file [default: vantage.toml if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed used to pick vantage points.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the leaf bucket size (0 = no buckets).
    #[arg(short, long = "bucket-size")]
    pub bucket_size: Option<usize>,

    /// Override the distance metric (euclidean, manhattan, chebyshev).
    #[arg(short, long)]
    pub metric: Option<String>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Query point, e.g. "1.5,2.0".
    #[arg(short, long, allow_hyphen_values = true)]
    pub query: String,

    /// Override the maximum number of neighbours (0 = unlimited).
    #[arg(short = 'k', long)]
    pub limit: Option<usize>,

    /// Override the search radius.
    #[arg(short = 'r', long = "max-distance")]
    pub max_distance: Option<f64>,
}

/// Arguments for the `stringify` subcommand.
#[derive(clap::Args)]
pub struct StringifyArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}
