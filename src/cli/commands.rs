use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nerkh", about = "Fiat, gold and crypto price snapshot aggregator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Only run these sources (fiat, gold, crypto); repeatable
    #[arg(long = "source")]
    pub sources: Vec<String>,
    /// Localization dataset path (overrides NERKH_ALIASES)
    #[arg(long)]
    pub aliases: Option<PathBuf>,
    /// Per-source deadline in seconds (overrides NERKH_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every source, merge, and write the snapshot file
    Run {
        #[command(flatten)]
        opts: SourceArgs,
        /// Output path (overrides NERKH_OUTPUT)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Fetch and merge, printing the snapshot instead of writing it
    Preview {
        #[command(flatten)]
        opts: SourceArgs,
    },
    /// List configured sources and their endpoints
    Sources,
}
