use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(super) struct Cli {
    /// Comma-separated initial state, e.g. "frontled off, backled g4".
    pub initial_state: String,

    /// Comma-separated desired state.
    pub desired_state: String,

    /// Only print the commands, one per line, with no surrounding prose.
    #[arg(long)]
    pub machine_readable: bool,

    /// Look up the answer in the on-disk cache before solving.
    #[arg(long)]
    pub use_cache: bool,

    /// Path to the cache file consulted/written by `--use-cache`.
    #[arg(long, default_value = "cache.bin")]
    pub cache_path: PathBuf,

    /// Insert "*Delay*" markers between commands that would otherwise hit
    /// the same device twice in a row.
    #[arg(long)]
    pub avoid_overwhelm: bool,

    /// Insert "*Await repeats*" markers after commands that can be held
    /// down / repeated to reach the desired relative state faster.
    #[arg(long)]
    pub await_repeats: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
