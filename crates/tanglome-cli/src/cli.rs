//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// Tanglome account and session CLI.
#[derive(Parser, Debug)]
#[command(name = "tanglome")]
#[command(author, version = env!("TANGLOME_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Remote API base URL
    #[arg(
        long,
        global = true,
        default_value = "https://blog-backend-g3la.onrender.com/api"
    )]
    pub api: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}
