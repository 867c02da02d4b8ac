use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pd")]
#[command(about = "Person directory client for a GraphQL endpoint")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GraphQL endpoint URL (overrides config.toml and PD_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides config.toml and PD_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
