//! pd - person directory CLI
//!
//! Lists, shows, creates and deletes people held by a GraphQL service.
//!
//! # Examples
//!
//! ```bash
//! # List everyone
//! pd person list --pretty
//!
//! # Create a person against a specific endpoint
//! pd --endpoint http://127.0.0.1:5000/graphql person create --name "Ada" --age 36
//!
//! # Delete by uuid
//! pd person delete 3
//! ```

use pd_cli::{Cli, CliError, CliResult, execute, initialize_logger, resolve_config};
use pd_client::Client;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> CliResult<String> {
    let config = resolve_config(&cli)?;

    initialize_logger(
        config.logging.level,
        config.logging.file.as_deref().map(Path::new),
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Client::from_config(&config)?;
    let value = execute(&client, cli.command).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    output.map_err(CliError::from)
}
