use crate::{Cli, CliResult, Commands, PersonCommands};

use pd_client::{Client, ClientResult};
use pd_config::{Config, LogLevel};

use log::info;
use serde_json::{Value, json};

/// Load configuration and apply command-line overrides, then validate.
///
/// Flags win over PD_* environment variables, which win over config.toml.
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref endpoint) = cli.endpoint {
        config.client.endpoint = endpoint.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.client.timeout_secs = timeout_secs;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }

    config.validate()?;
    Ok(config)
}

/// Run one command against the directory and shape its JSON output.
pub async fn execute(client: &Client, command: Commands) -> ClientResult<Value> {
    match command {
        Commands::Person { action } => match action {
            PersonCommands::List => {
                let persons = client.list_persons().await?;
                Ok(json!({ "persons": persons }))
            }
            PersonCommands::Get { uuid } => {
                let person = client.get_person(uuid).await?;
                Ok(json!({ "person": person }))
            }
            PersonCommands::Create { name, age } => {
                let person = client.create_person(&name, age).await?;
                info!("Created {}", person);
                Ok(json!({ "person": person }))
            }
            PersonCommands::Delete { uuid } => {
                let outcome = client.delete_person(uuid).await?;
                info!("Deleted person {}", uuid);
                Ok(json!(outcome))
            }
        },
    }
}
