mod client_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "PD_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pd";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/graphql";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
