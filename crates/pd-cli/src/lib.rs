//! pd-cli library
//!
//! Argument parsing, configuration resolution and command execution for the
//! `pd` binary, exported so integration tests can drive them directly.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod person_commands;
pub(crate) mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use person_commands::PersonCommands;
pub use runner::{execute, resolve_config};
