use pd_client::{ClientError, ErrorKind};

use std::process::ExitCode;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] pd_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Error serializing response: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Logger { .. } | CliError::Output(_) => 1,
            CliError::Client(err) => match err.kind() {
                ErrorKind::Validation => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::Transport => 4,
                ErrorKind::Server => 5,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
