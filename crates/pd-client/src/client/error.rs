use pd_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during directory operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected before any request was sent
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The request could not reach or return from the server
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        timed_out: bool,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The server answered but reported a failure
    #[error("Server error: {message} {location}")]
    Server {
        status: Option<u16>,
        message: String,
        location: ErrorLocation,
    },

    /// The server reports that the identifier does not exist
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },
}

/// Error category without payload, for callers that only branch on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Transport,
    Server,
    NotFound,
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };

        ClientError::Transport {
            message,
            timed_out,
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }

    /// Create a validation error with location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ClientError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a server error with location
    #[track_caller]
    pub fn server<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        ClientError::Server {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error with location
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ClientError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation { .. } => ErrorKind::Validation,
            ClientError::Transport { .. } => ErrorKind::Transport,
            ClientError::Server { .. } => ErrorKind::Server,
            ClientError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// True when a transport failure was caused by the request deadline
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ClientError::Transport {
                timed_out: true,
                ..
            }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation {
                field,
                message,
                location,
            } => ClientError::Validation {
                message: format!("{}: {}", field, message),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
