use crate::{ClientError, ClientResult};

use serde::Deserialize;
use serde_json::Value;

const NOT_FOUND_CODE: &str = "NOT_FOUND";

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<D> {
    pub data: Option<D>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    pub path: Option<Vec<Value>>,
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlErrorExtensions {
    pub code: Option<String>,
}

impl GraphQlError {
    pub fn is_not_found(&self) -> bool {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.code.as_deref())
            .is_some_and(|code| code.eq_ignore_ascii_case(NOT_FOUND_CODE))
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) if !path.is_empty() => {
                let path = path
                    .iter()
                    .map(|segment| match segment {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                format!("{} (at {})", self.message, path)
            }
            _ => self.message.clone(),
        }
    }
}

impl<D> GraphQlResponse<D> {
    /// Reduce the envelope to its data, or to the error it reports.
    ///
    /// Reported errors win over the HTTP status; a NOT_FOUND code on any
    /// error makes the whole response a not-found.
    #[track_caller]
    pub fn into_result(self, status: u16) -> ClientResult<D> {
        let errors = self.errors.unwrap_or_default();

        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(GraphQlError::describe)
                .collect::<Vec<_>>()
                .join("; ");

            if errors.iter().any(GraphQlError::is_not_found) {
                return Err(ClientError::not_found(message));
            }
            return Err(ClientError::server(Some(status), message));
        }

        if !(200..300).contains(&status) {
            return Err(ClientError::server(
                Some(status),
                format!("HTTP status {}", status),
            ));
        }

        self.data
            .ok_or_else(|| ClientError::server(Some(status), "response carried no data"))
    }
}
