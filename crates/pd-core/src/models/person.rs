//! Person entity - the single record held by the directory.

use crate::{CoreError, CoreResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A person as reported by the directory service.
///
/// Records are only ever replaced whole by the server; the client reads,
/// lists, creates and deletes them but never patches individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier, immutable once created
    pub uuid: i32,
    pub name: String,
    pub age: i32,
}

impl Person {
    /// Check a decoded record: non-empty name, non-negative age
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation(
                "name",
                format!("person {} has an empty name", self.uuid),
            ));
        }

        if self.age < 0 {
            return Err(CoreError::validation(
                "age",
                format!("person {} has negative age {}", self.uuid, self.age),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.uuid)
    }
}
