//! Validated input for a create request.

use crate::{CoreError, CoreResult};

use serde::Serialize;

/// Name and age that passed client-side validation.
///
/// The only way to obtain one is [`NewPerson::new`], so holding a
/// `NewPerson` means the request is safe to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPerson {
    name: String,
    age: i32,
}

impl NewPerson {
    /// Validate create input.
    ///
    /// A name that is empty or only whitespace is rejected, as is a
    /// negative age. The name is sent exactly as given.
    #[track_caller]
    pub fn new(name: &str, age: i32) -> CoreResult<Self> {
        if name.trim().is_empty() {
            return Err(CoreError::validation("name", "name must not be empty"));
        }

        if age < 0 {
            return Err(CoreError::validation(
                "age",
                format!("age must not be negative, got {}", age),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}
