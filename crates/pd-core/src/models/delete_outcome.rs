use crate::Person;

use serde::Serialize;

/// What the server reported back after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server echoed the removed record's last-known state
    Deleted(Person),
    /// The server confirmed the delete without a snapshot
    Acknowledged,
}

impl DeleteOutcome {
    pub fn person(&self) -> Option<&Person> {
        match self {
            Self::Deleted(person) => Some(person),
            Self::Acknowledged => None,
        }
    }
}

impl Serialize for DeleteOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DeleteOutcome", 2)?;
        state.serialize_field("deleted", &true)?;
        state.serialize_field("person", &self.person())?;
        state.end()
    }
}
