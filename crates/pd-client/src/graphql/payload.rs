//! Typed `data` shapes, one per operation.

use pd_core::Person;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PersonsData {
    pub persons: Option<Vec<Person>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonData {
    pub person: Option<Person>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePersonData {
    pub create_person: Option<PersonPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeletePersonData {
    pub delete_person: Option<PersonPayload>,
}

/// Mutation result wrapper: `{ person { ... } }`
#[derive(Debug, Deserialize)]
pub(crate) struct PersonPayload {
    pub person: Option<Person>,
}
