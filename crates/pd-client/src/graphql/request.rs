use crate::graphql::Operation;

use serde::Serialize;

/// Body of a GraphQL-over-HTTP POST
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphQlRequest<'a, V: Serialize> {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: &'a V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(operation: &Operation, variables: &'a V) -> Self {
        Self {
            operation_name: operation.name,
            query: operation.document,
            variables,
        }
    }
}
