use crate::graphql::GraphQlRequest;
use crate::graphql::operation::{CREATE_PERSON, DELETE_PERSON, GET_PERSON, LIST_PERSONS};

use pd_core::NewPerson;

use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct IdVariables {
    id: i32,
}

#[test]
fn test_request_body_shape() {
    let variables = IdVariables { id: 42 };
    let body = serde_json::to_value(GraphQlRequest::new(&GET_PERSON, &variables)).unwrap();

    assert_eq!(body["operationName"], "GetPerson");
    assert_eq!(body["query"], GET_PERSON.document);
    assert_eq!(body["variables"], json!({"id": 42}));
}

#[test]
fn test_create_variables_from_new_person() {
    let person = NewPerson::new(" Ada ", 36).unwrap();
    let body = serde_json::to_value(GraphQlRequest::new(&CREATE_PERSON, &person)).unwrap();

    assert_eq!(body["variables"], json!({"name": " Ada ", "age": 36}));
}

#[test]
fn test_operation_names_match_documents() {
    for operation in [LIST_PERSONS, GET_PERSON, CREATE_PERSON, DELETE_PERSON] {
        assert!(
            operation.document.contains(operation.name),
            "{} not declared in its document",
            operation.name
        );
        assert!(operation.document.contains("uuid name age"));
    }
}

#[test]
fn test_create_document_uses_create_mutation() {
    assert!(CREATE_PERSON.document.starts_with("mutation CreatePerson"));
    assert!(CREATE_PERSON.document.contains("createPerson(name: $name, age: $age)"));
    assert!(!CREATE_PERSON.document.contains("deletePerson"));
}
