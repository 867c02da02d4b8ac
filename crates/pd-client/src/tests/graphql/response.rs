use crate::ErrorKind;
use crate::graphql::GraphQlResponse;
use crate::graphql::payload::{DeletePersonData, PersonData, PersonsData};

use serde_json::json;

fn parse<D: serde::de::DeserializeOwned>(value: serde_json::Value) -> GraphQlResponse<D> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_data_returned_on_success() {
    let response: GraphQlResponse<PersonData> = parse(json!({
        "data": {"person": {"uuid": 1, "name": "Ada", "age": 36}}
    }));

    let data = response.into_result(200).unwrap();
    assert_eq!(data.person.unwrap().name, "Ada");
}

#[test]
fn test_null_list_parses() {
    let response: GraphQlResponse<PersonsData> = parse(json!({"data": {"persons": null}}));

    let data = response.into_result(200).unwrap();
    assert!(data.persons.is_none());
}

#[test]
fn test_errors_become_server_error() {
    let response: GraphQlResponse<PersonData> = parse(json!({
        "data": null,
        "errors": [
            {"message": "database offline", "path": ["person"]},
            {"message": "second failure"}
        ]
    }));

    let err = response.into_result(200).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    let text = err.to_string();
    assert!(text.contains("database offline (at person)"));
    assert!(text.contains("second failure"));
}

#[test]
fn test_not_found_code_becomes_not_found() {
    let response: GraphQlResponse<DeletePersonData> = parse(json!({
        "data": {"deletePerson": null},
        "errors": [{
            "message": "Person 9 does not exist",
            "path": ["deletePerson"],
            "extensions": {"code": "NOT_FOUND", "trace": "ignored"}
        }]
    }));

    let err = response.into_result(200).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_errors_take_precedence_over_status() {
    let response: GraphQlResponse<PersonData> = parse(json!({
        "errors": [{"message": "Unauthorized", "extensions": {"code": "UNAUTHENTICATED"}}]
    }));

    let err = response.into_result(401).unwrap_err();
    assert!(matches!(
        err,
        crate::ClientError::Server {
            status: Some(401),
            ..
        }
    ));
    assert!(err.to_string().contains("Unauthorized"));
}

#[test]
fn test_non_success_status_without_errors_is_server_error() {
    let response: GraphQlResponse<PersonData> = parse(json!({"data": {"person": null}}));

    let err = response.into_result(503).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
}

#[test]
fn test_missing_data_is_server_error() {
    let response: GraphQlResponse<PersonData> = parse(json!({}));

    let err = response.into_result(200).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(err.to_string().contains("no data"));
}

#[test]
fn test_empty_errors_array_is_not_a_failure() {
    let response: GraphQlResponse<PersonsData> = parse(json!({
        "data": {"persons": []},
        "errors": []
    }));

    assert!(response.into_result(200).is_ok());
}
