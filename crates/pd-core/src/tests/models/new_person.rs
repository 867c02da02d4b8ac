use crate::{CoreError, NewPerson};

fn field_of(err: CoreError) -> &'static str {
    match err {
        CoreError::Validation { field, .. } => field,
    }
}

#[test]
fn test_new_person_valid() {
    let person = NewPerson::new("Ada", 36).unwrap();

    assert_eq!(person.name(), "Ada");
    assert_eq!(person.age(), 36);
}

#[test]
fn test_new_person_keeps_name_as_given() {
    let person = NewPerson::new("  Ada Lovelace ", 36).unwrap();

    assert_eq!(person.name(), "  Ada Lovelace ");
}

#[test]
fn test_new_person_zero_age_allowed() {
    assert!(NewPerson::new("Newborn", 0).is_ok());
}

#[test]
fn test_new_person_no_upper_bound_on_age() {
    assert!(NewPerson::new("Old", 200).is_ok());
    assert!(NewPerson::new("Older", i32::MAX).is_ok());
}

#[test]
fn test_new_person_no_upper_bound_on_name_length() {
    let name = "a".repeat(300);
    let person = NewPerson::new(&name, 1).unwrap();

    assert_eq!(person.name().len(), 300);
}

#[test]
fn test_new_person_empty_name_rejected() {
    let err = NewPerson::new("", 5).unwrap_err();
    assert_eq!(field_of(err), "name");
}

#[test]
fn test_new_person_blank_name_rejected() {
    let err = NewPerson::new("   ", 5).unwrap_err();
    assert_eq!(field_of(err), "name");
}

#[test]
fn test_new_person_negative_age_rejected() {
    let err = NewPerson::new("Ada", -1).unwrap_err();
    assert_eq!(field_of(err), "age");
}

#[test]
fn test_validation_error_message_names_field() {
    let err = NewPerson::new("", 5).unwrap_err();
    assert!(err.to_string().contains("'name'"));
}
