use crate::{ClientError, ErrorKind};

use pd_core::NewPerson;

#[test]
fn test_core_validation_converts_with_field_name() {
    let core = NewPerson::new("", 5).unwrap_err();
    let err = ClientError::from(core);

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("name:"));
}

#[test]
fn test_kind_per_variant() {
    assert_eq!(
        ClientError::validation("bad").kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        ClientError::server(Some(500), "boom").kind(),
        ErrorKind::Server
    );
    assert_eq!(ClientError::not_found("gone").kind(), ErrorKind::NotFound);
}

#[test]
fn test_only_timed_out_transport_is_timeout() {
    let timed_out = ClientError::Transport {
        message: "deadline".to_string(),
        timed_out: true,
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        source: None,
    };
    let refused = ClientError::Transport {
        message: "refused".to_string(),
        timed_out: false,
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        source: None,
    };

    assert!(timed_out.is_timeout());
    assert!(!refused.is_timeout());
    assert!(!ClientError::server(None, "x").is_timeout());
    assert_eq!(refused.kind(), ErrorKind::Transport);
}

#[test]
fn test_display_includes_message() {
    let err = ClientError::server(Some(502), "upstream unavailable");
    assert!(err.to_string().starts_with("Server error: upstream unavailable"));
}
