use super::*;
use crate::net::error::NETWORK_ERROR_MESSAGE;

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn credentials_are_trimmed() {
    let credentials = validate_credentials("  a@x.com ", "pw").unwrap();
    assert_eq!(credentials, Credentials { email: "a@x.com".to_owned(), password: "pw".to_owned() });
}

#[test]
fn missing_fields_are_rejected() {
    for (email, password) in [("", "pw"), ("   ", "pw"), ("a@x.com", ""), ("", "")] {
        let err = validate_credentials(email, password).unwrap_err();
        assert_eq!(auth_error_message(&err), CREDENTIALS_REQUIRED_MESSAGE, "{email:?}/{password:?}");
    }
}

// =============================================================
// auth_error_message
// =============================================================

#[test]
fn client_errors_prefer_backend_message() {
    let err = ApiError::Backend { status: 400, message: Some("Email already registered".to_owned()) };
    assert_eq!(auth_error_message(&err), "Email already registered");
}

#[test]
fn client_errors_without_message_mean_bad_credentials() {
    for status in [400, 401] {
        let err = ApiError::Backend { status, message: None };
        assert_eq!(auth_error_message(&err), INVALID_CREDENTIALS_MESSAGE);
    }
}

#[test]
fn server_error_has_fixed_message() {
    let err = ApiError::Backend { status: 500, message: Some("NullPointerException".to_owned()) };
    assert_eq!(auth_error_message(&err), SERVER_ERROR_MESSAGE);
}

#[test]
fn other_statuses_fall_back_to_generic_message() {
    assert_eq!(auth_error_message(&ApiError::Backend { status: 503, message: None }), GENERIC_ERROR_MESSAGE);
    assert_eq!(auth_error_message(&ApiError::Backend { status: 409, message: Some("Taken".to_owned()) }), "Taken");
    assert_eq!(auth_error_message(&ApiError::Decode("role".to_owned())), GENERIC_ERROR_MESSAGE);
}

#[test]
fn network_failure_asks_to_check_connection() {
    assert_eq!(auth_error_message(&ApiError::Network("refused".to_owned())), NETWORK_ERROR_MESSAGE);
}
