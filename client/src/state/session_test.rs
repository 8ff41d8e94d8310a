use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_wire_strings() {
    assert_eq!("USER".parse::<Role>(), Ok(Role::User));
    assert_eq!("CONSULTANT".parse::<Role>(), Ok(Role::Consultant));
    assert_eq!(" ADMIN ".parse::<Role>(), Ok(Role::Admin));
}

#[test]
fn role_rejects_unknown_and_lowercase_values() {
    assert_eq!("admin".parse::<Role>(), Err(UnknownRole("admin".to_owned())));
    assert!("SUPERUSER".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_display_matches_wire_form() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn role_serde_uses_uppercase_names() {
    assert_eq!(serde_json::to_string(&Role::Consultant).unwrap(), "\"CONSULTANT\"");
    let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, Role::Admin);
}

// =============================================================
// Session::from_stored
// =============================================================

#[test]
fn from_stored_complete_record_logs_in() {
    let session = Session::from_stored(
        Some("t1".to_owned()),
        Some("USER".to_owned()),
        Some("a@x.com".to_owned()),
    );
    assert_eq!(
        session,
        Session::LoggedIn { token: "t1".to_owned(), role: Role::User, email: "a@x.com".to_owned() }
    );
}

#[test]
fn from_stored_missing_email_keeps_empty_email() {
    let session = Session::from_stored(Some("t1".to_owned()), Some("ADMIN".to_owned()), None);
    assert_eq!(session.email(), Some(""));
    assert_eq!(session.role(), Some(Role::Admin));
}

#[test]
fn from_stored_token_without_role_is_logged_out() {
    let session = Session::from_stored(Some("t1".to_owned()), None, Some("a@x.com".to_owned()));
    assert_eq!(session, Session::LoggedOut);
}

#[test]
fn from_stored_role_without_token_is_logged_out() {
    let session = Session::from_stored(None, Some("USER".to_owned()), None);
    assert_eq!(session, Session::LoggedOut);
}

#[test]
fn from_stored_blank_token_is_logged_out() {
    let session = Session::from_stored(Some("   ".to_owned()), Some("USER".to_owned()), None);
    assert_eq!(session, Session::LoggedOut);
}

#[test]
fn from_stored_unrecognized_role_is_logged_out() {
    let session = Session::from_stored(Some("t1".to_owned()), Some("ROOT".to_owned()), None);
    assert_eq!(session, Session::LoggedOut);
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn logged_out_accessors_are_empty() {
    let session = Session::default();
    assert!(!session.is_logged_in());
    assert_eq!(session.token(), None);
    assert_eq!(session.role(), None);
    assert_eq!(session.email(), None);
}

#[test]
fn logged_in_accessors_expose_fields() {
    let session = Session::LoggedIn {
        token: "tok".to_owned(),
        role: Role::Consultant,
        email: "c@x.com".to_owned(),
    };
    assert!(session.is_logged_in());
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.role(), Some(Role::Consultant));
    assert_eq!(session.email(), Some("c@x.com"));
}
