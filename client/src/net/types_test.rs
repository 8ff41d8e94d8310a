use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_into_session_uses_backend_email() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"t1","role":"CONSULTANT","email":"c@x.com"}"#).unwrap();
    let session = resp.into_session("typed@x.com").unwrap();
    assert_eq!(
        session,
        Session::LoggedIn { token: "t1".to_owned(), role: Role::Consultant, email: "c@x.com".to_owned() }
    );
}

#[test]
fn login_response_falls_back_to_typed_email() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t1","role":"USER"}"#).unwrap();
    let session = resp.into_session("typed@x.com").unwrap();
    assert_eq!(session.email(), Some("typed@x.com"));

    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t1","role":"USER","email":""}"#).unwrap();
    assert_eq!(resp.into_session("typed@x.com").unwrap().email(), Some("typed@x.com"));
}

#[test]
fn login_response_with_unknown_role_is_rejected() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t1","role":"GUEST"}"#).unwrap();
    assert!(resp.into_session("a@x.com").is_err());
}

// =============================================================
// Consult
// =============================================================

#[test]
fn consult_decodes_camel_case_and_null_answer() {
    let consult: Consult = serde_json::from_str(
        r#"{"id":1,"question":"Q","userEmail":"a@x.com","answer":null,"answered":false,"createdAt":"2024-01-01T10:00:00"}"#,
    )
    .unwrap();
    assert_eq!(consult.id, 1);
    assert_eq!(consult.user_email, "a@x.com");
    assert_eq!(consult.answer, None);
    assert!(!consult.is_answered());
}

#[test]
fn consult_blank_answer_counts_as_unanswered() {
    let consult: Consult =
        serde_json::from_str(r#"{"id":2,"question":"Q","userEmail":"a@x.com","answer":"  "}"#).unwrap();
    assert_eq!(consult.answer_text(), None);
    assert!(!consult.is_answered());
}

#[test]
fn consult_with_answer_is_answered() {
    let consult: Consult =
        serde_json::from_str(r#"{"id":3,"question":"Q","userEmail":"a@x.com","answer":"A"}"#).unwrap();
    assert_eq!(consult.answer_text(), Some("A"));
}

#[test]
fn consult_tolerates_null_or_missing_user_email() {
    let consults: Vec<Consult> = serde_json::from_str(
        r#"[{"id":4,"question":"Q","userEmail":null},{"id":5,"question":"Q"},{"id":6,"question":"Q","userEmail":"a@x.com"}]"#,
    )
    .unwrap();
    assert_eq!(consults.len(), 3);
    assert_eq!(consults[0].user_email, "");
    assert_eq!(consults[1].user_email, "");
    assert_eq!(consults[2].user_email, "a@x.com");
}

// =============================================================
// Outgoing payloads
// =============================================================

#[test]
fn user_payload_omits_missing_password() {
    let payload = UserPayload { email: "u@x.com".to_owned(), password: None, role: Role::User };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "email": "u@x.com", "role": "USER" }));
}

#[test]
fn user_payload_includes_password_when_set() {
    let payload = UserPayload { email: "u@x.com".to_owned(), password: Some("pw".to_owned()), role: Role::Admin };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "email": "u@x.com", "password": "pw", "role": "ADMIN" })
    );
}

#[test]
fn answer_payload_uses_consult_id_key() {
    let payload = AnswerPayload { consult_id: 7, answer: "A".to_owned(), email: "c@x.com".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "consultId": 7, "answer": "A", "email": "c@x.com" })
    );
}

#[test]
fn consult_request_uses_user_email_key() {
    let payload = ConsultRequest { question: "Q".to_owned(), user_email: "a@x.com".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "question": "Q", "userEmail": "a@x.com" })
    );
}

#[test]
fn user_decodes_role_enum() {
    let users: Vec<User> = serde_json::from_str(
        r#"[{"id":1,"email":"a@x.com","role":"ADMIN","password":"hash"},{"id":2,"email":"b@x.com","role":"USER"}]"#,
    )
    .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, ListedRole::Known(Role::Admin));
    assert_eq!(users[1].email, "b@x.com");
}

#[test]
fn user_list_keeps_unrecognized_role_rows() {
    let users: Vec<User> = serde_json::from_str(
        r#"[{"id":1,"email":"a@x.com","role":"SUPERVISOR"},{"id":2,"email":"b@x.com","role":"CONSULTANT"}]"#,
    )
    .unwrap();
    assert_eq!(users[0].role, ListedRole::Other("SUPERVISOR".to_owned()));
    assert_eq!(users[0].role.known(), None);
    assert_eq!(users[0].role.label(), "SUPERVISOR");
    assert_eq!(users[1].role.known(), Some(Role::Consultant));
    assert_eq!(users[1].role.label(), "Consultant");
}

// =============================================================
// FineTuneStatus
// =============================================================

#[test]
fn fine_tune_status_parses_plain_and_quoted() {
    assert_eq!(FineTuneStatus::parse("enabled"), Some(FineTuneStatus::Enabled));
    assert_eq!(FineTuneStatus::parse(" disabled\n"), Some(FineTuneStatus::Disabled));
    assert_eq!(FineTuneStatus::parse("\"enabled\""), Some(FineTuneStatus::Enabled));
    assert_eq!(FineTuneStatus::parse("on"), None);
}

#[test]
fn fine_tune_status_toggles() {
    assert_eq!(FineTuneStatus::Enabled.toggled(), FineTuneStatus::Disabled);
    assert_eq!(FineTuneStatus::Disabled.toggled(), FineTuneStatus::Enabled);
}
