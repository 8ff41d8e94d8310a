use super::*;

#[test]
fn plausible_email_accepts_normal_addresses() {
    assert!(is_plausible_email("a@x.com"));
    assert!(is_plausible_email("first.last@mail.example.org"));
}

#[test]
fn plausible_email_rejects_malformed_addresses() {
    for email in ["", "a", "a@", "@x.com", "a@x", "a@.com", "a@x.", "a b@x.com", "a@@x.com", "a@x@y.com"] {
        assert!(!is_plausible_email(email), "{email:?}");
    }
}

#[test]
fn blank_answer_is_rejected_for_both_channels() {
    for channel in [AnswerChannel::Consultant, AnswerChannel::Admin] {
        let err = build_answer(1, "   ", "c@x.com", channel).unwrap_err();
        assert_eq!(err, ApiError::validation(EMPTY_ANSWER_MESSAGE));
    }
}

#[test]
fn admin_answer_requires_plausible_session_email() {
    let err = build_answer(1, "A", "", AnswerChannel::Admin).unwrap_err();
    assert_eq!(err, ApiError::validation(INVALID_EMAIL_MESSAGE));
}

#[test]
fn consultant_answer_skips_email_shape_check() {
    let payload = build_answer(4, "A", "", AnswerChannel::Consultant).unwrap();
    assert_eq!(payload.consult_id, 4);
}

#[test]
fn valid_answer_builds_payload() {
    let payload = build_answer(9, "Restart it.", "admin@x.com", AnswerChannel::Admin).unwrap();
    assert_eq!(
        payload,
        AnswerPayload { consult_id: 9, answer: "Restart it.".to_owned(), email: "admin@x.com".to_owned() }
    );
}
