use super::*;

fn consult(id: i64, answer: Option<&str>) -> Consult {
    Consult {
        id,
        question: format!("Q{id}"),
        answer: answer.map(str::to_owned),
        user_email: "a@x.com".to_owned(),
        created_at: None,
    }
}

#[test]
fn unanswered_filter_hides_answered_consults() {
    let items = vec![consult(1, Some("A")), consult(2, None), consult(3, Some(" "))];
    let ids: Vec<i64> = filter_consults(&items, true).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn disabled_filter_shows_everything_in_order() {
    let items = vec![consult(1, Some("A")), consult(2, None)];
    assert_eq!(filter_consults(&items, false), items);
}

#[test]
fn single_unanswered_consult_is_one_row() {
    let items: Vec<Consult> =
        serde_json::from_str(r#"[{"id":1,"question":"Q","userEmail":"a@x.com","answer":null}]"#).unwrap();
    let rows = filter_consults(&items, true);
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_answered());
}
