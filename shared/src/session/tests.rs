use super::*;

#[test]
fn restore_with_both_parts_yields_session() {
    let session = Session::restore(Some("abc".to_string()), Some("Maria ".to_string()));
    assert_eq!(session, Some(Session::new("abc", "Maria ")));
}

#[test]
fn restore_with_missing_username_is_logged_out() {
    assert_eq!(Session::restore(Some("abc".to_string()), None), None);
}

#[test]
fn restore_with_missing_token_is_logged_out() {
    assert_eq!(Session::restore(None, Some("maria".to_string())), None);
}

#[test]
fn restore_with_nothing_is_logged_out() {
    assert_eq!(Session::restore(None, None), None);
}

#[test]
fn username_is_not_renormalized() {
    // The display name keeps its original casing and whitespace.
    let session = Session::new("abc", "Maria ");
    assert_eq!(session.username, "Maria ");
}
