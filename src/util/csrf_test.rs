use super::*;

#[test]
fn cookie_lookup_finds_named_pair() {
    let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
    assert_eq!(token_from_cookie_header(cookies, "csrftoken"), Some("tok123".to_owned()));
}

#[test]
fn cookie_lookup_ignores_prefix_collisions() {
    let cookies = "xcsrftoken=nope;csrftoken2=also-nope";
    assert_eq!(token_from_cookie_header(cookies, "csrftoken"), None);
    assert_eq!(token_from_cookie_header("", "csrftoken"), None);
}

#[test]
fn cookie_value_keeps_embedded_equals() {
    assert_eq!(token_from_cookie_header("csrftoken=a=b", "csrftoken"), Some("a=b".to_owned()));
}

#[test]
fn hidden_field_takes_precedence_over_cookie() {
    let token = resolve_token(Some("from-field".to_owned()), Some("from-cookie".to_owned()));
    assert_eq!(token, Ok("from-field".to_owned()));
}

#[test]
fn blank_field_falls_back_to_cookie() {
    let token = resolve_token(Some("  ".to_owned()), Some("from-cookie".to_owned()));
    assert_eq!(token, Ok("from-cookie".to_owned()));
    assert_eq!(resolve_token(None, Some("c".to_owned())), Ok("c".to_owned()));
}

#[test]
fn missing_token_is_an_explicit_error() {
    assert_eq!(resolve_token(None, None), Err(ClientError::MissingCsrfToken));
    assert_eq!(resolve_token(Some(String::new()), Some(String::new())), Err(ClientError::MissingCsrfToken));
}
