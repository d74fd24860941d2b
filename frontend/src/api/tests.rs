use super::*;

#[test]
fn form_encode_joins_fields_with_ampersand() {
    let body = form_encode(&[("username", "maria"), ("password", "secret1")]);
    assert_eq!(body, "username=maria&password=secret1");
}

#[test]
fn form_encode_escapes_reserved_characters() {
    let body = form_encode(&[("password", "p@ss wo&rd=1")]);
    assert_eq!(body, "password=p%40ss%20wo%26rd%3D1");
}

#[test]
fn base_url_trailing_slash_is_dropped() {
    let api = AuroraApi::new("http://example.test/api/v1/".to_string());
    assert_eq!(api.url("/login"), "http://example.test/api/v1/login");
}

#[test]
fn error_display_carries_the_raw_message() {
    let err = ApiError::Client("usuário já existe".to_string());
    assert_eq!(err.to_string(), "usuário já existe");
}
