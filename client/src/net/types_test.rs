use super::*;

#[test]
fn role_parse_is_case_insensitive_and_defaults_to_user() {
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse(" admin "), Role::Admin);
    assert_eq!(Role::parse("USER"), Role::User);
    assert_eq!(Role::parse("moderator"), Role::User);
    assert_eq!(Role::parse(""), Role::User);
}

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
}

#[test]
fn role_deserializes_null_as_user() {
    let role: Role = serde_json::from_str("null").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn login_response_accepts_numeric_user_id_alias() {
    let body = r#"{"token":"t","userId":42,"name":"Jane","email":"j@x.io","role":"ADMIN"}"#;
    let parsed: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.id, "42");
    assert_eq!(parsed.role, Some(Role::Admin));
}

#[test]
fn login_response_role_is_optional() {
    let parsed: LoginResponse = serde_json::from_str(r#"{"token":"abc","id":"1","email":"a@b.com"}"#).unwrap();
    assert_eq!(parsed.token, "abc");
    assert_eq!(parsed.id, "1");
    assert_eq!(parsed.role, None);
}

#[test]
fn login_response_rejects_missing_token() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"id":"1","email":"a@b.com"}"#).is_err());
}

#[test]
fn register_response_reads_user_id_field() {
    let body = r#"{"token":"t","userId":"7","email":"e@x.io","role":"USER"}"#;
    let parsed: RegisterResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.user_id, "7");
    assert_eq!(parsed.role, Role::User);
}

#[test]
fn user_record_fills_missing_optional_fields() {
    let parsed: UserRecord = serde_json::from_str(r#"{"id":3,"email":"x@y.z"}"#).unwrap();
    assert_eq!(parsed.id, "3");
    assert_eq!(parsed.name, "");
    assert_eq!(parsed.role, Role::User);
}

#[test]
fn sign_up_form_serializes_all_fields() {
    let form = SignUpForm {
        name: "Jane Doe".to_owned(),
        username: "janed".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret123".to_owned(),
        phone: "9876543210".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        serde_json::json!({
            "name": "Jane Doe",
            "username": "janed",
            "email": "jane@example.com",
            "password": "secret123",
            "phone": "9876543210",
        })
    );
}
