use super::*;

#[test]
fn resolve_base_url_falls_back_when_unset_or_blank() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_BASE_URL);
    assert_eq!(resolve_base_url(Some("http://localhost:8080")), "http://localhost:8080");
}

#[test]
fn endpoint_normalizes_slashes() {
    assert_eq!(endpoint("http://api.test/", "/api/users"), "http://api.test/api/users");
    assert_eq!(endpoint("http://api.test", "api/users"), "http://api.test/api/users");
    assert_eq!(endpoint("", LOGIN_PATH), "/api/auth/login");
}
