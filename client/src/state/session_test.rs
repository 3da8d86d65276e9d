use super::*;

fn full_record() -> SessionRecord {
    SessionRecord {
        token: Some("abc".to_owned()),
        user_id: Some("1".to_owned()),
        email: Some("a@b.com".to_owned()),
        role: Some(Role::Admin),
    }
}

// =============================================================
// Session resolution
// =============================================================

#[test]
fn default_session_is_unauthenticated_with_sentinels() {
    let session = Session::default();
    assert_eq!(session.token, None);
    assert_eq!(session.user_id, UNKNOWN);
    assert_eq!(session.email, UNKNOWN);
    assert_eq!(session.role, Role::User);
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let session: Session = SessionRecord { token: Some(String::new()), ..SessionRecord::default() }.into();
    assert_eq!(session.bearer_token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn non_empty_token_is_authenticated() {
    let session: Session = full_record().into();
    assert_eq!(session.bearer_token(), Some("abc"));
    assert!(session.is_authenticated());
}

// =============================================================
// MemorySessionStore
// =============================================================

#[test]
fn read_on_empty_store_never_fails() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load(), None);
    assert_eq!(store.read(), Session::default());
}

#[test]
fn write_then_read_returns_written_values() {
    let store = MemorySessionStore::new();
    store.write(full_record());
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.user_id, "1");
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.role, Role::Admin);
}

#[test]
fn partial_write_defaults_only_missing_fields() {
    let store = MemorySessionStore::new();
    store.write(SessionRecord { token: Some("t".to_owned()), email: Some("e@x.io".to_owned()), ..SessionRecord::default() });
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("t"));
    assert_eq!(session.email, "e@x.io");
    assert_eq!(session.user_id, UNKNOWN);
    assert_eq!(session.role, Role::User);
}

#[test]
fn write_overwrites_the_whole_record() {
    let store = MemorySessionStore::with_record(full_record());
    store.write(SessionRecord { token: Some("next".to_owned()), ..SessionRecord::default() });
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("next"));
    assert_eq!(session.user_id, UNKNOWN);
    assert_eq!(session.role, Role::User);
}

#[test]
fn clear_is_idempotent() {
    let store = MemorySessionStore::with_record(full_record());
    store.clear();
    assert_eq!(store.load(), None);
    store.clear();
    assert_eq!(store.load(), None);
    assert_eq!(store.read(), Session::default());
}

#[test]
fn clones_share_storage() {
    let store = MemorySessionStore::new();
    let view = store.clone();
    store.write(full_record());
    assert!(view.read().is_authenticated());
    view.clear();
    assert!(!store.read().is_authenticated());
}

// =============================================================
// Persisted shape
// =============================================================

#[test]
fn record_json_omits_absent_fields() {
    let record = SessionRecord { token: Some("abc".to_owned()), ..SessionRecord::default() };
    assert_eq!(serde_json::to_value(&record).unwrap(), serde_json::json!({ "token": "abc" }));
}

#[test]
fn record_json_reads_partial_objects() {
    let record: SessionRecord = serde_json::from_str(r#"{"token":"abc","role":"ADMIN"}"#).unwrap();
    assert_eq!(record.token.as_deref(), Some("abc"));
    assert_eq!(record.user_id, None);
    assert_eq!(record.role, Some(Role::Admin));
}

#[test]
fn browser_store_reads_empty_outside_browser() {
    let store = BrowserSessionStore;
    store.write(full_record());
    assert_eq!(store.load(), None);
    assert!(!store.read().is_authenticated());
    store.clear();
}
