use super::*;

#[test]
fn toast_state_starts_empty() {
    assert_eq!(ToastState::default().current(), None);
}

#[test]
fn show_replaces_visible_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Info, "first");
    let second = state.show(ToastKind::Error, "second");
    assert_ne!(first, second);
    let current = state.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, ToastKind::Error);
}

#[test]
fn stale_dismiss_leaves_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastKind::Info, "first");
    let second = state.show(ToastKind::Success, "second");
    assert!(!state.dismiss(first));
    assert_eq!(state.current().map(|t| t.seq), Some(second));
    assert!(state.dismiss(second));
    assert_eq!(state.current(), None);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Info, "hello");
    assert!(state.dismiss(seq));
    assert!(!state.dismiss(seq));
}

#[test]
fn toast_duration_is_three_seconds() {
    assert_eq!(TOAST_DURATION, Duration::from_secs(3));
}

#[test]
fn css_modifier_matches_kind() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
    assert_eq!(ToastKind::Info.css_modifier(), "toast--info");
}
