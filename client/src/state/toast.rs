//! Single-slot transient notification.
//!
//! DESIGN
//! ======
//! At most one toast is visible. Showing a new toast replaces the current one
//! and bumps a sequence number; a dismiss timer only clears the toast it was
//! started for, so a stale timer cannot hide a newer message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    last_seq: u64,
}

impl ToastState {
    /// Show `message`, replacing any visible toast. Returns the new sequence.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.last_seq += 1;
        self.current = Some(Toast { kind, message: message.into(), seq: self.last_seq });
        self.last_seq
    }

    /// Clear the toast with `seq` if it is still the visible one.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.seq == seq) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
