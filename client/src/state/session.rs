//! Persisted authentication session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth controller writes the session after a confirmed sign-in or
//! sign-up, the route guard and dashboard read it, and sign-out clears it.
//! Readers always go back to the store instead of caching an "authenticated"
//! flag, so an external sign-out (another tab, cleared storage) is observed on
//! the next check.
//!
//! DESIGN
//! ======
//! `SessionRecord` is the stored shape: every field optional, overwritten as a
//! whole on each write. `Session` is the resolved view handed to callers, with
//! defaults applied to fields that were never written.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::net::types::Role;
use crate::util::storage;

/// `localStorage` key holding the serialized `SessionRecord`.
pub const SESSION_STORAGE_KEY: &str = "wiz_session";

/// Placeholder for identity fields that were never written.
pub const UNKNOWN: &str = "unknown";

/// Stored session fields. Absent fields are omitted from the JSON record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Session as seen by readers, with defaults resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    /// Bearer token, if present and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether the protected area may be entered.
    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        SessionRecord::default().into()
    }
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Self {
            token: record.token,
            user_id: record.user_id.unwrap_or_else(|| UNKNOWN.to_owned()),
            email: record.email.unwrap_or_else(|| UNKNOWN.to_owned()),
            role: record.role.unwrap_or_default(),
        }
    }
}

/// Durable home of the session record.
///
/// Implementations never fail: unreadable storage reads as an empty session
/// and rejected writes are dropped.
pub trait SessionStore {
    /// Raw stored record, if any.
    fn load(&self) -> Option<SessionRecord>;

    /// Replace the stored record.
    fn write(&self, record: SessionRecord);

    /// Remove the stored record.
    fn clear(&self);

    /// Current session with defaults resolved.
    fn read(&self) -> Session {
        self.load().unwrap_or_default().into()
    }
}

/// Session store backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<SessionRecord> {
        storage::load_json(SESSION_STORAGE_KEY)
    }

    fn write(&self, record: SessionRecord) {
        storage::save_json(SESSION_STORAGE_KEY, &record);
    }

    fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
    }
}

/// In-memory session store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<SessionRecord>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `record`.
    pub fn with_record(record: SessionRecord) -> Self {
        let store = Self::new();
        store.write(record);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionRecord> {
        self.slot.borrow().clone()
    }

    fn write(&self, record: SessionRecord) {
        *self.slot.borrow_mut() = Some(record);
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
