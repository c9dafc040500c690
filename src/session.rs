//! Authenticated-session snapshot shared across the app.
//!
//! DESIGN
//! ======
//! Persisted session state (`auth_token` plus a serialized user record) is
//! read once at startup into a `Session` value that is provided via context
//! and passed explicitly into every API call, instead of each network module
//! re-reading browser storage behind the caller's back. Role predicates here
//! drive disabled/hidden controls and the advisory API-layer gate only; the
//! backend is the real authorization boundary.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// localStorage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Persisted user record. Only `role` matters to this UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Session snapshot: bearer token and the logged-in user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    /// Load from persisted browser storage. Empty off the browser.
    #[must_use]
    pub fn load() -> Self {
        Self {
            token: storage::load_string(TOKEN_KEY),
            user: storage::load_json(USER_KEY),
        }
    }

    /// Session with the given role, for wiring tests and previews.
    #[must_use]
    pub fn with_role(role: &str) -> Self {
        Self {
            token: None,
            user: Some(SessionUser {
                name: String::new(),
                role: role.to_owned(),
            }),
        }
    }

    fn role_lower(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.role.to_lowercase())
    }

    /// Admin-only operations: service mutations and appointment deletion.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role_lower().as_deref() == Some("admin")
    }

    /// Scheduling staff may create and update appointments.
    #[must_use]
    pub fn can_schedule(&self) -> bool {
        matches!(self.role_lower().as_deref(), Some("admin" | "doctor" | "staff"))
    }

    /// Purge the persisted session keys (401 handling).
    pub fn clear_persisted() {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_KEY);
    }
}
