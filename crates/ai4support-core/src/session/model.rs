//! Session domain model.
//!
//! The "session" of this prototype is a single persisted value: the active
//! role. It survives restarts but carries no token, expiry, or server-side
//! validation.

use crate::auth::Role;
use serde::{Deserialize, Serialize};

/// Persisted session state.
///
/// `role` is `None` when nobody is logged in. An unreadable or unknown
/// stored value is treated the same as `None` by the storage adapter.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The active role, if any.
    pub role: Option<Role>,
}

impl SessionState {
    /// Creates an empty (logged-out) session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session state with the given role active.
    pub fn with_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Sets the active role.
    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Clears the active role.
    pub fn clear(&mut self) {
        self.role = None;
    }

    /// Returns true when a role is stored.
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_logged_out() {
        let state = SessionState::new();
        assert!(state.role.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_with_role() {
        let state = SessionState::with_role(Role::Admin);
        assert_eq!(state.role, Some(Role::Admin));
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_set_and_clear() {
        let mut state = SessionState::new();
        state.set_role(Role::User);
        assert_eq!(state.role, Some(Role::User));
        state.clear();
        assert!(state.role.is_none());
    }
}
