//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via Leptos context by the app shell; route guards and user-aware
//! components read it to coordinate login redirects and identity-dependent
//! rendering. No page reads ambient session globals directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used while the session bootstrap request is in flight.
    pub fn bootstrapping() -> Self {
        Self { user: None, loading: true }
    }
}
