//! Per-request session state.
//!
//! DESIGN
//! ======
//! `SessionState` is built fresh for every page request, filled by the
//! bootstrap, read by the guard and the views, and dropped with the request.
//! Nothing here is shared between requests. The two slots are separate
//! fields so the bootstrap can fill both at once with disjoint `&mut`
//! borrows instead of a lock.

pub mod auth;
pub mod bootstrap;
pub mod guard;

use serde::Serialize;

use crate::api::types::{SessionAdmin, SessionUser};

/// One named, optional session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    key: &'static str,
    value: Option<T>,
}

impl<T> Slot<T> {
    #[must_use]
    pub const fn empty(key: &'static str) -> Self {
        Self { key, value: None }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Replace the value, including with `None`.
    pub fn set(&mut self, value: Option<T>) {
        tracing::trace!(slot = self.key(), present = value.is_some(), "session slot set");
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

/// Session context for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub auth: Slot<SessionUser>,
    pub admin: Slot<SessionAdmin>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { auth: Slot::empty("auth"), admin: Slot::empty("admin") }
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user, if any. Never fetches.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.auth.get()
    }

    /// The signed-in admin, if any. Never fetches.
    #[must_use]
    pub fn admin(&self) -> Option<&SessionAdmin> {
        self.admin.get()
    }

    /// Snapshot embedded in rendered pages so the hydrating client starts
    /// from the same state the server rendered with.
    #[must_use]
    pub fn payload(&self) -> SessionPayload<'_> {
        SessionPayload { auth: self.user(), admin: self.admin() }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionPayload<'a> {
    pub auth: Option<&'a SessionUser>,
    pub admin: Option<&'a SessionAdmin>,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
