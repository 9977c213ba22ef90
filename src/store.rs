//! Session Store
//!
//! Signed-in email and chosen role, shared across pages.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Role;

#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Email entered on the sign-in page
    pub email: String,
    /// Role picked after sign-in
    pub role: Option<Role>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &SessionStore, email: String) {
    store.email().set(email);
    store.role().set(None);
}

pub fn store_set_role(store: &SessionStore, role: Role) {
    store.role().set(Some(role));
}

/// Tracked read of the signed-in email
pub fn session_email(store: &SessionStore) -> String {
    store.email().get()
}

/// Tracked read of the chosen role
pub fn session_role(store: &SessionStore) -> Option<Role> {
    store.role().get()
}
