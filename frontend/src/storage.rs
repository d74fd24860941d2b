//! Persisted session store.
//!
//! Two fixed keys in browser LocalStorage hold the bearer token and the
//! display name. The store is the source of truth across restarts; the
//! in-memory auth state is a cache of it. Writes are best-effort: a
//! storage failure is logged and never crashes the application.

use aurora_shared::Session;
use gloo_storage::{LocalStorage, Storage};
use leptos::logging::warn;

const KEY_TOKEN: &str = "aurora_token";
const KEY_USERNAME: &str = "aurora_username";

pub struct SessionStore;

impl SessionStore {
    /// Write both halves of the session durably.
    pub fn save(token: &str, username: &str) {
        if let Err(e) = LocalStorage::set(KEY_TOKEN, token) {
            warn!("session store: failed to persist token: {e}");
        }
        if let Err(e) = LocalStorage::set(KEY_USERNAME, username) {
            warn!("session store: failed to persist username: {e}");
        }
    }

    /// Read back a persisted session.
    ///
    /// A half-written or unavailable store reads as logged out
    /// (both-or-neither, enforced by [`Session::restore`]).
    pub fn load() -> Option<Session> {
        let token = LocalStorage::get::<String>(KEY_TOKEN).ok();
        let username = LocalStorage::get::<String>(KEY_USERNAME).ok();
        Session::restore(token, username)
    }

    /// Remove both keys.
    pub fn clear() {
        LocalStorage::delete(KEY_TOKEN);
        LocalStorage::delete(KEY_USERNAME);
    }
}
