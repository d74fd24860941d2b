//! In-memory session model.
//!
//! A session exists only as a complete (token, username) pair. The
//! persisted store mirrors this: restoring from a half-written store
//! must read as logged out, never as a partial session.

use serde::{Deserialize, Serialize};

/// Credentials of an authenticated user.
///
/// `username` is kept exactly as the user typed it (it is a display
/// name); only the value transmitted to the service is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    /// Rebuild a session from independently persisted parts.
    ///
    /// Returns `None` unless both values are present (both-or-neither
    /// invariant).
    pub fn restore(token: Option<String>, username: Option<String>) -> Option<Self> {
        match (token, username) {
            (Some(token), Some(username)) => Some(Self { token, username }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
