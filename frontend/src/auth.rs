//! Authentication state, shared across views via Context.
//!
//! Two states: unauthenticated (no session) and authenticated (session
//! present). `login`/`logout` are the only mutation surface, and both
//! write through to the persisted store before touching the signal, so
//! no reader ever observes memory and storage disagreeing.

use aurora_shared::Session;
use leptos::prelude::*;

use crate::storage::SessionStore;

#[derive(Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.username.clone())
    }
}

/// Read/write handles to the auth state, shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the auth context from the surrounding provider.
///
/// Calling this outside the provider's scope is a programming error and
/// aborts with a diagnostic rather than silently defaulting.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided at the App root")
}

/// Restore the persisted session, if any. Runs exactly once at startup.
///
/// The restored token is not revalidated here; an expired or revoked
/// token only surfaces when an authenticated call fails later.
pub fn init_auth(ctx: &AuthContext) {
    if let Some(session) = SessionStore::load() {
        ctx.set_state.update(|state| state.session = Some(session));
    }
}

/// Persist and activate a fresh session.
///
/// `username` is the display name exactly as typed; the store and the
/// signal are updated in one step from any reader's perspective.
pub fn login(ctx: &AuthContext, token: String, username: String) {
    SessionStore::save(&token, &username);
    ctx.set_state
        .update(|state| state.session = Some(Session::new(token, username)));
}

/// Clear the persisted store and the in-memory state.
pub fn logout(ctx: &AuthContext) {
    SessionStore::clear();
    ctx.set_state.update(|state| state.session = None);
}
