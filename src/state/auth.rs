//! Authentication state and the session reducer.
//!
//! DESIGN
//! ======
//! The reactive tuple consumed by the UI lives in [`AuthState`] (provided
//! as an `RwSignal` context). The event-ordering rules — one backend sync
//! per distinct provider token, stale responses discarded, logout clears
//! the de-duplication marker — live in [`SessionMachine`], which is pure
//! so it can be tested without a browser. The async wiring that feeds it
//! is in `net::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Authoritative auth tuple: the backend-verified user, the stored API
/// key, and whether identity resolution is still in flight.
///
/// `user` and `api_key` are set and cleared together; a non-`None` key
/// always corresponds to a profile successfully fetched with that key.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub api_key: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Starts in the loading state: no session check has been attempted
    /// yet, so route gates must not redirect.
    fn default() -> Self {
        Self {
            user: None,
            api_key: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Set user and key from the same sync response. Consumers never
    /// observe one without the other.
    pub fn set_signed_in(&mut self, user: User) {
        self.api_key = Some(user.api_key.clone());
        self.user = Some(user);
        self.loading = false;
    }

    pub fn set_signed_out(&mut self) {
        self.user = None;
        self.api_key = None;
        self.loading = false;
    }
}

/// What the coordinator should do in response to a session event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Exchange this provider token for a backend credential and user.
    Sync { token: String },
    /// Sign-out observed: drop credential and user.
    Clear,
    /// Duplicate or irrelevant event; at most drop the loading flag.
    Ignore,
}

/// Single-consumer reducer over identity-provider session events.
///
/// Holds the processed-token marker: the provider emits an initial session
/// on startup and may immediately re-emit the identical token as a change
/// event, and without de-duplication the backend sync would be issued
/// twice concurrently for the same credential. The marker is set before
/// the sync request goes out, and responses are only applied while the
/// token they were requested for is still the current one, so a stale
/// response cannot overwrite state established by a newer, faster sync.
#[derive(Debug, Default)]
pub struct SessionMachine {
    processed_token: Option<String>,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce a delivered session into an action. Marks a new token as
    /// processed immediately, before the caller issues the network call.
    pub fn on_session(&mut self, session: Option<&Session>) -> SessionAction {
        match session {
            Some(session) => {
                if self.processed_token.as_deref() == Some(session.access_token.as_str()) {
                    return SessionAction::Ignore;
                }
                self.processed_token = Some(session.access_token.clone());
                SessionAction::Sync {
                    token: session.access_token.clone(),
                }
            }
            None => {
                if self.processed_token.take().is_some() {
                    SessionAction::Clear
                } else {
                    SessionAction::Ignore
                }
            }
        }
    }

    /// Whether a successful sync response for `token` may be applied.
    /// Stale responses (the current token has moved on) are discarded.
    pub fn sync_succeeded(&self, token: &str) -> bool {
        self.processed_token.as_deref() == Some(token)
    }

    /// Whether a failed sync for `token` should force sign-out. Clears
    /// the marker on a current failure so a later retry is not treated as
    /// a duplicate; stale failures are discarded.
    pub fn sync_failed(&mut self, token: &str) -> bool {
        if self.processed_token.as_deref() == Some(token) {
            self.processed_token = None;
            true
        } else {
            false
        }
    }

    /// Explicit logout: forget the processed token so a re-delivered
    /// identical session event cannot resurrect the previous user
    /// without a fresh backend sync.
    pub fn reset(&mut self) {
        self.processed_token = None;
    }
}
