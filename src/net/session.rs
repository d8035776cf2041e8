//! Session coordinator: the single source of truth for "is there a
//! logged-in user, and who are they."
//!
//! The coordinator bridges the identity provider's session events to a
//! backend-verified `User` record. It multiplexes two credential
//! sources — a provider session exchanged through the backend sync
//! endpoint, and a directly supplied API key (password login, demo key)
//! — into the [`AuthState`] signal consumed by the rest of the app.
//!
//! Events are reduced through the pure `SessionMachine` in
//! `state::auth`, which enforces one backend sync per distinct provider
//! token and discards stale responses. Failure policy: a failed *sync*
//! forces sign-out (an unsynced session cannot establish identity), while
//! a failed *refetch* of an already-established identity is logged and
//! tolerated, preserving the last-known-good user.
//!
//! All network logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.

use leptos::prelude::RwSignal;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::auth::{SessionAction, SessionMachine};

#[cfg(feature = "hydrate")]
use crate::net::types::Session;
#[cfg(feature = "hydrate")]
use crate::net::{api, provider};
#[cfg(feature = "hydrate")]
use crate::util::credentials;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

// The machine is shared between the event loop and the explicit logout
// path, both on the single UI thread.
#[cfg(feature = "hydrate")]
thread_local! {
    static MACHINE: std::cell::RefCell<SessionMachine> =
        std::cell::RefCell::new(SessionMachine::new());
}

/// Spawn the session coordinator as a local async task.
///
/// Performs the initial session check (provider session first, then any
/// stored API key), then consumes provider session-change events for the
/// lifetime of the app.
pub fn spawn_session_coordinator(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(session_loop(auth));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

#[cfg(feature = "hydrate")]
async fn session_loop(auth: RwSignal<AuthState>) {
    use futures::StreamExt;

    // Subscribe before the initial check so a change event racing the
    // startup read is queued rather than lost.
    let mut events = provider::subscribe();

    match provider::current_session() {
        Some(session) => handle_event(auth, Some(session)).await,
        None => bootstrap_stored_key(auth).await,
    }

    while let Some(session) = events.next().await {
        handle_event(auth, session).await;
    }
}

/// Reduce one provider session event into state.
#[cfg(feature = "hydrate")]
async fn handle_event(auth: RwSignal<AuthState>, session: Option<Session>) {
    let action = MACHINE.with_borrow_mut(|m| m.on_session(session.as_ref()));
    match action {
        SessionAction::Sync { token } => {
            auth.update(|a| a.loading = true);
            match api::sync_session(&token).await {
                Ok(user) => {
                    // Discard if a newer token was processed while this
                    // response was in flight.
                    if MACHINE.with_borrow(|m| m.sync_succeeded(&token)) {
                        credentials::store(&user.api_key);
                        auth.update(|a| a.set_signed_in(user));
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("session sync failed: {e}");
                    if MACHINE.with_borrow_mut(|m| m.sync_failed(&token)) {
                        // Keep provider and backend state consistent: a
                        // session the backend will not honor is signed out.
                        provider::sign_out().await;
                        credentials::clear();
                        auth.update(AuthState::set_signed_out);
                    }
                }
            }
        }
        SessionAction::Clear => {
            credentials::clear();
            auth.update(AuthState::set_signed_out);
        }
        SessionAction::Ignore => {
            auth.update(|a| a.loading = false);
        }
    }
}

/// Startup path when no provider session exists: try the API key left by
/// a previous password login. A rejected key is cleared so the app does
/// not loop on a dead credential.
#[cfg(feature = "hydrate")]
async fn bootstrap_stored_key(auth: RwSignal<AuthState>) {
    if credentials::load().is_none() {
        auth.update(|a| a.loading = false);
        return;
    }
    match api::fetch_me().await {
        Ok(user) => {
            credentials::store(&user.api_key);
            auth.update(|a| a.set_signed_in(user));
        }
        Err(e) => {
            leptos::logging::warn!("stored API key rejected: {e}");
            credentials::clear();
            auth.update(AuthState::set_signed_out);
        }
    }
}

/// Direct-credential login: persist the key, then verify it by fetching
/// the profile. On failure the key is rolled back — credential and user
/// are never left out of step.
///
/// # Errors
///
/// Returns an error string if the key is rejected by the backend.
pub async fn login_with_key(auth: RwSignal<AuthState>, api_key: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        credentials::store(api_key);
        auth.update(|a| a.loading = true);
        match api::fetch_me().await {
            Ok(user) => {
                credentials::store(&user.api_key);
                auth.update(|a| a.set_signed_in(user));
                Ok(())
            }
            Err(e) => {
                credentials::clear();
                auth.update(AuthState::set_signed_out);
                Err(e)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, api_key);
        Err("not available on server".to_owned())
    }
}

/// Explicit logout. Provider sign-out is best-effort; local state is
/// cleared regardless. The machine is reset first so the provider's
/// resulting empty-session event finds nothing left to do.
pub async fn logout(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        MACHINE.with_borrow_mut(SessionMachine::reset);
        provider::sign_out().await;
        credentials::clear();
        auth.update(AuthState::set_signed_out);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Refresh the profile after a mutation (key regeneration, checkout
/// return). Transient failures are logged and surfaced to the caller but
/// never destroy an established session.
///
/// # Errors
///
/// Returns an error string if the fetch fails; state is left unchanged.
pub async fn refetch_user(auth: RwSignal<AuthState>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        if credentials::load().is_none() {
            auth.update(AuthState::set_signed_out);
            return Ok(());
        }
        match api::fetch_me().await {
            Ok(user) => {
                // The key may have rotated server-side; keep the stored
                // copy in step with the profile.
                credentials::store(&user.api_key);
                auth.update(|a| a.set_signed_in(user));
                Ok(())
            }
            Err(e) => {
                leptos::logging::warn!("profile refetch failed: {e}");
                Err(e)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err("not available on server".to_owned())
    }
}
