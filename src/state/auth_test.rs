use super::*;
use crate::net::types::{SubscriptionStatus, Usage};

fn session(token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: "r".to_owned(),
        expires_at: 9_999_999_999,
    }
}

fn user(key: &str) -> User {
    User {
        id: "usr_1".to_owned(),
        email: "a@rainos.app".to_owned(),
        api_key: key.to_owned(),
        subscription_status: SubscriptionStatus::Active,
        stripe_price_id: None,
        usage: Usage { count: 1, limit: 5 },
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_starts_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.api_key.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn sign_in_sets_user_and_key_from_the_same_response() {
    let mut state = AuthState::default();
    state.set_signed_in(user("rk_1"));
    assert!(state.is_authenticated());
    assert_eq!(state.api_key.as_deref(), Some("rk_1"));
    assert!(!state.loading);
}

#[test]
fn sign_out_clears_user_and_key_together() {
    let mut state = AuthState::default();
    state.set_signed_in(user("rk_1"));
    state.set_signed_out();
    assert!(state.user.is_none());
    assert!(state.api_key.is_none());
    assert!(!state.loading);
}

// =============================================================
// SessionMachine: one sync per distinct token
// =============================================================

#[test]
fn first_token_triggers_sync() {
    let mut machine = SessionMachine::new();
    let action = machine.on_session(Some(&session("T")));
    assert_eq!(
        action,
        SessionAction::Sync {
            token: "T".to_owned()
        }
    );
}

#[test]
fn identical_token_redelivered_is_ignored() {
    let mut machine = SessionMachine::new();
    let first = machine.on_session(Some(&session("T")));
    let second = machine.on_session(Some(&session("T")));
    assert!(matches!(first, SessionAction::Sync { .. }));
    assert_eq!(second, SessionAction::Ignore);
}

#[test]
fn new_token_triggers_a_fresh_sync() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T1")));
    let action = machine.on_session(Some(&session("T2")));
    assert_eq!(
        action,
        SessionAction::Sync {
            token: "T2".to_owned()
        }
    );
}

#[test]
fn empty_session_after_processed_token_clears() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T")));
    assert_eq!(machine.on_session(None), SessionAction::Clear);
}

#[test]
fn empty_session_with_no_processed_token_is_ignored() {
    let mut machine = SessionMachine::new();
    assert_eq!(machine.on_session(None), SessionAction::Ignore);
}

// =============================================================
// SessionMachine: response staleness
// =============================================================

#[test]
fn current_sync_response_is_applied() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T")));
    assert!(machine.sync_succeeded("T"));
}

#[test]
fn stale_success_is_discarded_after_newer_token() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T1")));
    machine.on_session(Some(&session("T2")));
    assert!(!machine.sync_succeeded("T1"));
    assert!(machine.sync_succeeded("T2"));
}

#[test]
fn current_sync_failure_forces_sign_out_and_allows_retry() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T")));
    assert!(machine.sync_failed("T"));
    // Marker was cleared, so the same token may be synced again later.
    assert!(matches!(
        machine.on_session(Some(&session("T"))),
        SessionAction::Sync { .. }
    ));
}

#[test]
fn stale_failure_does_not_sign_out() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T1")));
    machine.on_session(Some(&session("T2")));
    assert!(!machine.sync_failed("T1"));
    // The newer token's state is untouched.
    assert!(machine.sync_succeeded("T2"));
}

// =============================================================
// SessionMachine: logout
// =============================================================

#[test]
fn reset_forgets_the_processed_token() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T")));
    machine.reset();
    // A re-delivered identical event must go through a fresh sync rather
    // than being ignored as a duplicate.
    assert_eq!(
        machine.on_session(Some(&session("T"))),
        SessionAction::Sync {
            token: "T".to_owned()
        }
    );
}

#[test]
fn logout_then_provider_empty_event_converges() {
    let mut machine = SessionMachine::new();
    machine.on_session(Some(&session("T")));
    machine.reset();
    // The provider's informational empty-session event after an explicit
    // logout finds no marker and does no further work.
    assert_eq!(machine.on_session(None), SessionAction::Ignore);
}
