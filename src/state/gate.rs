//! Route gating decisions based on auth state.
//!
//! Kept as a pure function over `{loading, authenticated}` so the routing
//! rules can be tested without rendering. The `Protected` / `AuthOnly`
//! wrapper components in `app` apply the decision.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// How a route is gated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires an authenticated user (dashboard, billing).
    Protected,
    /// Only meaningful for anonymous visitors (login, signup).
    AuthOnly,
}

/// What to render for a gated route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity is still resolving: neutral placeholder, no redirect.
    Loading,
    /// Render the requested subtree.
    Render,
    /// Redirect to `/login`, replacing history.
    RedirectLogin,
    /// Redirect to the application root, replacing history.
    RedirectHome,
}

/// Decide what a gated route should show.
///
/// While `loading` is true this always returns [`GateDecision::Loading`],
/// never a redirect, to avoid a flash redirect while identity is still
/// resolving.
pub fn decide(kind: RouteKind, loading: bool, authenticated: bool) -> GateDecision {
    if loading {
        return GateDecision::Loading;
    }
    match (kind, authenticated) {
        (RouteKind::Protected, true) | (RouteKind::AuthOnly, false) => GateDecision::Render,
        (RouteKind::Protected, false) => GateDecision::RedirectLogin,
        (RouteKind::AuthOnly, true) => GateDecision::RedirectHome,
    }
}
