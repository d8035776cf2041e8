use super::*;

// =============================================================
// Loading always wins
// =============================================================

#[test]
fn loading_renders_placeholder_regardless_of_auth() {
    for kind in [RouteKind::Protected, RouteKind::AuthOnly] {
        for authenticated in [true, false] {
            assert_eq!(decide(kind, true, authenticated), GateDecision::Loading);
        }
    }
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_route_renders_for_authenticated_user() {
    assert_eq!(
        decide(RouteKind::Protected, false, true),
        GateDecision::Render
    );
}

#[test]
fn protected_route_redirects_anonymous_to_login() {
    assert_eq!(
        decide(RouteKind::Protected, false, false),
        GateDecision::RedirectLogin
    );
}

// =============================================================
// Auth-only routes
// =============================================================

#[test]
fn auth_only_route_redirects_authenticated_home() {
    assert_eq!(
        decide(RouteKind::AuthOnly, false, true),
        GateDecision::RedirectHome
    );
}

#[test]
fn auth_only_route_renders_for_anonymous_visitor() {
    assert_eq!(
        decide(RouteKind::AuthOnly, false, false),
        GateDecision::Render
    );
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn decision_is_idempotent() {
    for kind in [RouteKind::Protected, RouteKind::AuthOnly] {
        for loading in [true, false] {
            for authenticated in [true, false] {
                let first = decide(kind, loading, authenticated);
                let second = decide(kind, loading, authenticated);
                assert_eq!(first, second);
            }
        }
    }
}
