use super::*;

// =============================================================
// Redirect fragment parsing
// =============================================================

#[test]
fn parses_tokens_from_redirect_fragment() {
    let session = parse_fragment(
        "#access_token=at-1&expires_at=1760000000&refresh_token=rt-1&token_type=bearer",
    )
    .expect("session");
    assert_eq!(session.access_token, "at-1");
    assert_eq!(session.refresh_token, "rt-1");
    assert_eq!(session.expires_at, 1_760_000_000);
}

#[test]
fn fragment_without_access_token_yields_none() {
    assert!(parse_fragment("#error=access_denied&error_code=403").is_none());
    assert!(parse_fragment("").is_none());
}

#[test]
fn fragment_with_empty_access_token_yields_none() {
    assert!(parse_fragment("#access_token=&refresh_token=rt").is_none());
}

#[test]
fn malformed_pair_does_not_drop_surrounding_tokens() {
    let session = parse_fragment("#access_token=at-1&prompt&refresh_token=rt-1")
        .expect("session");
    assert_eq!(session.access_token, "at-1");
    assert_eq!(session.refresh_token, "rt-1");
}

#[test]
fn unparsable_expiry_defaults_to_zero() {
    let session = parse_fragment("#access_token=at&expires_at=soon").expect("session");
    assert_eq!(session.expires_at, 0);
}

// =============================================================
// Expiry check
// =============================================================

#[test]
fn session_past_expiry_is_expired() {
    assert!(is_expired(100, 100));
    assert!(is_expired(100, 101));
}

#[test]
fn session_before_expiry_is_live() {
    assert!(!is_expired(100, 99));
}

#[test]
fn zero_expiry_means_no_expiry_enforced() {
    assert!(!is_expired(0, i64::MAX));
}
