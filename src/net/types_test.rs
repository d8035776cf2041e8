use super::*;

// =============================================================
// Backend JSON field naming
// =============================================================

#[test]
fn user_parses_backend_camel_case() {
    let json = serde_json::json!({
        "id": "usr_1",
        "email": "a@rainos.app",
        "apiKey": "rk_live_abc",
        "subscriptionStatus": "active",
        "stripePriceId": "price_123",
        "usage": { "count": 12, "limit": 100 }
    });
    let user: User = serde_json::from_value(json).expect("user json");
    assert_eq!(user.api_key, "rk_live_abc");
    assert_eq!(user.subscription_status, SubscriptionStatus::Active);
    assert_eq!(user.stripe_price_id.as_deref(), Some("price_123"));
    assert_eq!(user.usage, Usage { count: 12, limit: 100 });
}

#[test]
fn user_price_id_is_optional() {
    let json = serde_json::json!({
        "id": "usr_2",
        "email": "b@rainos.app",
        "apiKey": "rk_live_def",
        "subscriptionStatus": "past_due",
        "usage": { "count": 0, "limit": 5 }
    });
    let user: User = serde_json::from_value(json).expect("user json");
    assert!(user.stripe_price_id.is_none());
    assert_eq!(user.subscription_status, SubscriptionStatus::PastDue);
}

#[test]
fn subscription_status_uses_snake_case_values() {
    let status: SubscriptionStatus = serde_json::from_str("\"past_due\"").expect("status");
    assert_eq!(status, SubscriptionStatus::PastDue);
    assert_eq!(
        serde_json::to_string(&SubscriptionStatus::Cancelled).expect("status"),
        "\"cancelled\""
    );
}

#[test]
fn session_tolerates_missing_refresh_metadata() {
    let json = serde_json::json!({ "access_token": "tok" });
    let session: Session = serde_json::from_value(json).expect("session json");
    assert_eq!(session.access_token, "tok");
    assert_eq!(session.refresh_token, "");
    assert_eq!(session.expires_at, 0);
}
