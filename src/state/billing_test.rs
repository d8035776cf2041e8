use super::*;
use crate::net::types::Usage;

fn user(price_id: Option<&str>, limit: u32) -> User {
    User {
        id: "usr_1".to_owned(),
        email: "a@rainos.app".to_owned(),
        api_key: "rk_1".to_owned(),
        subscription_status: SubscriptionStatus::Active,
        stripe_price_id: price_id.map(str::to_owned),
        usage: Usage { count: 0, limit },
    }
}

// =============================================================
// Price-id resolution
// =============================================================

#[test]
fn known_price_ids_resolve_to_their_plans() {
    assert_eq!(plan_for_price_id(BUSINESS_PRICE_ID), Some(BUSINESS));
    assert_eq!(plan_for_price_id(PRO_PRICE_ID), Some(PRO));
}

#[test]
fn unknown_price_id_resolves_to_none() {
    assert_eq!(plan_for_price_id("price_nonsense"), None);
}

// =============================================================
// Limit fallback
// =============================================================

#[test]
fn limit_tiers_map_to_free_business_pro() {
    assert_eq!(tier_for_limit(5), FREE);
    assert_eq!(tier_for_limit(100), BUSINESS);
    assert_eq!(tier_for_limit(500), PRO);
}

#[test]
fn limits_above_pro_still_map_to_pro() {
    assert_eq!(tier_for_limit(10_000), PRO);
}

// =============================================================
// Current plan
// =============================================================

#[test]
fn price_id_takes_priority_over_limit() {
    // Limit says Free, price id says Pro: price id wins.
    let user = user(Some(PRO_PRICE_ID), 5);
    assert_eq!(current_plan(&user), PRO);
}

#[test]
fn missing_price_id_falls_back_to_limit() {
    let user = user(None, 100);
    assert_eq!(current_plan(&user), BUSINESS);
}

#[test]
fn unknown_price_id_falls_back_to_limit() {
    let user = user(Some("price_retired"), 5);
    assert_eq!(current_plan(&user), FREE);
    assert!(is_free_plan(&user));
}

// =============================================================
// Status display
// =============================================================

#[test]
fn status_labels_are_human_readable() {
    assert_eq!(
        status_display(SubscriptionStatus::Active),
        ("Active", "status--active")
    );
    assert_eq!(
        status_display(SubscriptionStatus::PastDue),
        ("Past Due", "status--past-due")
    );
}
