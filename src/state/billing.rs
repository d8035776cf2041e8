//! Subscription plan catalog and price-id resolution.
//!
//! The free tier (5 actions/month) exists only in application logic; the
//! paid tiers map to payment-provider price ids. Plan resolution prefers
//! the user's price id and falls back to the usage limit, since older
//! accounts predate the price-id field on the profile.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use crate::net::types::{SubscriptionStatus, User};

/// Payment-provider price id for the Business plan ($29.99/month).
pub const BUSINESS_PRICE_ID: &str = "price_1SZorQRxvon07IxiYuLXggPZ";
/// Payment-provider price id for the Pro plan ($99.99/month).
pub const PRO_PRICE_ID: &str = "price_1SZos5Rxvon07Ixi6IgJ7t3m";

/// A subscription plan as shown on the billing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub limit: u32,
    pub price: &'static str,
    /// `None` for the free tier, which has no checkout flow.
    pub price_id: Option<&'static str>,
    pub description: &'static str,
}

pub const FREE: Plan = Plan {
    name: "Free",
    limit: 5,
    price: "$0",
    price_id: None,
    description: "Great for hobbyists looking to experiment. Get full access \
                  to our 3 Pillar Framework.",
};

pub const BUSINESS: Plan = Plan {
    name: "Business",
    limit: 100,
    price: "$29.99",
    price_id: Some(BUSINESS_PRICE_ID),
    description: "Perfect for local businesses, early-stage startups, product \
                  teams and solo-creators optimizing for the emerging answer \
                  engines.",
};

pub const PRO: Plan = Plan {
    name: "Pro",
    limit: 500,
    price: "$99.99",
    price_id: Some(PRO_PRICE_ID),
    description: "Ideal for enterprises, scaling SaaS brands, product teams \
                  and other power users optimizing for the emerging answer \
                  engines.",
};

/// Resolve a plan from a payment-provider price id.
pub fn plan_for_price_id(price_id: &str) -> Option<Plan> {
    match price_id {
        BUSINESS_PRICE_ID => Some(BUSINESS),
        PRO_PRICE_ID => Some(PRO),
        _ => None,
    }
}

/// Limit-based fallback tiering for accounts without a price id.
pub fn tier_for_limit(limit: u32) -> Plan {
    if limit <= FREE.limit {
        FREE
    } else if limit <= BUSINESS.limit {
        BUSINESS
    } else {
        PRO
    }
}

/// The plan a user is currently on: price id first, usage limit fallback.
pub fn current_plan(user: &User) -> Plan {
    user.stripe_price_id
        .as_deref()
        .and_then(plan_for_price_id)
        .unwrap_or_else(|| tier_for_limit(user.usage.limit))
}

/// Whether the user is on the free tier (no billing portal available).
pub fn is_free_plan(user: &User) -> bool {
    current_plan(user) == FREE
}

/// Display label and CSS modifier for a subscription status.
pub fn status_display(status: SubscriptionStatus) -> (&'static str, &'static str) {
    match status {
        SubscriptionStatus::Active => ("Active", "status--active"),
        SubscriptionStatus::Cancelled => ("Cancelled", "status--cancelled"),
        SubscriptionStatus::PastDue => ("Past Due", "status--past-due"),
    }
}
