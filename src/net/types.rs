//! Wire types shared with the Rain OS backend.
//!
//! Field names follow the backend's camelCase JSON, so every struct uses
//! `#[serde(rename_all = "camelCase")]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Monthly usage counters for the account. Reset server-side at the start
/// of each billing period.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Usage {
    pub count: u32,
    pub limit: u32,
}

/// Subscription state as reported by the payment provider via the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    PastDue,
}

/// Backend-resolved user profile, including the API key echoed back.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub api_key: String,
    pub subscription_status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_price_id: Option<String>,
    pub usage: Usage,
}

/// Identity-provider session: opaque access token plus refresh metadata.
///
/// The session coordinator holds a read-only, most-recent copy; the token
/// value is the session's identity for de-duplication purposes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: i64,
}
