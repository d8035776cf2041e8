//! REST helpers for the Rain OS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` outputs instead of panics so auth and
//! billing failures degrade UI behavior without crashing hydration. A
//! missing credential on an authorized call redirects to `/login` here;
//! the session coordinator does not poll for expiry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(feature = "hydrate")]
const API_BASE_URL: &str = "/api";

/// Extract a human-readable message from an error response body,
/// falling back to the HTTP status.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(str::to_owned)))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Bearer header value from the credential store. Redirects to `/login`
/// when no key is stored — an authorized call without a credential can
/// never succeed.
#[cfg(feature = "hydrate")]
fn bearer() -> Result<String, String> {
    match crate::util::credentials::load() {
        Some(key) => Ok(format!("Bearer {key}")),
        None => {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
            Err("Unauthorized: no API key found".to_owned())
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fail(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// Exchange an identity-provider token for a backend credential and user
/// record via `POST /api/auth/sync`. Called at most once per distinct
/// provider token; the session coordinator enforces the de-duplication.
///
/// # Errors
///
/// Returns an error string if the backend rejects the token or is
/// unreachable.
pub async fn sync_session(provider_token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE_URL}/auth/sync"))
            .json(&serde_json::json!({ "token": provider_token }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = provider_token;
        Err("not available on server".to_owned())
    }
}

/// Password login via `POST /api/auth/login`. Returns the issued API key;
/// the caller feeds it through the session coordinator's direct-key path.
///
/// # Errors
///
/// Returns an error string on invalid credentials or network failure.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LoginResponse {
            api_key: String,
        }
        let resp = gloo_net::http::Request::post(&format!("{API_BASE_URL}/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.api_key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the current user's profile via `GET /api/users/me`.
///
/// # Errors
///
/// Returns an error string if the request fails or the key is rejected.
pub async fn fetch_me() -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_BASE_URL}/users/me"))
            .header("Authorization", &bearer()?)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Rotate the account's API key via `POST /api/users/me/regenerate-key`.
/// The old key stops working immediately; callers follow up with an
/// explicit profile refetch to pick up the new one.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn regenerate_key() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE_URL}/users/me/regenerate-key"))
            .header("Authorization", &bearer()?)
            .json(&serde_json::json!({}))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a hosted checkout session for a plan upgrade. Returns the
/// redirect URL.
///
/// # Errors
///
/// Returns an error string if the session cannot be created.
pub async fn create_checkout_session(price_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "priceId": price_id });
        redirect_url_request("/stripe/create-checkout-session", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = price_id;
        Err("not available on server".to_owned())
    }
}

/// Create a hosted billing portal session for managing an existing
/// subscription. Returns the redirect URL.
///
/// # Errors
///
/// Returns an error string if the session cannot be created.
pub async fn create_portal_session() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        redirect_url_request("/stripe/create-portal-session", &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn redirect_url_request(path: &str, body: &serde_json::Value) -> Result<String, String> {
    #[derive(serde::Deserialize)]
    struct UrlResponse {
        url: String,
    }
    let resp = gloo_net::http::Request::post(&format!("{API_BASE_URL}{path}"))
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(fail(resp).await);
    }
    let body: UrlResponse = resp.json().await.map_err(|e| e.to_string())?;
    if body.url.is_empty() {
        return Err("No redirect URL received from server".to_owned());
    }
    Ok(body.url)
}
