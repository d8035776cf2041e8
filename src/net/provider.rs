//! Identity-provider client (GoTrue-style REST) and session event source.
//!
//! The provider owns authentication proper: email/password sign-up, OTP
//! email verification, OAuth redirects, and password recovery. Its output
//! is a [`Session`] persisted in `localStorage`; every session-changing
//! operation pushes `Option<Session>` to all subscribers, so the session
//! coordinator consumes a single ordered channel of events rather than
//! polling.
//!
//! All network and storage access is gated behind `hydrate`; SSR builds
//! see no session and inert operations.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use super::types::Session;

#[cfg(feature = "hydrate")]
const PROVIDER_URL: &str = "https://auth.rainos.app/auth/v1";
#[cfg(feature = "hydrate")]
const PROVIDER_KEY: &str = "rainos-web-public";
#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rainos_provider_session";

#[cfg(feature = "hydrate")]
thread_local! {
    static SUBSCRIBERS: std::cell::RefCell<
        Vec<futures::channel::mpsc::UnboundedSender<Option<Session>>>,
    > = const { std::cell::RefCell::new(Vec::new()) };
}

/// Outcome of a sign-up attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Session issued immediately; the coordinator will pick it up.
    SignedIn,
    /// Confirmation email sent; the user must enter the OTP code.
    ConfirmationRequired,
    /// An account with this email already exists.
    DuplicateEmail,
}

/// Whether a session's token has passed its expiry timestamp.
/// `expires_at == 0` means the provider sent no expiry.
fn is_expired(expires_at: i64, now: i64) -> bool {
    expires_at != 0 && expires_at <= now
}

/// Parse a provider redirect fragment (`access_token=...&refresh_token=...`)
/// into a session. Returns `None` when no access token is present.
fn parse_fragment(fragment: &str) -> Option<Session> {
    let mut access_token = None;
    let mut refresh_token = String::new();
    let mut expires_at = 0;
    for pair in fragment.trim_start_matches('#').split('&') {
        // Skip bare flags and other malformed pairs rather than failing
        // the whole parse.
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = value.to_owned(),
            "expires_at" => expires_at = value.parse().unwrap_or(0),
            _ => {}
        }
    }
    let access_token = access_token.filter(|t| !t.is_empty())?;
    Some(Session {
        access_token,
        refresh_token,
        expires_at,
    })
}

#[cfg(feature = "hydrate")]
fn now_secs() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
}

/// One-shot read of the persisted session, dropping it if expired.
pub fn current_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        let session: Session = serde_json::from_str(&raw).ok()?;
        if is_expired(session.expires_at, now_secs()) {
            let _ = storage.remove_item(STORAGE_KEY);
            return None;
        }
        Some(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Subscribe to session change events. The returned receiver yields the
/// new session (or `None` on sign-out) after every session-changing
/// provider operation, in the order they occur.
#[cfg(feature = "hydrate")]
pub fn subscribe() -> futures::channel::mpsc::UnboundedReceiver<Option<Session>> {
    let (tx, rx) = futures::channel::mpsc::unbounded();
    SUBSCRIBERS.with_borrow_mut(|subs| subs.push(tx));
    rx
}

#[cfg(feature = "hydrate")]
fn emit(session: Option<&Session>) {
    SUBSCRIBERS.with_borrow_mut(|subs| {
        subs.retain(|tx| tx.unbounded_send(session.cloned()).is_ok());
    });
}

#[cfg(feature = "hydrate")]
fn persist(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(session) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
    emit(Some(session));
}

#[cfg(feature = "hydrate")]
fn discard() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    emit(None);
}

/// Sign out of the provider. The remote revocation is best-effort: local
/// state is cleared and the sign-out event emitted even if the call
/// fails, since the user-visible contract ("you are logged out") must
/// hold regardless.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(session) = current_session() {
            let result = gloo_net::http::Request::post(&format!("{PROVIDER_URL}/logout"))
                .header("apikey", PROVIDER_KEY)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .send()
                .await;
            if let Err(e) = result {
                leptos::logging::warn!("provider sign-out failed: {e}");
            }
        }
        discard();
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_at: i64,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    user: Option<ProviderUser>,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ProviderUser {
    #[serde(default)]
    identities: Option<Vec<serde_json::Value>>,
}

#[cfg(feature = "hydrate")]
impl TokenResponse {
    fn into_session(self) -> Option<Session> {
        if self.access_token.is_empty() {
            return None;
        }
        let expires_at = if self.expires_at != 0 {
            self.expires_at
        } else if self.expires_in != 0 {
            now_secs() + self.expires_in
        } else {
            0
        };
        Some(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
        })
    }
}

#[cfg(feature = "hydrate")]
async fn provider_error(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["msg", "message", "error_description"]
                .iter()
                .find_map(|k| v.get(k).and_then(|m| m.as_str().map(str::to_owned)))
        })
        .unwrap_or_else(|| format!("Provider request failed with status {status}"))
}

/// Create an account with email and password.
///
/// # Errors
///
/// Returns an error string if the provider rejects the request.
pub async fn sign_up(email: &str, password: &str) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{PROVIDER_URL}/signup"))
            .header("apikey", PROVIDER_KEY)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_error(resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        // The provider signals an existing account by returning a user
        // with no identities instead of an error.
        if let Some(user) = &body.user {
            if user.identities.as_ref().is_some_and(Vec::is_empty) {
                return Ok(SignUpOutcome::DuplicateEmail);
            }
        }
        match body.into_session() {
            Some(session) => {
                persist(&session);
                Ok(SignUpOutcome::SignedIn)
            }
            None => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Verify a signup OTP code. On success the issued session is persisted
/// and emitted, so the session coordinator takes over from there.
///
/// # Errors
///
/// Returns an error string if the code is invalid or expired.
pub async fn verify_otp(email: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{PROVIDER_URL}/verify"))
            .header("apikey", PROVIDER_KEY)
            .json(&serde_json::json!({ "type": "signup", "email": email, "token": token }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_error(resp).await);
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        match body.into_session() {
            Some(session) => {
                persist(&session);
                Ok(())
            }
            None => Err("Verification succeeded but no session was issued".to_owned()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, token);
        Err("not available on server".to_owned())
    }
}

/// Request a password recovery email.
///
/// # Errors
///
/// Returns an error string if the provider rejects the request.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{PROVIDER_URL}/recover"))
            .header("apikey", PROVIDER_KEY)
            .json(&serde_json::json!({ "email": email }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Set a new password using the recovery token delivered in the reset
/// link's URL fragment.
///
/// # Errors
///
/// Returns an error string if the recovery token is invalid or expired.
pub async fn update_password(recovery_token: &str, new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&format!("{PROVIDER_URL}/user"))
            .header("apikey", PROVIDER_KEY)
            .header("Authorization", &format!("Bearer {recovery_token}"))
            .json(&serde_json::json!({ "password": new_password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(provider_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (recovery_token, new_password);
        Err("not available on server".to_owned())
    }
}

/// OAuth authorization URL for a redirect-based flow. The provider lands
/// back on `/auth/callback` with tokens in the URL fragment.
pub fn oauth_authorize_url(oauth_provider: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        format!(
            "{PROVIDER_URL}/authorize?provider={oauth_provider}&redirect_to={origin}/auth/callback"
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format!("/auth/callback?provider={oauth_provider}")
    }
}

/// Extract the recovery token from a password-reset link's URL fragment.
///
/// Recovery sessions authorize exactly one password update, so the token
/// is handed to the caller rather than persisted as a login session.
pub fn recovery_token_from_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let fragment = web_sys::window()?.location().hash().ok()?;
        parse_fragment(&fragment).map(|s| s.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Complete a redirect-based flow: parse tokens out of the current URL
/// fragment, persist the session, and emit it to subscribers. Clears the
/// fragment so tokens do not linger in the address bar.
///
/// Returns `None` when the current URL carries no provider tokens.
pub fn complete_redirect_callback() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let fragment = window.location().hash().ok()?;
        let session = parse_fragment(&fragment)?;
        let _ = window.location().set_hash("");
        persist(&session);
        Some(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
