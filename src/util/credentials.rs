//! Persisted API key storage.
//!
//! A single string slot in `localStorage`, surviving reloads. The session
//! coordinator is the only writer; other code (the HTTP helper attaching
//! the authorization header) takes snapshot reads. Requires a browser
//! environment; SSR builds read `None` and ignore writes.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rainos_api_key";

/// Read the stored API key, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the API key.
pub fn store(api_key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, api_key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_key;
    }
}

/// Remove the stored API key.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
