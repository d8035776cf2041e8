//! OAuth callback landing page.
//!
//! Exempt from both route gates: it receives the provider redirect,
//! hands the tokens to the session coordinator, and navigates on its
//! own once the sync settles.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;

/// Provider redirect landing page.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Parse the redirect fragment synchronously, before the session
    // coordinator's startup check first polls for a session, so the
    // coordinator finds the persisted tokens instead of an empty slot.
    let tokens_found = RwSignal::new(crate::net::provider::complete_redirect_callback().is_some());

    // The coordinator raises `loading` while the sync for our tokens is
    // in flight; once we have seen that, a quiet unauthenticated state
    // means the sync failed rather than "not started yet".
    let sync_started = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            sync_started.set(true);
            return;
        }
        if state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        } else if !tokens_found.get() || sync_started.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="callback-page">
            <h1 class="callback-page__brand">"Rain OS"</h1>
            <div class="callback-page__card">
                <Spinner class="spinner--xl"/>
                <h2>"Signing you in..."</h2>
                <p>"Please wait while we verify your credentials."</p>
            </div>
        </div>
    }
}
