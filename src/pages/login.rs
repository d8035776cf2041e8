//! Login page: password login, demo key, and OAuth redirect.

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;
use crate::state::auth::AuthState;

/// API key used by the "Continue as Demo User" button. The backend
/// recognizes it and serves a canned account.
const DEMO_API_KEY: &str = "rainos-demo-key";

/// Login page.
///
/// Successful logins flip the auth state to authenticated; the
/// auth-only route gate then redirects to the dashboard, so no explicit
/// navigation happens here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let demo_pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() || demo_pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let email = email.get_untracked();
            let password = password.get_untracked();
            let result = match crate::net::api::login(&email, &password).await {
                Ok(api_key) => crate::net::session::login_with_key(auth, &api_key).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error.set(Some(e));
            }
            pending.set(false);
        });
    };

    let on_demo = move |_| {
        if pending.get() || demo_pending.get() {
            return;
        }
        demo_pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            if crate::net::session::login_with_key(auth, DEMO_API_KEY).await.is_err() {
                error.set(Some("Could not start demo session.".to_owned()));
            }
            demo_pending.set(false);
        });
    };

    view! {
        <AuthLayout title="Sign in to your account">
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        autocomplete="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-form__label">
                    <span class="auth-form__label-row">
                        "Password"
                        <a class="auth-form__hint-link" href="/forgot-password">
                            "Forgot your password?"
                        </a>
                    </span>
                    <input
                        class="auth-form__input"
                        type="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|e| view! { <p class="auth-form__error">{e}</p> })}

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || pending.get() || demo_pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <button
                class="btn btn--secondary auth-form__demo"
                on:click=on_demo
                disabled=move || pending.get() || demo_pending.get()
            >
                {move || {
                    if demo_pending.get() { "Starting demo..." } else { "Continue as Demo User" }
                }}
            </button>

            <div class="auth-form__or">"Or"</div>

            <a class="btn btn--oauth" href=crate::net::provider::oauth_authorize_url("google")>
                "Sign in with Google"
            </a>

            <p class="auth-form__switch">
                "Don't have an account? " <a href="/signup">"Sign up"</a>
            </p>
        </AuthLayout>
    }
}
