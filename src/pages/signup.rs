//! Signup page: provider account creation with OTP confirmation handoff.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::net::provider::SignUpOutcome;

/// Signup page.
///
/// Immediate sessions flow through the session coordinator (the gate
/// redirects home); accounts needing confirmation are sent to the OTP
/// entry page with the email carried in the query string.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::provider::sign_up(&email.get_untracked(), &password.get_untracked())
                .await
            {
                Ok(SignUpOutcome::SignedIn) => {
                    // The coordinator picks up the emitted session; the
                    // gate handles the redirect.
                }
                Ok(SignUpOutcome::ConfirmationRequired) => {
                    navigate(
                        &format!("/verify-email?email={}", email.get_untracked()),
                        NavigateOptions::default(),
                    );
                }
                Ok(SignUpOutcome::DuplicateEmail) => {
                    error.set(Some("An account with this email already exists.".to_owned()));
                }
                Err(e) => error.set(Some(e)),
            }
            pending.set(false);
        });
    };

    view! {
        <AuthLayout title="Create your account">
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
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        autocomplete="new-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|e| view! { <p class="auth-form__error">{e}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing up..." } else { "Sign up" }}
                </button>
            </form>

            <div class="auth-form__or">"Or"</div>

            <a class="btn btn--oauth" href=crate::net::provider::oauth_authorize_url("google")>
                "Sign up with Google"
            </a>

            <p class="auth-form__switch">
                "Already have an account? " <a href="/login">"Sign in"</a>
            </p>
        </AuthLayout>
    }
}
