//! Password reset page, reached from the recovery email link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;

/// Reset-password page.
///
/// The recovery link carries a short-lived token in the URL fragment;
/// it authorizes exactly one password update. Without it the page only
/// offers the way back to the request form.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();

    let recovery_token = RwSignal::new(None::<String>);
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    Effect::new(move || {
        recovery_token.set(crate::net::provider::recovery_token_from_url());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let Some(token) = recovery_token.get_untracked() else {
            error.set(Some("This reset link is invalid or has expired.".to_owned()));
            return;
        };
        pending.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::provider::update_password(&token, &password.get_untracked()).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => error.set(Some(e)),
            }
            pending.set(false);
        });
    };

    view! {
        <AuthLayout title="Choose a new password">
            <Show
                when=move || recovery_token.get().is_some()
                fallback=move || {
                    view! {
                        <p class="auth-form__note">
                            "This reset link is invalid or has expired. "
                            <a href="/forgot-password">"Request a new one"</a>
                        </p>
                    }
                }
            >
                <form class="auth-form" on:submit=on_submit.clone()>
                    <label class="auth-form__label">
                        "New Password"
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
                        {move || if pending.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
            </Show>
        </AuthLayout>
    }
}
