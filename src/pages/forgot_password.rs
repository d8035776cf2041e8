//! Password recovery request page.

use leptos::prelude::*;

use crate::components::auth_layout::AuthLayout;

/// Forgot-password page: sends a recovery email via the identity
/// provider. The recovery link lands on `/reset-password`.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match crate::net::provider::request_password_reset(&email.get_untracked()).await {
                Ok(()) => sent.set(true),
                Err(e) => error.set(Some(e)),
            }
            pending.set(false);
        });
    };

    view! {
        <AuthLayout title="Reset your password">
            <Show
                when=move || !sent.get()
                fallback=move || {
                    view! {
                        <p class="auth-form__note">
                            "Check your inbox — if an account exists for that address, \
                             a reset link is on its way."
                        </p>
                    }
                }
            >
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

                    {move || error.get().map(|e| view! { <p class="auth-form__error">{e}</p> })}

                    <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
            </Show>

            <p class="auth-form__switch">
                <a href="/login">"Back to sign in"</a>
            </p>
        </AuthLayout>
    }
}
