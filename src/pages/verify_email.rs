//! OTP email verification page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::auth_layout::AuthLayout;

/// Email verification page.
///
/// The email is pre-filled from the `email` query parameter set by the
/// signup page; users landing here directly can type it in. A successful
/// verification emits a session, and the session coordinator plus the
/// auth-only gate take it from there.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();

    let email = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let email_known = !email.get_untracked().is_empty();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let result =
                crate::net::provider::verify_otp(&email.get_untracked(), &code.get_untracked())
                    .await;
            if let Err(e) = result {
                error.set(Some(e));
            }
            pending.set(false);
        });
    };

    view! {
        <AuthLayout title="Verify your email">
            <p class="auth-form__note">
                "Please enter the verification code sent to "
                <strong>{move || email.get()}</strong>
            </p>

            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Verification Code"
                    <input
                        class="auth-form__input"
                        type="text"
                        required
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || !email_known>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                {move || error.get().map(|e| view! { <p class="auth-form__error">{e}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Verifying..." } else { "Verify" }}
                </button>
            </form>

            <p class="auth-form__switch">
                "Wrong address? " <a href="/signup">"Sign up again"</a>
            </p>
        </AuthLayout>
    }
}
