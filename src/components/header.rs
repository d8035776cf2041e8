//! Top navigation bar for the dashboard: breadcrumb, account summary,
//! dark-mode toggle, and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::billing;

/// Dashboard header.
///
/// Logout goes through the session coordinator; the protected-route gate
/// handles the redirect once the state flips to unauthenticated.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let theme = RwSignal::new(crate::util::theme::load());
    let on_toggle_theme = move |_| {
        let next = theme.get().flipped();
        crate::util::theme::set(next);
        theme.set(next);
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            crate::net::session::logout(auth).await;
        });
    };

    let email = move || {
        auth.get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };
    let status = move || {
        auth.get()
            .user
            .map(|u| billing::status_display(u.subscription_status))
    };

    view! {
        <header class="header">
            <div class="header__crumbs">
                <span class="header__product">"Rain OS"</span>
                <span class="header__divider">"/"</span>
                <span class="header__section">"Dashboard"</span>
            </div>

            <div class="header__account">
                <button
                    class="header__theme-toggle"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                </button>

                <div class="header__identity">
                    <p class="header__email">{email}</p>
                    {move || {
                        status()
                            .map(|(label, class)| {
                                view! {
                                    <p class="header__status">
                                        <span class=format!("header__status-dot {class}")></span>
                                        {label}
                                    </p>
                                }
                            })
                    }}
                </div>

                <button class="btn btn--secondary" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
