//! Dashboard home: account overview, usage meter, and API key
//! management.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::net::types::Usage;
use crate::state::auth::AuthState;
use crate::state::billing;

/// Dashboard home page.
#[component]
pub fn DashboardHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <DashboardLayout>
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        let (status_label, status_class) =
                            billing::status_display(user.subscription_status);
                        let initial = user
                            .email
                            .chars()
                            .next()
                            .map(|c| c.to_uppercase().to_string())
                            .unwrap_or_default();
                        let status_value_class =
                            format!("overview__status-value {status_class}");
                        view! {
                            <div class="overview">
                                <header class="overview__header">
                                    <h1>"User Overview"</h1>
                                    <p>"Manage your Rain OS plugin connection and subscription."</p>
                                </header>

                                <div class="overview__grid">
                                    <section class="card overview__account">
                                        <div class="overview__identity">
                                            <div class="overview__avatar">{initial}</div>
                                            <div>
                                                <h3>"Rain OS User"</h3>
                                                <p class="overview__email">{user.email.clone()}</p>
                                            </div>
                                            <div class="overview__status">
                                                <p class="overview__status-label">"Status"</p>
                                                <p class=status_value_class>
                                                    {status_label}
                                                </p>
                                            </div>
                                        </div>
                                        <h3 class="overview__usage-title">
                                            "Monthly Actions Limit"
                                        </h3>
                                        <UsageBar usage=user.usage.clone()/>
                                    </section>

                                    <ApiKeyCard api_key=user.api_key.clone()/>
                                </div>
                            </div>
                        }
                    })
            }}
        </DashboardLayout>
    }
}

/// Usage meter with warning thresholds at 75% and 90%.
#[component]
fn UsageBar(usage: Usage) -> impl IntoView {
    let percentage = if usage.limit > 0 {
        (f64::from(usage.count) / f64::from(usage.limit) * 100.0).min(100.0)
    } else {
        0.0
    };
    let bar_class = if percentage > 90.0 {
        "usage-bar__fill usage-bar__fill--danger"
    } else if percentage > 75.0 {
        "usage-bar__fill usage-bar__fill--warn"
    } else {
        "usage-bar__fill"
    };

    view! {
        <div class="usage-bar">
            <div class="usage-bar__numbers">
                <span class="usage-bar__count">{usage.count}</span>
                <span class="usage-bar__limit">{format!(" / {} Actions", usage.limit)}</span>
                <span class="usage-bar__pct">{format!("{percentage:.1}% Used")}</span>
            </div>
            <div class="usage-bar__track">
                <div class=bar_class style=format!("width: {percentage}%")></div>
            </div>
            <p class="usage-bar__note">"1 Analysis = 1 Action"</p>
        </div>
    }
}

/// API key panel: masked display, clipboard copy, and key rotation with
/// an explicit profile refetch afterwards.
#[component]
fn ApiKeyCard(api_key: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let copied = RwSignal::new(false);
    let regenerating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let key_for_copy = api_key.clone();
    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let key = key_for_copy.clone();
            leptos::task::spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&key);
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                        copied.set(true);
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &key_for_copy;
        }
    };

    let on_regenerate = move |_| {
        if regenerating.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message(
                    "Are you sure you want to regenerate your key? \
                     The old one will stop working immediately.",
                )
                .unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            regenerating.set(true);
            error.set(None);

            leptos::task::spawn_local(async move {
                let result = match crate::net::api::regenerate_key().await {
                    Ok(()) => crate::net::session::refetch_user(auth).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    error.set(Some(e));
                }
                regenerating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, error);
        }
    };

    view! {
        <section class="card api-key-card">
            <div class="api-key-card__top">
                <h3>"API Key Management"</h3>
                <button
                    class="btn btn--danger"
                    on:click=on_regenerate
                    disabled=move || regenerating.get()
                >
                    {move || if regenerating.get() { "Regenerating..." } else { "Regenerate Key" }}
                </button>
            </div>

            <p class="api-key-card__hint">
                "Copy this key and paste it into your WordPress Plugin settings to start."
            </p>

            <p class="api-key-card__label">"Your API Key"</p>
            <div class="api-key-card__display">
                <code class="api-key-card__value">{api_key}</code>
                <button class="btn btn--secondary" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>

            {move || error.get().map(|e| view! { <p class="api-key-card__error">{e}</p> })}
        </section>
    }
}
