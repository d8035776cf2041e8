//! Billing page: plan catalog, current-plan banner, and hosted
//! checkout/portal redirects.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::state::auth::AuthState;
use crate::state::billing::{self, BUSINESS, PRO, Plan};

/// Billing page.
#[component]
pub fn BillingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let checkout_pending = RwSignal::new(false);
    let portal_pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_upgrade = Callback::new(move |price_id: &'static str| {
        if checkout_pending.get() {
            return;
        }
        checkout_pending.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout_session(price_id).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => {
                    error.set(Some(e));
                    checkout_pending.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = price_id;
        }
    });

    let on_portal = move |_| {
        if portal_pending.get() {
            return;
        }
        portal_pending.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_portal_session().await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => {
                    error.set(Some(e));
                    portal_pending.set(false);
                }
            }
        });
    };

    let is_paying = move || {
        auth.get()
            .user
            .as_ref()
            .is_some_and(|u| !billing::is_free_plan(u))
    };
    let current_plan_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|u| billing::current_plan(u).name)
            .unwrap_or(billing::FREE.name)
    };

    view! {
        <DashboardLayout>
            <div class="billing">
                <header class="billing__header">
                    <h1>"Upgrade your capacity"</h1>
                    <p>"Get more AI actions for your Rain OS WordPress plugin."</p>
                </header>

                <Show when=is_paying>
                    <section class="card billing__current">
                        <div>
                            <h3>
                                {move || format!("You are on the {} plan", current_plan_name())}
                            </h3>
                            <p>"Update payment details, switch plans, or cancel anytime."</p>
                        </div>
                        <button
                            class="btn btn--secondary"
                            on:click=on_portal
                            disabled=move || portal_pending.get()
                        >
                            {move || {
                                if portal_pending.get() { "Opening..." } else { "Manage billing" }
                            }}
                        </button>
                    </section>
                </Show>

                {move || error.get().map(|e| view! { <p class="billing__error">{e}</p> })}

                <div class="billing__plans">
                    <PlanCard
                        plan=BUSINESS
                        features=vec![
                            "100 AI actions per month",
                            "Full 3 Pillar Framework access",
                            "Priority email support",
                        ]
                        on_upgrade=on_upgrade
                        pending=checkout_pending
                        recommended=false
                    />
                    <PlanCard
                        plan=PRO
                        features=vec![
                            "500 AI actions per month",
                            "Full 3 Pillar Framework access",
                            "Priority email support",
                            "Early access to new optimizers",
                        ]
                        on_upgrade=on_upgrade
                        pending=checkout_pending
                        recommended=true
                    />
                </div>
            </div>
        </DashboardLayout>
    }
}

/// A single purchasable plan card.
#[component]
fn PlanCard(
    plan: Plan,
    features: Vec<&'static str>,
    on_upgrade: Callback<&'static str>,
    pending: RwSignal<bool>,
    recommended: bool,
) -> impl IntoView {
    let card_class = if recommended {
        "card plan-card plan-card--recommended"
    } else {
        "card plan-card"
    };
    // The free tier has no price id and never renders as a card.
    let price_id = plan.price_id.unwrap_or_default();

    view! {
        <div class=card_class>
            <Show when=move || recommended>
                <span class="plan-card__badge">"Best Value"</span>
            </Show>

            <div class="plan-card__head">
                <h2>{plan.name}</h2>
                <span class="plan-card__price">{plan.price}</span>
            </div>
            <p class="plan-card__description">{plan.description}</p>

            <p class="plan-card__included">"What's included"</p>
            <ul class="plan-card__features">
                {features
                    .into_iter()
                    .map(|f| view! { <li>{f}</li> })
                    .collect::<Vec<_>>()}
            </ul>

            <button
                class="btn btn--primary plan-card__cta"
                on:click=move |_| on_upgrade.run(price_id)
                disabled=move || pending.get()
            >
                {format!("Choose {}", plan.name)}
            </button>
        </div>
    }
}
