//! Dashboard sidebar: logo, navigation links, and the billing-portal
//! shortcut.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::Logo;

/// Sidebar navigation for the dashboard layout.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let portal_pending = RwSignal::new(false);

    let link_class = move |href: &str| {
        if location.pathname.get() == href {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    // "Manage Subscription" is an action, not a route: it opens the
    // payment provider's hosted portal.
    let on_portal = move |_| {
        if portal_pending.get() {
            return;
        }
        portal_pending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_portal_session().await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("billing portal redirect failed: {e}");
                    portal_pending.set(false);
                }
            }
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__logo">
                <Logo/>
            </div>

            <div class="sidebar__menu-label">"Menu"</div>
            <nav class="sidebar__nav">
                <a class=move || link_class("/") href="/">
                    "Dashboard"
                </a>
                <a class=move || link_class("/billing") href="/billing">
                    "Upgrade"
                </a>
                <button
                    class="sidebar__link"
                    on:click=on_portal
                    disabled=move || portal_pending.get()
                >
                    {move || {
                        if portal_pending.get() { "Loading..." } else { "Manage Subscription" }
                    }}
                </button>
            </nav>

            <div class="sidebar__footer">"© 2024 rain SaaS Inc."</div>
        </aside>
    }
}
