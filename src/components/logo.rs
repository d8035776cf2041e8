//! Rain OS wordmark.

use leptos::prelude::*;

/// Product wordmark, linking back to the application root.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a class="logo" href="/">
            <span class="logo__mark">"☂"</span>
            <span class="logo__name">"Rain OS"</span>
        </a>
    }
}
