//! Minimal CSS spinner.

use leptos::prelude::*;

/// Spinning loading indicator. Sizing comes from the stylesheet; pass an
/// extra class for variants.
#[component]
pub fn Spinner(#[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "spinner".to_owned()
    } else {
        format!("spinner {class}")
    };

    view! { <div class=class aria-label="Loading"></div> }
}
