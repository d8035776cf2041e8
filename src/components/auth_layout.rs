//! Chrome shared by the auth pages: rainfall backdrop, logo, and a
//! centered card with a title.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::components::rainfall::Rainfall;

/// Auth page layout wrapper.
#[component]
pub fn AuthLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__logo">
                <Logo/>
            </div>

            <div class="auth-layout__rain">
                <Rainfall/>
            </div>

            <div class="auth-layout__panel">
                <div class="auth-layout__card">
                    <h1 class="auth-layout__title">{title}</h1>
                    {children()}
                </div>
            </div>
        </div>
    }
}
