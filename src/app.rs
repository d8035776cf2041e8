//! Root application component with routing, context providers, and the
//! route gates.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::spinner::Spinner;
use crate::pages::{
    billing::BillingPage, callback::CallbackPage, dashboard::DashboardHomePage,
    forgot_password::ForgotPasswordPage, login::LoginPage, reset_password::ResetPasswordPage,
    signup::SignupPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::AuthState;
use crate::state::gate::{self, GateDecision, RouteKind};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth state context, starts the session coordinator, and
/// sets up client-side routing. Every route except `/auth/callback` sits
/// behind one of the two gates; unmatched routes redirect to the root.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    crate::net::session::spawn_session_coordinator(auth);

    // Apply the persisted theme before first paint.
    Effect::new(move || {
        crate::util::theme::apply(crate::util::theme::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rainos.css"/>
        <Title text="Rain OS"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/" options=replace()/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <AuthOnly><LoginPage/></AuthOnly> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <AuthOnly><SignupPage/></AuthOnly> }
                />
                <Route
                    path=StaticSegment("verify-email")
                    view=|| view! { <AuthOnly><VerifyEmailPage/></AuthOnly> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <AuthOnly><ForgotPasswordPage/></AuthOnly> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <AuthOnly><ResetPasswordPage/></AuthOnly> }
                />
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><DashboardHomePage/></Protected> }
                />
                <Route
                    path=StaticSegment("billing")
                    view=|| view! { <Protected><BillingPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Neutral placeholder shown while identity is still resolving. Never a
/// redirect, to avoid a flash redirect before the first sync settles.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <Spinner/>
        </div>
    }
}

/// Gate for routes that require an authenticated user.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || {
            let state = auth.get();
            match gate::decide(RouteKind::Protected, state.loading, state.is_authenticated()) {
                GateDecision::Loading => view! { <LoadingScreen/> }.into_any(),
                GateDecision::Render => children().into_any(),
                GateDecision::RedirectLogin => {
                    view! { <Redirect path="/login" options=replace()/> }.into_any()
                }
                GateDecision::RedirectHome => {
                    view! { <Redirect path="/" options=replace()/> }.into_any()
                }
            }
        }}
    }
}

/// Gate for routes that are only meaningful for anonymous visitors
/// (login, signup, recovery). Authenticated users land on the dashboard.
#[component]
fn AuthOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || {
            let state = auth.get();
            match gate::decide(RouteKind::AuthOnly, state.loading, state.is_authenticated()) {
                GateDecision::Loading => view! { <LoadingScreen/> }.into_any(),
                GateDecision::Render => children().into_any(),
                GateDecision::RedirectLogin => {
                    view! { <Redirect path="/login" options=replace()/> }.into_any()
                }
                GateDecision::RedirectHome => {
                    view! { <Redirect path="/" options=replace()/> }.into_any()
                }
            }
        }}
    }
}
