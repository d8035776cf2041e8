//! Chrome shared by all protected pages: sidebar, header, and the main
//! content region.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

/// Dashboard layout wrapper.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <div class="dashboard-layout__body">
                <Header/>
                <main class="dashboard-layout__main">{children()}</main>
            </div>
        </div>
    }
}
