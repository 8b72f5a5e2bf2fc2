use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Fixed sidebar on the left, header on top, routed page in the center.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <main class="shell__content">
                    <Outlet />
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
