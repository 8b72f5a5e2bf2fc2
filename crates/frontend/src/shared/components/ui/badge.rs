use contracts::domain::a001_request::RequestStatus;
use leptos::prelude::*;

/// Colored pill for a request lifecycle status.
#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class()>{status.label()}</span>
    }
}
