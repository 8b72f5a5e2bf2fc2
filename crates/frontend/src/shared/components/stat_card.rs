use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard headline number with an icon and optional footnote.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || value.get()}</span>
                {hint.map(|h| view! { <span class="stat-card__hint">{h}</span> })}
            </div>
        </div>
    }
}
