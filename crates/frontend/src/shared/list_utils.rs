//! Search and category-filter widgets shared by every list page.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let ph = move || placeholder.get().unwrap_or_else(|| "검색".to_string());

    view! {
        <div class="search">
            <span class="search__icon">{crate::shared::icons::icon("search")}</span>
            <input
                class="search__input"
                type="text"
                value=move || value.get()
                placeholder=ph
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Horizontal category selector. The first entry is usually the
/// "전체" sentinel that disables category filtering.
#[component]
pub fn CategoryPills(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="pills">
            <For
                each=move || categories.get()
                key=|c| c.clone()
                children=move |category: String| {
                    let value = category.clone();
                    let is_active = {
                        let value = value.clone();
                        move || selected.get() == value
                    };
                    view! {
                        <button
                            class=move || {
                                if is_active() { "pill pill--active" } else { "pill" }
                            }
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}
