use crate::layout::global_context::use_portal;
use crate::shared::components::ui::Button;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a003_document::{
    division_doc_ids, CorpDoc, Division, PermissionUser, CORP_DOCS, WPR_DOCS,
};
use contracts::shared::search;
use leptos::prelude::*;

fn doc_label(division: Division, doc_id: &str) -> String {
    match division {
        Division::Wpr => WPR_DOCS
            .iter()
            .find(|d| d.id == doc_id)
            .map(|d| format!("{} ({})", d.name, d.year))
            .unwrap_or_else(|| doc_id.to_string()),
        _ => CORP_DOCS
            .iter()
            .find(|d: &&CorpDoc| d.id == doc_id)
            .map(|d| d.name.to_string())
            .unwrap_or_else(|| doc_id.to_string()),
    }
}

/// Per-user document grants, one expandable editor at a time.
#[component]
pub fn PermissionMatrix() -> impl IntoView {
    let portal = use_portal();
    let (query, set_query) = signal(String::new());
    let (expanded, set_expanded) = signal(None::<u32>);

    let filtered = move || portal.permission_users.with(|u| search(u, &query.get()));

    view! {
        <div>
            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_input=Callback::new(move |v: String| set_query.set(v))
                    placeholder="이름, 부서, 소속 검색"
                />
            </div>
            <div class="perm-list">
                <For
                    each=filtered
                    key=|u| (u.id, u.perms.total())
                    children=move |user: PermissionUser| {
                        let user_id = user.id;
                        let is_expanded = move || expanded.get() == Some(user_id);
                        view! {
                            <div class="card perm-user">
                                <button
                                    class="perm-user__head"
                                    on:click=move |_| {
                                        set_expanded.update(|e| {
                                            *e = if *e == Some(user_id) {
                                                None
                                            } else {
                                                Some(user_id)
                                            };
                                        })
                                    }
                                >
                                    <div class="perm-user__who">
                                        <span class="perm-user__name">{user.name.clone()}</span>
                                        <span class="perm-user__dept">
                                            {format!("{} · {}", user.dept, user.division)}
                                        </span>
                                    </div>
                                    <span class="perm-user__count">
                                        {format!("{}건 허용", user.perms.total())}
                                    </span>
                                </button>
                                <Show when=is_expanded>
                                    <div class="perm-user__matrix">
                                        {Division::all()
                                            .into_iter()
                                            .map(|division| {
                                                view! {
                                                    <DivisionColumn user_id=user_id division=division />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn DivisionColumn(user_id: u32, division: Division) -> impl IntoView {
    let portal = use_portal();

    let has_doc = move |doc_id: &str| {
        portal.permission_users.with(|users| {
            users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| u.perms.has(division, doc_id))
                .unwrap_or(false)
        })
    };

    view! {
        <div class="perm-column">
            <div class="perm-column__head">
                <span class="perm-column__title">{division.name()}</span>
                <div class="perm-column__bulk">
                    <Button
                        variant="ghost"
                        size="sm"
                        on_click=Callback::new(move |_| {
                            portal.grant_all_permissions(user_id, division)
                        })
                    >
                        "전체 허용"
                    </Button>
                    <Button
                        variant="ghost"
                        size="sm"
                        on_click=Callback::new(move |_| {
                            portal.revoke_all_permissions(user_id, division)
                        })
                    >
                        "전체 해제"
                    </Button>
                </div>
            </div>
            {division_doc_ids(division)
                .into_iter()
                .map(|doc_id| {
                    let checked = move || has_doc(doc_id);
                    view! {
                        <label class="perm-column__doc">
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:change=move |_| {
                                    portal.toggle_permission(user_id, division, doc_id)
                                }
                            />
                            <span>{doc_label(division, doc_id)}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
