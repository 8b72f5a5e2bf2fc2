use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{AdminGuard, PageHeader};
use crate::shared::date_utils::format_date;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::use_toast;
use contracts::domain::a004_manual::Manual;
use contracts::seed;
use contracts::shared::search;
use leptos::prelude::*;

#[component]
pub fn ManualManagementPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <ManualManagement />
        </AdminGuard>
    }
}

/// Admin console: create, edit and delete manuals.
#[component]
fn ManualManagement() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (query, set_query) = signal(String::new());
    let (form_open, set_form_open) = signal(false);
    // None while creating, Some(id) while editing.
    let (editing_id, set_editing_id) = signal(None::<String>);
    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal("업무 지원".to_string());

    let filtered = move || portal.manuals.with(|m| search(m, &query.get()));

    let category_options = || {
        seed::manual_categories()
            .into_iter()
            .skip(1)
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_title.set(String::new());
        set_category.set("업무 지원".to_string());
        set_form_open.set(true);
    };

    let open_edit = move |m: Manual| {
        set_editing_id.set(Some(m.id));
        set_title.set(m.title);
        set_category.set(m.category);
        set_form_open.set(true);
    };

    let save = move |_| {
        let t = title.get_untracked();
        if t.trim().is_empty() {
            toasts.error("제목을 입력해 주세요.");
            return;
        }
        let c = category.get_untracked();
        match editing_id.get_untracked() {
            Some(id) => {
                portal.update_manual(&id, &t, &c);
                toasts.success("매뉴얼이 수정되었습니다.");
            }
            None => {
                portal.add_manual(&t, &c);
                toasts.success("매뉴얼이 등록되었습니다.");
            }
        }
        set_form_open.set(false);
    };

    view! {
        <div class="page">
            <PageHeader title="매뉴얼 관리" subtitle="업무 매뉴얼을 등록하고 편집합니다">
                <Button on_click=Callback::new(open_create)>
                    {icon("plus")}
                    " 새 매뉴얼"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_input=Callback::new(move |v: String| set_query.set(v))
                    placeholder="매뉴얼 검색"
                />
            </div>

            <Show when=move || form_open.get()>
                <div class="card form">
                    <h2 class="card__title">
                        {move || if editing_id.get().is_some() { "매뉴얼 수정" } else { "새 매뉴얼" }}
                    </h2>
                    <Input
                        label="제목"
                        value=title
                        on_input=Callback::new(move |v: String| set_title.set(v))
                    />
                    <Select
                        label="분류"
                        value=category
                        options=Signal::derive(category_options)
                        on_change=Callback::new(move |v: String| set_category.set(v))
                    />
                    <div class="form__actions">
                        <Button on_click=Callback::new(save)>"저장"</Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| set_form_open.set(false))
                        >
                            "취소"
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell">"제목"</th>
                            <th class="table__cell">"분류"</th>
                            <th class="table__cell">"조회"</th>
                            <th class="table__cell">"수정일"</th>
                            <th class="table__cell">"작업"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|m| (m.id.clone(), m.title.clone(), m.category.clone())
                            children=move |m: Manual| {
                                let edit_target = m.clone();
                                let delete_id = m.id.clone();
                                view! {
                                    <tr>
                                        <td class="table__cell">{m.title.clone()}</td>
                                        <td class="table__cell">{m.category.clone()}</td>
                                        <td class="table__cell">{m.views}</td>
                                        <td class="table__cell">{format_date(m.updated_at)}</td>
                                        <td class="table__cell">
                                            <div class="table__actions">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let m = edit_target.clone();
                                                        move |_| open_edit(m.clone())
                                                    })
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    variant="danger"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let id = delete_id.clone();
                                                        move |_| {
                                                            if !confirm(
                                                                "정말 이 매뉴얼을 삭제하시겠습니까?",
                                                            ) {
                                                                return;
                                                            }
                                                            portal.delete_manual(&id);
                                                            toasts.success("매뉴얼이 삭제되었습니다.");
                                                        }
                                                    })
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
