use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::{AdminGuard, PageHeader};
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::use_toast;
use contracts::domain::a005_faq::Faq;
use contracts::shared::search;
use leptos::prelude::*;

#[component]
pub fn FaqManagementPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <FaqManagement />
        </AdminGuard>
    }
}

/// Admin console: FAQ editor. Search matches both question and answer.
#[component]
fn FaqManagement() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (query, set_query) = signal(String::new());
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<String>);
    let (question, set_question) = signal(String::new());
    let (answer, set_answer) = signal(String::new());

    let filtered = move || portal.faqs.with(|f| search(f, &query.get()));

    let open_create = move |_| {
        set_editing_id.set(None);
        set_question.set(String::new());
        set_answer.set(String::new());
        set_form_open.set(true);
    };

    let open_edit = move |f: Faq| {
        set_editing_id.set(Some(f.id));
        set_question.set(f.question);
        set_answer.set(f.answer);
        set_form_open.set(true);
    };

    let save = move |_| {
        let q = question.get_untracked();
        let a = answer.get_untracked();
        if !Faq::is_valid(&q, &a) {
            toasts.error("질문과 답변을 모두 입력해 주세요.");
            return;
        }
        match editing_id.get_untracked() {
            Some(id) => {
                portal.update_faq(&id, &q, &a);
                toasts.success("FAQ가 수정되었습니다.");
            }
            None => {
                portal.add_faq(&q, &a);
                toasts.success("FAQ가 등록되었습니다.");
            }
        }
        set_form_open.set(false);
    };

    view! {
        <div class="page">
            <PageHeader title="FAQ 관리" subtitle="자주 묻는 질문을 편집합니다">
                <Button on_click=Callback::new(open_create)>
                    {icon("plus")}
                    " 새 FAQ"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_input=Callback::new(move |v: String| set_query.set(v))
                    placeholder="질문, 답변 검색"
                />
            </div>

            <Show when=move || form_open.get()>
                <div class="card form">
                    <h2 class="card__title">
                        {move || if editing_id.get().is_some() { "FAQ 수정" } else { "새 FAQ" }}
                    </h2>
                    <Input
                        label="질문"
                        value=question
                        on_input=Callback::new(move |v: String| set_question.set(v))
                    />
                    <Textarea
                        label="답변"
                        value=answer
                        on_input=Callback::new(move |v: String| set_answer.set(v))
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

            <div class="faq-list">
                <For
                    each=filtered
                    key=|f| (f.id.clone(), f.question.clone(), f.answer.clone())
                    children=move |f: Faq| {
                        let edit_target = f.clone();
                        let delete_id = f.id.clone();
                        view! {
                            <div class="card faq-admin-item">
                                <div class="faq-admin-item__body">
                                    <h3 class="faq-admin-item__question">{f.question.clone()}</h3>
                                    <p class="faq-admin-item__answer">{f.answer.clone()}</p>
                                </div>
                                <div class="table__actions">
                                    <Button
                                        variant="ghost"
                                        size="sm"
                                        on_click=Callback::new({
                                            let f = edit_target.clone();
                                            move |_| open_edit(f.clone())
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
                                                if !confirm("정말 이 FAQ를 삭제하시겠습니까?") {
                                                    return;
                                                }
                                                portal.delete_faq(&id);
                                                toasts.success("FAQ가 삭제되었습니다.");
                                            }
                                        })
                                    >
                                        {icon("trash")}
                                    </Button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
