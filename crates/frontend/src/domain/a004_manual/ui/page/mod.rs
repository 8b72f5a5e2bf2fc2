use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CategoryPills, SearchInput};
use crate::shared::toast::use_toast;
use contracts::domain::a004_manual::Manual;
use contracts::domain::a005_faq::Faq;
use contracts::seed;
use contracts::shared::filter_list;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Manuals,
    Faq,
    Inquiry,
}

/// Reader-facing page: manual library, FAQ accordion and a 1:1 inquiry form.
/// The `/inquiry` route lands here with the inquiry tab open.
#[component]
pub fn ManualsPage() -> impl IntoView {
    let initial = if use_location().pathname.get_untracked() == "/inquiry" {
        Tab::Inquiry
    } else {
        Tab::Manuals
    };
    let (tab, set_tab) = signal(initial);

    let tab_button = move |t: Tab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
                on:click=move |_| set_tab.set(t)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="업무 매뉴얼" subtitle="매뉴얼, FAQ, 1:1 문의" />

            <div class="tabs">
                {tab_button(Tab::Manuals, "매뉴얼")}
                {tab_button(Tab::Faq, "FAQ")}
                {tab_button(Tab::Inquiry, "1:1 문의")}
            </div>

            {move || match tab.get() {
                Tab::Manuals => view! { <ManualList /> }.into_any(),
                Tab::Faq => view! { <FaqAccordion /> }.into_any(),
                Tab::Inquiry => view! { <InquiryForm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ManualList() -> impl IntoView {
    let portal = use_portal();
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal("전체".to_string());

    let filtered = move || {
        portal.manuals.with(|manuals| {
            filter_list(manuals, &search.get(), &category.get(), "전체", |m| {
                m.category.clone()
            })
        })
    };

    view! {
        <div>
            <div class="list-toolbar">
                <SearchInput
                    value=search
                    on_input=Callback::new(move |v: String| set_search.set(v))
                    placeholder="매뉴얼 검색"
                />
                <CategoryPills
                    categories=Signal::derive(|| seed::manual_categories())
                    selected=category
                    on_select=Callback::new(move |v: String| set_category.set(v))
                />
            </div>
            <div class="manual-grid">
                <For
                    each=filtered
                    key=|m| m.id.clone()
                    children=move |m: Manual| {
                        view! {
                            <div class="manual-card">
                                <span class="manual-card__category">{m.category.clone()}</span>
                                <h3 class="manual-card__title">{m.title.clone()}</h3>
                                <div class="manual-card__meta">
                                    <span>{format!("조회 {}", m.views)}</span>
                                    <span>{format_date(m.updated_at)}</span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || filtered().is_empty()>
                <p class="empty">"검색 결과가 없습니다."</p>
            </Show>
        </div>
    }
}

#[component]
fn FaqAccordion() -> impl IntoView {
    let portal = use_portal();
    let (open_id, set_open_id) = signal(None::<String>);

    view! {
        <div class="faq-list">
            <For
                each=move || portal.faqs.get()
                key=|f| f.id.clone()
                children=move |f: Faq| {
                    let id = f.id.clone();
                    let is_open = {
                        let id = id.clone();
                        move || open_id.get().as_deref() == Some(id.as_str())
                    };
                    let toggle = move |_| {
                        set_open_id.update(|current| {
                            if current.as_deref() == Some(id.as_str()) {
                                *current = None;
                            } else {
                                *current = Some(id.clone());
                            }
                        });
                    };
                    view! {
                        <div class="faq-item">
                            <button class="faq-item__question" on:click=toggle>
                                <span>"Q. "{f.question.clone()}</span>
                                {icon("info")}
                            </button>
                            <Show when=is_open>
                                <p class="faq-item__answer">{f.answer.clone()}</p>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn InquiryForm() -> impl IntoView {
    let toasts = use_toast();
    let (category, set_category) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());

    let category_options = || {
        let mut options = vec![(String::new(), "문의 유형 선택".to_string())];
        options.extend(
            seed::manual_categories()
                .into_iter()
                .skip(1)
                .map(|c| (c.clone(), c)),
        );
        options
    };

    let submit = move |_| {
        if title.get_untracked().trim().is_empty() || content.get_untracked().trim().is_empty() {
            toasts.error("제목과 내용을 입력해 주세요.");
            return;
        }
        set_category.set(String::new());
        set_title.set(String::new());
        set_content.set(String::new());
        toasts.success("문의가 접수되었습니다. 담당자가 확인 후 연락드립니다.");
    };

    view! {
        <div class="card form">
            <Select
                label="문의 유형"
                value=category
                options=Signal::derive(category_options)
                on_change=Callback::new(move |v: String| set_category.set(v))
            />
            <Input
                label="제목"
                value=title
                placeholder="문의 제목을 입력하세요"
                on_input=Callback::new(move |v: String| set_title.set(v))
            />
            <Textarea
                label="내용"
                value=content
                rows=6
                placeholder="문의 내용을 자세히 적어 주세요"
                on_input=Callback::new(move |v: String| set_content.set(v))
            />
            <div class="form__actions">
                <Button on_click=Callback::new(submit)>"문의 보내기"</Button>
            </div>
        </div>
    }
}
