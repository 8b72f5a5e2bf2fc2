use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::ServiceKind;
use contracts::domain::a003_document::{CorpDoc, Division, CORP_DOCS, CRE_DOCS, GOS_DOCS, WPR_DOCS};
use leptos::prelude::*;

const RECEIVE_METHODS: &[&str] = &["이메일", "우편", "방문 수령"];
const URGENCY_LEVELS: &[&str] = &["일반", "긴급"];

/// Corporate documents available when requesting under a division.
fn docs_for(division: Division) -> Vec<CorpDoc> {
    let mut docs: Vec<CorpDoc> = CORP_DOCS.to_vec();
    if division == Division::CreGos {
        docs.extend_from_slice(CRE_DOCS);
        docs.extend_from_slice(GOS_DOCS);
    }
    docs
}

/// Ticket title: selected document names plus the issuing division.
fn request_summary(division: Division, doc_ids: &[String]) -> String {
    let names: Vec<&str> = docs_for(division)
        .iter()
        .filter(|d| doc_ids.iter().any(|id| id == d.id))
        .map(|d| d.name)
        .collect();
    format!("{} ({})", names.join(", "), division.name())
}

#[derive(Clone)]
struct DocForm {
    purpose: String,
    recipient: String,
    copies: String,
    receive_method: String,
    urgency: String,
    notes: String,
}

impl DocForm {
    fn fresh() -> Self {
        Self {
            purpose: String::new(),
            recipient: String::new(),
            copies: "1".to_string(),
            receive_method: "이메일".to_string(),
            urgency: "일반".to_string(),
            notes: String::new(),
        }
    }

    /// The purpose field is the only mandatory text input.
    fn is_complete(&self) -> bool {
        !self.purpose.trim().is_empty()
    }
}

#[component]
pub fn DocumentRequestPage() -> impl IntoView {
    let portal = use_portal();
    let is_admin = move || portal.current_user.with(|u| u.role.is_admin());
    let (tab, set_tab) = signal(0usize);

    view! {
        <div class="page">
            <PageHeader title="법인 문서 발급" subtitle="법인 서류 발급을 신청합니다" />

            <Show when=is_admin>
                <div class="tabs">
                    <button
                        class=move || if tab.get() == 0 { "tab tab--active" } else { "tab" }
                        on:click=move |_| set_tab.set(0)
                    >
                        "문서 신청"
                    </button>
                    <button
                        class=move || if tab.get() == 1 { "tab tab--active" } else { "tab" }
                        on:click=move |_| set_tab.set(1)
                    >
                        "권한 관리"
                    </button>
                </div>
            </Show>

            {move || {
                if tab.get() == 1 && is_admin() {
                    view! { <super::permissions::PermissionMatrix /> }.into_any()
                } else {
                    view! { <RequestTab /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RequestTab() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (division, set_division) = signal(Division::CreGos);
    let (selected_docs, set_selected_docs) = signal(Vec::<String>::new());
    let form = RwSignal::new(DocForm::fresh());
    let (submitted_id, set_submitted_id) = signal(None::<String>);

    let toggle_doc = move |id: String| {
        set_selected_docs.update(|docs| {
            match docs.iter().position(|d| d == &id) {
                Some(pos) => {
                    docs.remove(pos);
                }
                None => docs.push(id),
            }
        });
    };

    let submit = move |_| {
        let doc_ids = selected_docs.get_untracked();
        if doc_ids.is_empty() {
            toasts.error("신청할 문서를 선택해 주세요.");
            return;
        }
        if !form.with_untracked(|f| f.is_complete()) {
            toasts.error("사용 목적을 입력해 주세요.");
            return;
        }
        let title = request_summary(division.get_untracked(), &doc_ids);
        let id = portal.submit_request(ServiceKind::Document, &title);
        set_submitted_id.set(Some(id));
    };

    let restart = move |_| {
        set_selected_docs.set(Vec::new());
        form.set(DocForm::fresh());
        set_submitted_id.set(None);
    };

    view! {
        <div>
            <Show when=move || submitted_id.get().is_some()>
                <div class="card done">
                    <span class="done__icon">{icon("check-circle")}</span>
                    <h2>"발급 신청이 완료되었습니다"</h2>
                    <p class="done__id">{move || submitted_id.get().unwrap_or_default()}</p>
                    <dl class="summary">
                        <div class="summary__row">
                            <dt>"목적"</dt>
                            <dd>{move || form.with(|f| f.purpose.clone())}</dd>
                        </div>
                        <div class="summary__row">
                            <dt>"부수"</dt>
                            <dd>{move || form.with(|f| format!("{}부", f.copies))}</dd>
                        </div>
                        <div class="summary__row">
                            <dt>"수령"</dt>
                            <dd>{move || form.with(|f| f.receive_method.clone())}</dd>
                        </div>
                    </dl>
                    <div class="form__actions">
                        <Button variant="secondary" on_click=Callback::new(restart)>
                            "새 신청 작성"
                        </Button>
                    </div>
                </div>
            </Show>

            <Show when=move || submitted_id.get().is_none()>
            <div>
            <div class="card">
                <h2 class="card__title">"법인 선택"</h2>
                <div class="division-grid">
                    {Division::requestable()
                        .into_iter()
                        .map(|d| {
                            let is_selected = move || division.get() == d;
                            view! {
                                <button
                                    class=move || {
                                        if is_selected() {
                                            "division-card division-card--selected"
                                        } else {
                                            "division-card"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_division.set(d);
                                        set_selected_docs.set(Vec::new());
                                    }
                                >
                                    <span class="division-card__name">{d.name()}</span>
                                    <span class="division-card__entity">{d.entity()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"문서 선택"</h2>
                <div class="doc-list">
                    {move || {
                        docs_for(division.get())
                            .into_iter()
                            .map(|doc| {
                                let id = doc.id.to_string();
                                let is_checked = {
                                    let id = id.clone();
                                    move || selected_docs.get().contains(&id)
                                };
                                view! {
                                    <label class="doc-item">
                                        <input
                                            type="checkbox"
                                            prop:checked=is_checked
                                            on:change=move |_| toggle_doc(id.clone())
                                        />
                                        <div class="doc-item__body">
                                            <span class="doc-item__name">
                                                {doc.name}
                                                {doc.auto_issued.then(|| view! {
                                                    <span class="badge badge--approved">"자동 발급"</span>
                                                })}
                                            </span>
                                            <span class="doc-item__summary">{doc.summary}</span>
                                        </div>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="form__row">
                    <Input
                        label="사용 목적 *"
                        value=Signal::derive(move || form.with(|f| f.purpose.clone()))
                        placeholder="예: 입찰 서류 제출용"
                        on_input=Callback::new(move |v: String| form.update(|f| f.purpose = v))
                    />
                    <Input
                        label="제출처"
                        value=Signal::derive(move || form.with(|f| f.recipient.clone()))
                        placeholder="예: KB국민은행, 서울시청"
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.recipient = v)
                        })
                    />
                </div>
                <div class="form__row">
                    <Select
                        label="부수"
                        value=Signal::derive(move || form.with(|f| f.copies.clone()))
                        options=Signal::derive(|| {
                            (1..=10).map(|n| (n.to_string(), format!("{n}부"))).collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| form.update(|f| f.copies = v))
                    />
                    <Select
                        label="수령 방법"
                        value=Signal::derive(move || form.with(|f| f.receive_method.clone()))
                        options=Signal::derive(|| {
                            RECEIVE_METHODS
                                .iter()
                                .map(|m| (m.to_string(), m.to_string()))
                                .collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.receive_method = v)
                        })
                    />
                    <Select
                        label="긴급도"
                        value=Signal::derive(move || form.with(|f| f.urgency.clone()))
                        options=Signal::derive(|| {
                            URGENCY_LEVELS
                                .iter()
                                .map(|u| (u.to_string(), u.to_string()))
                                .collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.urgency = v)
                        })
                    />
                </div>
                <Textarea
                    label="비고 (선택)"
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    rows=2
                    on_input=Callback::new(move |v: String| form.update(|f| f.notes = v))
                />
                <div class="form__actions">
                    <Button
                        disabled=Signal::derive(move || form.with(|f| !f.is_complete()))
                        on_click=Callback::new(submit)
                    >
                        "발급 신청"
                    </Button>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"WPR 문서고"</h2>
                <p class="card__note">"WPR 문서는 열람 권한이 있는 계정만 신청할 수 있습니다."</p>
                <div class="doc-list">
                    {WPR_DOCS
                        .iter()
                        .map(|doc| view! {
                            <div class="doc-item doc-item--static">
                                <div class="doc-item__body">
                                    <span class="doc-item__name">
                                        {doc.name}
                                        " ("{doc.year}")"
                                        {doc.restricted.then(|| view! {
                                            <span class="doc-item__lock">{icon("lock")}</span>
                                        })}
                                    </span>
                                    <span class="doc-item__summary">
                                        {format!("{} · 발행 {}", doc.summary, doc.issued)}
                                    </span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
            </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_is_the_only_required_text_field() {
        let mut form = DocForm::fresh();
        assert!(!form.is_complete());
        form.purpose = "입찰 서류 제출용".to_string();
        assert!(form.is_complete());
        form.purpose = "   ".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn fresh_form_defaults_match_the_page() {
        let form = DocForm::fresh();
        assert_eq!(form.copies, "1");
        assert_eq!(form.receive_method, "이메일");
        assert_eq!(form.urgency, "일반");
    }

    #[test]
    fn summary_joins_document_names_with_the_division() {
        let ids = vec!["biz_reg".to_string(), "seal_cert".to_string()];
        assert_eq!(
            request_summary(Division::Iac, &ids),
            "사업자등록증, 인감증명서 (IAC)"
        );
    }

    #[test]
    fn cre_gos_summary_reaches_division_specific_docs() {
        let ids = vec!["cre_report".to_string()];
        assert_eq!(
            request_summary(Division::CreGos, &ids),
            "CRE 리포트 (CRE&GOS)"
        );
    }
}
