use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::ServiceKind;
use leptos::prelude::*;

const OCCASIONS: &[&str] = &["경사", "조사", "개업/행사"];
const BUDGETS: &[(&str, &str)] = &[
    ("100000", "10만원"),
    ("150000", "15만원"),
    ("200000", "20만원"),
];

#[derive(Clone, Default)]
struct WreathForm {
    occasion: String,
    recipient_name: String,
    recipient_phone: String,
    delivery_address: String,
    delivery_date: String,
    delivery_time: String,
    budget: String,
    message: String,
    notes: String,
}

impl WreathForm {
    fn fresh() -> Self {
        Self {
            occasion: "경사".to_string(),
            delivery_time: "10:00".to_string(),
            budget: "100000".to_string(),
            ..Default::default()
        }
    }

    fn is_complete(&self) -> bool {
        !self.recipient_name.trim().is_empty()
            && !self.recipient_phone.trim().is_empty()
            && !self.delivery_address.trim().is_empty()
            && !self.delivery_date.trim().is_empty()
    }

    fn summary(&self) -> String {
        format!("{} 화환 - {}", self.occasion, self.recipient_name)
    }
}

/// Three-step flow: fill in, confirm, done.
#[component]
pub fn WreathRequestPage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (step, set_step) = signal(1u8);
    let form = RwSignal::new(WreathForm::fresh());
    let (submitted_id, set_submitted_id) = signal(String::new());

    let to_confirm = move |_| {
        if form.with_untracked(|f| f.is_complete()) {
            set_step.set(2);
        } else {
            toasts.error("필수 항목을 모두 입력해 주세요.");
        }
    };

    let submit = move |_| {
        let title = form.with_untracked(|f| f.summary());
        let id = portal.submit_request(ServiceKind::Wreath, &title);
        set_submitted_id.set(id);
        set_step.set(3);
    };

    let restart = move |_| {
        form.set(WreathForm::fresh());
        set_step.set(1);
    };

    let step_marker = move |n: u8, label: &'static str| {
        view! {
            <div class=move || {
                if step.get() == n {
                    "stepper__step stepper__step--active"
                } else if step.get() > n {
                    "stepper__step stepper__step--done"
                } else {
                    "stepper__step"
                }
            }>
                <span class="stepper__number">{n}</span>
                <span>{label}</span>
            </div>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="화환 신청" subtitle="경조사 화환을 신청합니다" />

            <div class="stepper">
                {step_marker(1, "정보 입력")}
                {step_marker(2, "확인")}
                {step_marker(3, "완료")}
            </div>

            <Show when=move || step.get() == 1>
                <div class="card form">
                    <div class="form__group">
                        <label class="form__label">"신청 종류 *"</label>
                        <div class="choice-row">
                            {OCCASIONS
                                .iter()
                                .map(|occasion| {
                                    let is_selected = move || {
                                        form.with(|f| f.occasion == *occasion)
                                    };
                                    view! {
                                        <button
                                            class=move || {
                                                if is_selected() {
                                                    "choice choice--selected"
                                                } else {
                                                    "choice"
                                                }
                                            }
                                            on:click=move |_| {
                                                form.update(|f| f.occasion = occasion.to_string())
                                            }
                                        >
                                            {*occasion}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="form__row">
                        <Input
                            label="수령인 이름 *"
                            value=Signal::derive(move || form.with(|f| f.recipient_name.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.recipient_name = v)
                            })
                        />
                        <Input
                            label="수령인 연락처 *"
                            value=Signal::derive(move || form.with(|f| f.recipient_phone.clone()))
                            placeholder="010-0000-0000"
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.recipient_phone = v)
                            })
                        />
                    </div>
                    <Input
                        label="배송 주소 *"
                        value=Signal::derive(move || form.with(|f| f.delivery_address.clone()))
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.delivery_address = v)
                        })
                    />
                    <div class="form__row">
                        <Input
                            label="배송 날짜 *"
                            input_type="date"
                            value=Signal::derive(move || form.with(|f| f.delivery_date.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.delivery_date = v)
                            })
                        />
                        <Input
                            label="배송 시간 *"
                            input_type="time"
                            value=Signal::derive(move || form.with(|f| f.delivery_time.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.delivery_time = v)
                            })
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"예산 범위 *"</label>
                        <div class="choice-row">
                            {BUDGETS
                                .iter()
                                .map(|(value, label)| {
                                    let is_selected = move || form.with(|f| f.budget == *value);
                                    view! {
                                        <button
                                            class=move || {
                                                if is_selected() {
                                                    "choice choice--selected"
                                                } else {
                                                    "choice"
                                                }
                                            }
                                            on:click=move |_| {
                                                form.update(|f| f.budget = value.to_string())
                                            }
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <Textarea
                        label="메시지 카드 내용 (최대 100자)"
                        value=Signal::derive(move || form.with(|f| f.message.clone()))
                        rows=2
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| {
                                f.message = v.chars().take(100).collect();
                            })
                        })
                    />
                    <Textarea
                        label="비고 (선택)"
                        value=Signal::derive(move || form.with(|f| f.notes.clone()))
                        rows=2
                        on_input=Callback::new(move |v: String| form.update(|f| f.notes = v))
                    />
                    <div class="form__actions">
                        <Button on_click=Callback::new(to_confirm)>"다음"</Button>
                    </div>
                </div>
            </Show>

            <Show when=move || step.get() == 2>
                <div class="card">
                    <h2 class="card__title">"신청 내용 확인"</h2>
                    <dl class="summary">
                        {move || {
                            let f = form.get();
                            let budget_label = BUDGETS
                                .iter()
                                .find(|(v, _)| *v == f.budget)
                                .map(|(_, l)| *l)
                                .unwrap_or("-");
                            vec![
                                ("신청 종류", f.occasion),
                                ("수령인", f.recipient_name),
                                ("연락처", f.recipient_phone),
                                ("배송 주소", f.delivery_address),
                                ("배송 일시", format!("{} {}", f.delivery_date, f.delivery_time)),
                                ("예산", budget_label.to_string()),
                                ("메시지", f.message),
                            ]
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="summary__row">
                                    <dt>{label}</dt>
                                    <dd>{if value.is_empty() { "-".to_string() } else { value }}</dd>
                                </div>
                            })
                            .collect_view()
                        }}
                    </dl>
                    <div class="form__actions">
                        <Button variant="secondary" on_click=Callback::new(move |_| set_step.set(1))>
                            "이전"
                        </Button>
                        <Button on_click=Callback::new(submit)>"신청하기"</Button>
                    </div>
                </div>
            </Show>

            <Show when=move || step.get() == 3>
                <div class="card done">
                    <span class="done__icon">{icon("check-circle")}</span>
                    <h2>"신청이 완료되었습니다"</h2>
                    <p class="done__id">{move || submitted_id.get()}</p>
                    <p>"승인 결과는 알림으로 안내됩니다."</p>
                    <div class="form__actions">
                        <Button variant="secondary" on_click=Callback::new(restart)>
                            "새 신청 작성"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
