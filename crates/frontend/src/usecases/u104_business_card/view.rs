use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::ServiceKind;
use contracts::seed;
use leptos::prelude::*;

const REQUEST_TYPES: &[&str] = &["신규 발급", "재발급", "정보 변경"];
const PICKUP_METHODS: &[&str] = &["사내 수령", "부서 배송"];

/// (key, label, description) of the printable card designs.
const DESIGNS: &[(&str, &str, &str)] = &[
    ("standard", "표준형", "기본 C&W 명함 디자인"),
    ("premium", "프리미엄형", "고급 무광 코팅"),
    ("bilingual", "한영 양면", "앞면 한국어, 뒷면 영어"),
];

fn card_title(request_type: &str, boxes: u32, design_key: &str) -> String {
    let design = DESIGNS
        .iter()
        .find(|(key, _, _)| *key == design_key)
        .map(|(_, label, _)| *label)
        .unwrap_or("표준형");
    format!("{request_type} 명함 {}매 ({design})", boxes * 100)
}

#[component]
pub fn BusinessCardPage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (request_type, set_request_type) = signal("신규 발급".to_string());
    let (name_ko, set_name_ko) = signal(String::new());
    let (name_en, set_name_en) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (position, set_position) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (mobile, set_mobile) = signal(String::new());
    let (email, set_email) = signal(String::new());
    // One box is one hundred cards.
    let (boxes, set_boxes) = signal("1".to_string());
    let (pickup, set_pickup) = signal("사내 수령".to_string());
    let (design, set_design) = signal("standard".to_string());
    let (submitted_id, set_submitted_id) = signal(None::<String>);

    let department_options = || {
        seed::departments()
            .into_iter()
            .map(|d| (d.clone(), d))
            .collect::<Vec<_>>()
    };
    let position_options = || {
        seed::positions()
            .into_iter()
            .map(|p| (p.clone(), p))
            .collect::<Vec<_>>()
    };
    let box_options = || {
        (1..=5)
            .map(|n| (n.to_string(), format!("{n}박스 ({}매)", n * 100)))
            .collect::<Vec<_>>()
    };

    let submit = move |_| {
        if name_ko.get_untracked().trim().is_empty()
            || name_en.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
        {
            toasts.error("이름과 이메일은 필수 항목입니다.");
            return;
        }
        let qty: u32 = boxes.get_untracked().parse().unwrap_or(1);
        let title = card_title(&request_type.get_untracked(), qty, &design.get_untracked());
        let id = portal.submit_request(ServiceKind::Card, &title);
        set_submitted_id.set(Some(id));
    };

    let restart = move |_| {
        set_name_ko.set(String::new());
        set_name_en.set(String::new());
        set_phone.set(String::new());
        set_mobile.set(String::new());
        set_email.set(String::new());
        set_boxes.set("1".to_string());
        set_design.set("standard".to_string());
        set_submitted_id.set(None);
    };

    view! {
        <div class="page">
            <PageHeader title="명함 신청" subtitle="명함 발급을 신청합니다 (1박스 = 100매)" />

            <Show when=move || submitted_id.get().is_some()>
                <div class="card done">
                    <span class="done__icon">{icon("check-circle")}</span>
                    <h2>"신청이 완료되었습니다!"</h2>
                    <p class="done__id">{move || submitted_id.get().unwrap_or_default()}</p>
                    <p>"인사팀 검토 후 제작이 진행됩니다 (약 5~7 영업일)."</p>
                    <div class="form__actions">
                        <Button variant="secondary" on_click=Callback::new(restart)>
                            "새 신청 작성"
                        </Button>
                    </div>
                </div>
            </Show>

            <Show when=move || submitted_id.get().is_none()>
            <div class="card form">
                <div class="form__group">
                    <label class="form__label">"신청 종류 *"</label>
                    <div class="choice-row">
                        {REQUEST_TYPES
                            .iter()
                            .map(|t| {
                                let is_selected = move || request_type.get() == *t;
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "choice choice--selected"
                                            } else {
                                                "choice"
                                            }
                                        }
                                        on:click=move |_| set_request_type.set(t.to_string())
                                    >
                                        {*t}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label">"디자인 *"</label>
                    <div class="choice-row">
                        {DESIGNS
                            .iter()
                            .map(|(key, label, desc)| {
                                let is_selected = move || design.get() == *key;
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "choice choice--selected"
                                            } else {
                                                "choice"
                                            }
                                        }
                                        on:click=move |_| set_design.set(key.to_string())
                                    >
                                        <span class="choice__label">{*label}</span>
                                        <span class="choice__desc">{*desc}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="form__row">
                    <Input
                        label="이름 (한글) *"
                        value=name_ko
                        on_input=Callback::new(move |v: String| set_name_ko.set(v))
                    />
                    <Input
                        label="이름 (영문) *"
                        value=name_en
                        placeholder="Gil-dong Hong"
                        on_input=Callback::new(move |v: String| set_name_en.set(v))
                    />
                </div>
                <div class="form__row">
                    <Select
                        label="부서 *"
                        value=department
                        options=Signal::derive(department_options)
                        on_change=Callback::new(move |v: String| set_department.set(v))
                    />
                    <Select
                        label="직책/직급 *"
                        value=position
                        options=Signal::derive(position_options)
                        on_change=Callback::new(move |v: String| set_position.set(v))
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="사무실 전화"
                        value=phone
                        placeholder="02-0000-0000"
                        on_input=Callback::new(move |v: String| set_phone.set(v))
                    />
                    <Input
                        label="휴대폰"
                        value=mobile
                        placeholder="010-0000-0000"
                        on_input=Callback::new(move |v: String| set_mobile.set(v))
                    />
                </div>
                <Input
                    label="이메일 *"
                    input_type="email"
                    value=email
                    placeholder="name@cushwake.com"
                    on_input=Callback::new(move |v: String| set_email.set(v))
                />
                <div class="form__row">
                    <Select
                        label="수량 *"
                        value=boxes
                        options=Signal::derive(box_options)
                        on_change=Callback::new(move |v: String| set_boxes.set(v))
                    />
                    <Select
                        label="수령 방법 *"
                        value=pickup
                        options=Signal::derive(|| {
                            PICKUP_METHODS
                                .iter()
                                .map(|m| (m.to_string(), m.to_string()))
                                .collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| set_pickup.set(v))
                    />
                </div>
                <div class="form__actions">
                    <Button on_click=Callback::new(submit)>"신청하기"</Button>
                </div>
            </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::card_title;

    #[test]
    fn title_carries_type_sheet_count_and_design() {
        assert_eq!(card_title("신규 발급", 1, "standard"), "신규 발급 명함 100매 (표준형)");
        assert_eq!(card_title("재발급", 3, "bilingual"), "재발급 명함 300매 (한영 양면)");
    }

    #[test]
    fn unknown_design_falls_back_to_standard() {
        assert_eq!(card_title("신규 발급", 1, "glossy"), "신규 발급 명함 100매 (표준형)");
    }
}
