use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::ServiceKind;
use contracts::seed;
use leptos::prelude::*;

const CATEGORIES: &[&str] = &["복사기", "프로젝터", "정수기", "에어컨/난방", "조명", "기타"];
const URGENCIES: &[&str] = &["낮음", "보통", "높음"];

#[component]
pub fn FacilityReportPage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let tickets = StoredValue::new(seed::facility_tickets());

    let (floor, set_floor) = signal(String::new());
    let (area, set_area) = signal(String::new());
    let (category, set_category) = signal("복사기".to_string());
    let (description, set_description) = signal(String::new());
    let (urgency, set_urgency) = signal("보통".to_string());

    let submit = move |_| {
        if floor.get_untracked().trim().is_empty()
            || description.get_untracked().trim().is_empty()
        {
            toasts.error("위치와 고장 내용을 입력해 주세요.");
            return;
        }
        let title = format!(
            "{} {} {}",
            floor.get_untracked(),
            area.get_untracked(),
            description.get_untracked()
        );
        let id = portal.submit_request(ServiceKind::Facility, title.trim());
        set_floor.set(String::new());
        set_area.set(String::new());
        set_description.set(String::new());
        toasts.success(&format!("{id} 신고가 접수되었습니다."));
    };

    view! {
        <div class="page">
            <PageHeader title="고장 신고" subtitle="사내 시설 고장을 접수합니다" />

            <div class="card form">
                <div class="form__row">
                    <Input
                        label="층 *"
                        value=floor
                        placeholder="예: 3층"
                        on_input=Callback::new(move |v: String| set_floor.set(v))
                    />
                    <Input
                        label="구역"
                        value=area
                        placeholder="예: A구역, 회의실"
                        on_input=Callback::new(move |v: String| set_area.set(v))
                    />
                    <Select
                        label="설비 분류 *"
                        value=category
                        options=Signal::derive(|| {
                            CATEGORIES
                                .iter()
                                .map(|c| (c.to_string(), c.to_string()))
                                .collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| set_category.set(v))
                    />
                </div>
                <Textarea
                    label="고장 내용 *"
                    value=description
                    placeholder="증상을 구체적으로 적어 주세요"
                    on_input=Callback::new(move |v: String| set_description.set(v))
                />
                <div class="form__group">
                    <label class="form__label">"긴급도"</label>
                    <div class="choice-row">
                        {URGENCIES
                            .iter()
                            .map(|u| {
                                let is_selected = move || urgency.get() == *u;
                                view! {
                                    <button
                                        class=move || {
                                            if is_selected() {
                                                "choice choice--selected"
                                            } else {
                                                "choice"
                                            }
                                        }
                                        on:click=move |_| set_urgency.set(u.to_string())
                                    >
                                        {*u}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="form__actions">
                    <Button on_click=Callback::new(submit)>"신고 접수"</Button>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"최근 신고 내역"</h2>
                {move || {
                    tickets
                        .with_value(|t| t.clone())
                        .into_iter()
                        .map(|t| view! {
                            <div class="ticket-row">
                                <div class="ticket-row__body">
                                    <p class="ticket-row__title">
                                        {format!("{} - {}", t.location, t.category)}
                                    </p>
                                    <p class="ticket-row__desc">{t.summary.clone()}</p>
                                </div>
                                <span class="ticket-row__urgency">
                                    {format!("긴급도 {}", t.urgency)}
                                </span>
                                <span class=t.status.badge_class()>{t.status.label()}</span>
                                <span class="ticket-row__date">{format_date(t.date)}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
