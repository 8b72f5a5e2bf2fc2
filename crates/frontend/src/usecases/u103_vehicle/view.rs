use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use chrono::NaiveDate;
use contracts::domain::a001_request::ServiceKind;
use contracts::domain::a006_vehicle::{Vehicle, VehicleBooking};
use contracts::seed;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone)]
struct BookingForm {
    vehicle_id: String,
    date: String,
    time_from: String,
    time_to: String,
    departure: String,
    destination: String,
    passengers: String,
    purpose: String,
    notes: String,
}

impl BookingForm {
    fn fresh() -> Self {
        Self {
            vehicle_id: String::new(),
            date: String::new(),
            time_from: "09:00".to_string(),
            time_to: "12:00".to_string(),
            departure: String::new(),
            destination: String::new(),
            passengers: "1".to_string(),
            purpose: String::new(),
            notes: String::new(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.vehicle_id.is_empty()
            && !self.date.trim().is_empty()
            && !self.destination.trim().is_empty()
            && !self.purpose.trim().is_empty()
    }

    fn summary(&self) -> String {
        format!("{} {} ({}명)", self.date, self.destination, self.passengers)
    }
}

fn passenger_options() -> Vec<(String, String)> {
    (1..=8).map(|n| (n.to_string(), format!("{n}명"))).collect()
}

#[component]
pub fn VehicleRequestPage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let fleet = StoredValue::new(seed::fleet());
    let bookings = StoredValue::new(seed::vehicle_bookings());

    let form = RwSignal::new(BookingForm::fresh());
    let (submitted_id, set_submitted_id) = signal(None::<String>);

    // Existing reservations for the chosen day.
    let day_bookings = move || {
        let raw = form.with(|f| f.date.clone());
        let Some(parsed) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok() else {
            return Vec::new();
        };
        bookings.with_value(|b| VehicleBooking::on_date(b, parsed))
    };

    let submit = move |_| {
        if form.with_untracked(|f| f.vehicle_id.is_empty()) {
            toasts.error("차량을 선택해 주세요.");
            return;
        }
        if !form.with_untracked(|f| f.is_complete()) {
            toasts.error("이용 날짜, 목적지, 이용 목적을 입력해 주세요.");
            return;
        }
        let title = form.with_untracked(|f| f.summary());
        let id = portal.submit_request(ServiceKind::Vehicle, &title);
        set_submitted_id.set(Some(id));
    };

    let restart = move |_| {
        form.set(BookingForm::fresh());
        set_submitted_id.set(None);
    };

    view! {
        <div class="page">
            <PageHeader title="법인차량 예약" subtitle="차량을 선택하고 이용 일정을 신청합니다" />

            <Show when=move || submitted_id.get().is_some()>
                <div class="card done">
                    <span class="done__icon">{icon("check-circle")}</span>
                    <h2>"예약이 완료되었습니다!"</h2>
                    <p class="done__id">{move || submitted_id.get().unwrap_or_default()}</p>
                    <p>"승인 결과는 알림으로 안내됩니다."</p>
                    <div class="form__actions">
                        <A href="/" attr:class="button button--primary">"대시보드"</A>
                        <Button variant="secondary" on_click=Callback::new(restart)>
                            "새 예약"
                        </Button>
                    </div>
                </div>
            </Show>

            <Show when=move || submitted_id.get().is_none()>
            <div class="card">
                <h2 class="card__title">"차량 선택"</h2>
                <div class="vehicle-grid">
                    {move || {
                        fleet
                            .with_value(|v| v.clone())
                            .into_iter()
                            .map(|v: Vehicle| {
                                let id = v.id.clone();
                                let selectable = v.available;
                                let is_selected = {
                                    let id = id.clone();
                                    move || form.with(|f| f.vehicle_id == id)
                                };
                                view! {
                                    <button
                                        class=move || {
                                            let mut class = String::from("vehicle-card");
                                            if is_selected() {
                                                class.push_str(" vehicle-card--selected");
                                            }
                                            if !selectable {
                                                class.push_str(" vehicle-card--disabled");
                                            }
                                            class
                                        }
                                        disabled=!selectable
                                        on:click=move |_| {
                                            if selectable {
                                                form.update(|f| f.vehicle_id = id.clone());
                                            }
                                        }
                                    >
                                        <span class="vehicle-card__icon">{icon("car")}</span>
                                        <div class="vehicle-card__body">
                                            <span class="vehicle-card__name">{v.name.clone()}</span>
                                            <span class="vehicle-card__capacity">
                                                {format!("최대 {}인승", v.capacity)}
                                            </span>
                                        </div>
                                        <span class=if v.available {
                                            "badge badge--approved"
                                        } else {
                                            "badge badge--rejected"
                                        }>
                                            {if v.available { "예약 가능" } else { "사용 중" }}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="card form">
                <h2 class="card__title">"이용 일정"</h2>
                <div class="form__row">
                    <Input
                        label="이용 날짜 *"
                        input_type="date"
                        value=Signal::derive(move || form.with(|f| f.date.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.date = v))
                    />
                    <Input
                        label="출발 시간"
                        input_type="time"
                        value=Signal::derive(move || form.with(|f| f.time_from.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.time_from = v))
                    />
                    <Input
                        label="복귀 시간"
                        input_type="time"
                        value=Signal::derive(move || form.with(|f| f.time_to.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.time_to = v))
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="출발지"
                        value=Signal::derive(move || form.with(|f| f.departure.clone()))
                        placeholder="예: 여의도 C&W 사무소"
                        on_input=Callback::new(move |v: String| form.update(|f| f.departure = v))
                    />
                    <Input
                        label="목적지 *"
                        value=Signal::derive(move || form.with(|f| f.destination.clone()))
                        placeholder="예: 판교 사무소"
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.destination = v)
                        })
                    />
                    <Select
                        label="탑승 인원"
                        value=Signal::derive(move || form.with(|f| f.passengers.clone()))
                        options=Signal::derive(passenger_options)
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.passengers = v)
                        })
                    />
                </div>
                <Input
                    label="이용 목적 *"
                    value=Signal::derive(move || form.with(|f| f.purpose.clone()))
                    placeholder="예: 클라이언트 미팅"
                    on_input=Callback::new(move |v: String| form.update(|f| f.purpose = v))
                />
                <Textarea
                    label="비고 (선택)"
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    rows=2
                    on_input=Callback::new(move |v: String| form.update(|f| f.notes = v))
                />

                <Show when=move || !day_bookings().is_empty()>
                    <div class="booking-list">
                        <h3 class="booking-list__title">"해당 날짜의 기존 예약"</h3>
                        {move || {
                            day_bookings()
                                .into_iter()
                                .map(|b| view! {
                                    <div class="booking-list__row">
                                        <span class="booking-list__time">{b.time.clone()}</span>
                                        <span>{b.destination.clone()}</span>
                                        <span class="booking-list__driver">{b.driver.clone()}</span>
                                        <span>{format_date(b.date)}</span>
                                    </div>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <div class="form__actions">
                    <Button on_click=Callback::new(submit)>"예약 신청"</Button>
                </div>
            </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{passenger_options, BookingForm};

    fn filled() -> BookingForm {
        let mut form = BookingForm::fresh();
        form.vehicle_id = "v1".to_string();
        form.date = "2026-02-25".to_string();
        form.destination = "판교 사무소".to_string();
        form.purpose = "클라이언트 미팅".to_string();
        form
    }

    #[test]
    fn booking_requires_vehicle_date_destination_and_purpose() {
        assert!(!BookingForm::fresh().is_complete());
        assert!(filled().is_complete());

        let mut missing_purpose = filled();
        missing_purpose.purpose = "  ".to_string();
        assert!(!missing_purpose.is_complete());

        let mut missing_vehicle = filled();
        missing_vehicle.vehicle_id = String::new();
        assert!(!missing_vehicle.is_complete());
    }

    #[test]
    fn summary_carries_date_destination_and_headcount() {
        let mut form = filled();
        form.passengers = "4".to_string();
        assert_eq!(form.summary(), "2026-02-25 판교 사무소 (4명)");
    }

    #[test]
    fn passenger_options_cover_one_to_eight() {
        let options = passenger_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], ("1".to_string(), "1명".to_string()));
        assert_eq!(options[7], ("8".to_string(), "8명".to_string()));
    }
}
