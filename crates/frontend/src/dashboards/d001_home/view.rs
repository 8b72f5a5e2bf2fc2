use crate::layout::global_context::use_portal;
use crate::shared::components::{StatCard, ui::StatusBadge};
use crate::shared::date_utils::{format_date, month_grid, today};
use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::domain::a001_request::Request;
use contracts::domain::a007_notification::Notification;
use contracts::seed;
use leptos::prelude::*;
use leptos_router::components::A;

const WEEKDAYS: &[&str] = &["일", "월", "화", "수", "목", "금", "토"];

const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("/wreath", "화환 신청", "flower"),
    ("/supplies", "사무용품", "box"),
    ("/vehicle", "법인차량", "car"),
    ("/business-card", "명함 신청", "card"),
    ("/document", "법인 문서", "file"),
    ("/facility", "고장 신고", "wrench"),
];

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let portal = use_portal();
    let stats = seed::stats();

    let greeting = move || {
        let name = portal.current_user.with(|u| u.name.clone());
        format!("안녕하세요, {name}님")
    };

    // Latest five tickets, newest first.
    let recent = move || {
        let mut requests = portal.requests.get();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests.truncate(5);
        requests
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-header__title">{greeting}</h1>
                    <p class="page-header__subtitle">"무엇을 도와드릴까요?"</p>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="이번 달 신청"
                    icon_name="clipboard"
                    value=Signal::derive(move || format!("{}건", stats.this_month_requests))
                />
                <StatCard
                    label="승인율"
                    icon_name="check-circle"
                    value=Signal::derive(move || format!("{}%", stats.approval_rate))
                />
                <StatCard
                    label="평균 처리 기간"
                    icon_name="info"
                    value=Signal::derive(move || format!("{}일", stats.avg_processing_days))
                />
                <StatCard
                    label="대기 중"
                    icon_name="bell"
                    value=Signal::derive(move || format!("{}건", stats.pending_count))
                />
            </div>

            <section class="card">
                <h2 class="card__title">"바로가기"</h2>
                <div class="quick-actions">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(href, label, icon_name)| view! {
                            <A href=*href attr:class="quick-action">
                                <span class="quick-action__icon">{icon(icon_name)}</span>
                                <span class="quick-action__label">{*label}</span>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="card">
                <div class="card__head">
                    <h2 class="card__title">"최근 신청"</h2>
                    <A href="/my-requests" attr:class="card__link">"전체 보기"</A>
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell">"번호"</th>
                            <th class="table__cell">"구분"</th>
                            <th class="table__cell">"내용"</th>
                            <th class="table__cell">"신청일"</th>
                            <th class="table__cell">"상태"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=recent
                            key=|r| (r.id.clone(), r.status)
                            children=move |r: Request| {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--mono">{r.id.clone()}</td>
                                        <td class="table__cell">{r.kind.label()}</td>
                                        <td class="table__cell">{r.title.clone()}</td>
                                        <td class="table__cell">{format_date(r.created_at)}</td>
                                        <td class="table__cell"><StatusBadge status=r.status /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>

            <div class="home-columns">
                <NotificationFeed />
                <VehicleMiniCalendar />
            </div>

            <ManualShortcuts />
        </div>
    }
}

/// "최근 알림" card mirroring the header bell, with a mark-all-read action.
#[component]
fn NotificationFeed() -> impl IntoView {
    let portal = use_portal();

    view! {
        <section class="card">
            <div class="card__head">
                <h2 class="card__title">"최근 알림"</h2>
                <button
                    class="card__link"
                    on:click=move |_| portal.mark_notifications_read()
                >
                    "전체 읽음"
                </button>
            </div>
            <div class="notif-feed">
                <For
                    each=move || portal.notifications.get()
                    key=|n| (n.id.clone(), n.read)
                    children=move |n: Notification| {
                        let unread = !n.read;
                        let item_class = if n.read {
                            "notif-item"
                        } else {
                            "notif-item notif-item--unread"
                        };
                        view! {
                            <div class=item_class>
                                <span class="notif-item__icon">{icon(n.kind.icon())}</span>
                                <div class="notif-item__body">
                                    <p class="notif-item__message">{n.message.clone()}</p>
                                    <span class="notif-item__time">{n.time.clone()}</span>
                                </div>
                                <Show when=move || unread>
                                    <span class="notif-item__dot"></span>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

/// Month-at-a-glance vehicle calendar. Anchored to the month of the seeded
/// bookings so the reservation highlights are visible.
#[component]
fn VehicleMiniCalendar() -> impl IntoView {
    let bookings = seed::vehicle_bookings();
    let anchor = bookings.first().map(|b| b.date).unwrap_or_else(today);
    let (year, month) = (anchor.year(), anchor.month());

    let booked_days: Vec<u32> = bookings
        .iter()
        .filter(|b| b.date.year() == year && b.date.month() == month)
        .map(|b| b.date.day())
        .collect();
    let today_day = {
        let now = today();
        (now.year() == year && now.month() == month).then(|| now.day())
    };

    let upcoming: Vec<_> = bookings.iter().take(3).cloned().collect();

    view! {
        <section class="card">
            <div class="card__head">
                <h2 class="card__title">{format!("{year}년 {month}월 차량 예약")}</h2>
                <A href="/vehicle" attr:class="card__link">"예약하기"</A>
            </div>
            <div class="calendar">
                <div class="calendar__grid">
                    {WEEKDAYS
                        .iter()
                        .enumerate()
                        .map(|(i, day)| {
                            let class = match i {
                                0 => "calendar__weekday calendar__weekday--sun",
                                6 => "calendar__weekday calendar__weekday--sat",
                                _ => "calendar__weekday",
                            };
                            view! { <span class=class>{*day}</span> }
                        })
                        .collect_view()}
                    {month_grid(year, month)
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <span class="calendar__day calendar__day--blank"></span> }
                                .into_any(),
                            Some(day) => {
                                let mut class = "calendar__day".to_string();
                                if booked_days.contains(&day) {
                                    class.push_str(" calendar__day--booked");
                                }
                                if today_day == Some(day) {
                                    class.push_str(" calendar__day--today");
                                }
                                view! { <span class=class>{day}</span> }.into_any()
                            }
                        })
                        .collect_view()}
                </div>
                <div class="calendar__events">
                    {upcoming
                        .into_iter()
                        .map(|b| view! {
                            <div class="calendar__event">
                                <span class="calendar__event-dot"></span>
                                <span class="calendar__event-date">{format_date(b.date)}</span>
                                <span class="calendar__event-text">
                                    {format!("{} · {}", b.time, b.destination)}
                                </span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Popular-manual and FAQ shortcuts at the bottom of the dashboard.
#[component]
fn ManualShortcuts() -> impl IntoView {
    let portal = use_portal();

    // Three most-viewed manuals.
    let popular = move || {
        let mut manuals = portal.manuals.get();
        manuals.sort_by(|a, b| b.views.cmp(&a.views));
        manuals.truncate(3);
        manuals
    };

    view! {
        <section class="card">
            <div class="card__head">
                <h2 class="card__title">"매뉴얼 & FAQ"</h2>
                <A href="/manuals" attr:class="card__link">"전체 보기"</A>
            </div>
            <div class="shortcut-grid">
                <div class="shortcut-col">
                    <h3 class="shortcut-col__title">"인기 매뉴얼"</h3>
                    <For
                        each=popular
                        key=|m| m.id.clone()
                        children=move |m| {
                            view! {
                                <A href="/manuals" attr:class="shortcut-item">
                                    <span class="shortcut-item__icon">{icon("book")}</span>
                                    <span class="shortcut-item__label">{m.title.clone()}</span>
                                    <span class="shortcut-item__meta">
                                        {format!("조회 {}", m.views)}
                                    </span>
                                </A>
                            }
                        }
                    />
                </div>
                <div class="shortcut-col">
                    <h3 class="shortcut-col__title">"바로가기"</h3>
                    <A href="/manuals" attr:class="shortcut-item">
                        <span class="shortcut-item__icon">{icon("info")}</span>
                        <span class="shortcut-item__label">"자주 묻는 질문"</span>
                    </A>
                    <A href="/inquiry" attr:class="shortcut-item">
                        <span class="shortcut-item__icon">{icon("edit")}</span>
                        <span class="shortcut-item__label">"빠른 문의"</span>
                    </A>
                </div>
            </div>
        </section>
    }
}
