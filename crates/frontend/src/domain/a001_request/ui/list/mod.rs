pub mod state;

use crate::layout::global_context::use_portal;
use crate::shared::components::{ui::Button, ui::StatusBadge, PageHeader, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{CategoryPills, SearchInput};
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::{count_by_status, Request, RequestStatus, ServiceKind};
use contracts::shared::filter_list;
use leptos::prelude::*;
use state::create_state;

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let portal = use_portal();
    let state = create_state();

    let status_options = move || {
        let mut options = vec!["전체".to_string()];
        options.extend(RequestStatus::all().iter().map(|s| s.label().to_string()));
        options
    };

    let type_options = move || {
        let mut options = vec!["전체".to_string()];
        options.extend(ServiceKind::all().iter().map(|k| k.label().to_string()));
        options
    };

    let filtered = move || {
        let s = state.get();
        portal.requests.with(|requests| {
            let mut rows = filter_list(requests, &s.search, &s.status_filter, "전체", |r| {
                r.status.label().to_string()
            });
            if s.type_filter != "전체" {
                rows.retain(|r| r.kind.label() == s.type_filter);
            }
            rows
        })
    };

    let total = Signal::derive(move || portal.requests.with(|r| r.len().to_string()));
    let pending = Signal::derive(move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Pending).to_string())
    });
    let approved = Signal::derive(move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Approved).to_string())
    });
    let completed = Signal::derive(move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Completed).to_string())
    });

    view! {
        <div class="page">
            <PageHeader title="내 신청 내역" subtitle="제출한 신청의 진행 상태를 확인합니다" />

            <div class="stat-grid">
                <StatCard label="전체 신청" icon_name="clipboard" value=total />
                <StatCard label="대기 중" icon_name="info" value=pending />
                <StatCard label="승인" icon_name="check-circle" value=approved />
                <StatCard label="완료" icon_name="shield" value=completed />
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_input=Callback::new(move |v: String| state.update(|s| s.search = v))
                    placeholder="번호, 내용, 신청자 검색"
                />
                <CategoryPills
                    categories=Signal::derive(status_options)
                    selected=Signal::derive(move || state.with(|s| s.status_filter.clone()))
                    on_select=Callback::new(move |v: String| state.update(|s| s.status_filter = v))
                />
            </div>
            <div class="list-toolbar">
                <CategoryPills
                    categories=Signal::derive(type_options)
                    selected=Signal::derive(move || state.with(|s| s.type_filter.clone()))
                    on_select=Callback::new(move |v: String| state.update(|s| s.type_filter = v))
                />
            </div>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell">"번호"</th>
                            <th class="table__cell">"구분"</th>
                            <th class="table__cell">"내용"</th>
                            <th class="table__cell">"부서"</th>
                            <th class="table__cell">"신청자"</th>
                            <th class="table__cell">"신청일"</th>
                            <th class="table__cell">"처리일"</th>
                            <th class="table__cell">"상태"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|r| (r.id.clone(), r.status)
                            children=move |r: Request| {
                                view! { <RequestRow request=r state=state /> }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || filtered().is_empty()>
                    <p class="empty">"조건에 맞는 신청이 없습니다."</p>
                </Show>
            </div>
        </div>
    }
}

/// One request row plus its expandable detail panel.
#[component]
fn RequestRow(
    request: Request,
    state: RwSignal<state::RequestListState>,
) -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let row = StoredValue::new(request);
    let row_id = row.with_value(|r| r.id.clone());

    let is_open = {
        let id = row_id.clone();
        Signal::derive(move || state.with(|s| s.selected.as_deref() == Some(id.as_str())))
    };

    let toggle = {
        let id = row_id.clone();
        move |_| state.update(|s| s.toggle_selected(&id))
    };

    let cancel = {
        let id = row_id.clone();
        Callback::new(move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if portal.cancel(&id) {
                state.update(|s| s.selected = None);
                toasts.success("신청이 취소되었습니다.");
            }
        })
    };

    view! {
        <tr class="table__row table__row--clickable" on:click=toggle>
            <td class="table__cell table__cell--mono">{row.with_value(|r| r.id.clone())}</td>
            <td class="table__cell">{row.with_value(|r| r.kind.label())}</td>
            <td class="table__cell">{row.with_value(|r| r.title.clone())}</td>
            <td class="table__cell">{row.with_value(|r| r.department.clone())}</td>
            <td class="table__cell">{row.with_value(|r| r.requester.clone())}</td>
            <td class="table__cell">{row.with_value(|r| format_date(r.created_at))}</td>
            <td class="table__cell">{row.with_value(|r| format_date(r.updated_at))}</td>
            <td class="table__cell"><StatusBadge status=row.with_value(|r| r.status) /></td>
        </tr>
        <Show when=move || is_open.get()>
            <tr class="table__detail-row">
                <td class="table__detail-cell" colspan="8">
                    <div class="request-detail">
                        <div class="request-detail__grid">
                            <DetailField label="신청 번호" value=row.with_value(|r| r.id.clone()) />
                            <DetailField
                                label="구분"
                                value=row.with_value(|r| r.kind.label().to_string())
                            />
                            <DetailField label="제목" value=row.with_value(|r| r.title.clone()) />
                            <DetailField
                                label="신청자"
                                value=row.with_value(|r| r.requester.clone())
                            />
                            <DetailField
                                label="부서"
                                value=row.with_value(|r| r.department.clone())
                            />
                            <DetailField
                                label="신청일"
                                value=row.with_value(|r| format_date(r.created_at))
                            />
                            <DetailField
                                label="최종 수정"
                                value=row.with_value(|r| format_date(r.updated_at))
                            />
                        </div>

                        <h4 class="request-detail__heading">"처리 이력"</h4>
                        <div class="timeline">
                            {row
                                .with_value(|r| r.history())
                                .into_iter()
                                .map(|step| {
                                    let step_class = if step.done {
                                        "timeline__step timeline__step--done"
                                    } else {
                                        "timeline__step"
                                    };
                                    let date = step
                                        .date
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class=step_class>
                                            <span class="timeline__dot"></span>
                                            <span class="timeline__label">{step.label}</span>
                                            <span class="timeline__date">{date}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Show when=move || {
                            row.with_value(|r| r.status == RequestStatus::Pending)
                        }>
                            <div class="request-detail__actions">
                                <Button variant="danger" size="sm" on_click=cancel>
                                    "신청 취소"
                                </Button>
                            </div>
                        </Show>
                    </div>
                </td>
            </tr>
        </Show>
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="request-detail__field">
            <span class="request-detail__label">{label}</span>
            <span class="request-detail__value">{value}</span>
        </div>
    }
}
