use crate::layout::global_context::use_portal;
use crate::shared::components::{ui::Button, ui::StatusBadge, AdminGuard, PageHeader};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::{count_by_status, Request, RequestStatus};
use contracts::shared::filter_list;
use leptos::prelude::*;

/// Filter pills for the approval console: each reviewable status with its
/// live count, plus the "전체" bucket.
fn status_filter_options(requests: &[Request]) -> Vec<(String, usize)> {
    let mut options = vec![("전체".to_string(), requests.len())];
    for status in [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ] {
        options.push((
            status.label().to_string(),
            count_by_status(requests, status),
        ));
    }
    options
}

#[component]
pub fn ApprovalManagementPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <ApprovalConsole />
        </AdminGuard>
    }
}

/// Admin console: pending tickets first, approve/reject per row.
#[component]
fn ApprovalConsole() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (search, set_search) = signal(String::new());
    // The console opens on the queue that needs action.
    let (status_filter, set_status_filter) = signal(RequestStatus::Pending.label().to_string());

    let filter_options = move || portal.requests.with(|r| status_filter_options(r));

    let filtered = move || {
        let mut rows = portal.requests.with(|requests| {
            filter_list(requests, &search.get(), &status_filter.get(), "전체", |r| {
                r.status.label().to_string()
            })
        });
        // Pending tickets sort to the top, newest first within each group.
        rows.sort_by(|a, b| {
            let rank = |r: &Request| (r.status != RequestStatus::Pending) as u8;
            rank(a).cmp(&rank(b)).then(b.created_at.cmp(&a.created_at))
        });
        rows
    };

    let on_approve = move |id: String| {
        if portal.approve(&id) {
            toasts.success(&format!("{id} 신청을 승인했습니다."));
        }
    };
    let on_reject = move |id: String| {
        if portal.reject(&id) {
            toasts.success(&format!("{id} 신청을 반려했습니다."));
        }
    };

    view! {
        <div class="page">
            <PageHeader title="승인 관리" subtitle="접수된 신청을 검토하고 처리합니다" />

            <div class="list-toolbar">
                <SearchInput
                    value=search
                    on_input=Callback::new(move |v: String| set_search.set(v))
                    placeholder="번호, 내용, 신청자 검색"
                />
                <div class="pills">
                    <For
                        each=filter_options
                        key=|(label, count)| (label.clone(), *count)
                        children=move |(label, count): (String, usize)| {
                            let value = label.clone();
                            let pill_class = {
                                let label = label.clone();
                                move || {
                                    if status_filter.get() == label {
                                        "pill pill--active"
                                    } else {
                                        "pill"
                                    }
                                }
                            };
                            view! {
                                <button
                                    class=pill_class
                                    on:click=move |_| set_status_filter.set(value.clone())
                                >
                                    {label.clone()}
                                    <span class="pill__count">{count}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell">"번호"</th>
                            <th class="table__cell">"구분"</th>
                            <th class="table__cell">"내용"</th>
                            <th class="table__cell">"신청자"</th>
                            <th class="table__cell">"신청일"</th>
                            <th class="table__cell">"상태"</th>
                            <th class="table__cell">"처리"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|r| (r.id.clone(), r.status)
                            children=move |r: Request| {
                                let approve_id = r.id.clone();
                                let reject_id = r.id.clone();
                                let is_pending = r.status == RequestStatus::Pending;
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--mono">{r.id.clone()}</td>
                                        <td class="table__cell">{r.kind.label()}</td>
                                        <td class="table__cell">{r.title.clone()}</td>
                                        <td class="table__cell">
                                            {format!("{} · {}", r.requester, r.department)}
                                        </td>
                                        <td class="table__cell">{format_date(r.created_at)}</td>
                                        <td class="table__cell"><StatusBadge status=r.status /></td>
                                        <td class="table__cell">
                                            <Show when=move || is_pending>
                                                <div class="table__actions">
                                                    <Button
                                                        size="sm"
                                                        on_click=Callback::new({
                                                            let id = approve_id.clone();
                                                            move |_| on_approve(id.clone())
                                                        })
                                                    >
                                                        "승인"
                                                    </Button>
                                                    <Button
                                                        variant="danger"
                                                        size="sm"
                                                        on_click=Callback::new({
                                                            let id = reject_id.clone();
                                                            move |_| on_reject(id.clone())
                                                        })
                                                    >
                                                        "반려"
                                                    </Button>
                                                </div>
                                            </Show>
                                        </td>
                                    </tr>
                                }
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::seed;

    #[test]
    fn filter_pills_carry_live_counts() {
        let requests = seed::requests();
        let options = status_filter_options(&requests);
        assert_eq!(
            options,
            vec![
                ("전체".to_string(), 7),
                ("대기 중".to_string(), 2),
                ("승인".to_string(), 2),
                ("반려".to_string(), 1),
            ]
        );
    }

    #[test]
    fn counts_follow_transitions() {
        let mut requests = seed::requests();
        let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        contracts::domain::a001_request::approve_request(&mut requests, "REQ-2026-002", today);
        let options = status_filter_options(&requests);
        assert_eq!(options[1], ("대기 중".to_string(), 1));
        assert_eq!(options[2], ("승인".to_string(), 3));
    }
}
