use crate::layout::global_context::use_portal;
use crate::shared::components::{AdminGuard, PageHeader, StatCard};
use crate::shared::icons::icon;
use contracts::domain::a001_request::{count_by_status, RequestStatus};
use leptos::prelude::*;
use leptos_router::components::A;

const ADMIN_SHORTCUTS: &[(&str, &str, &str, &str)] = &[
    ("/admin/approvals", "승인 관리", "대기 중인 신청을 처리합니다", "check-circle"),
    ("/admin/users", "사용자 관리", "계정 추가, 수정, 삭제", "users"),
    ("/admin/manuals", "매뉴얼 관리", "업무 매뉴얼 등록과 편집", "book"),
    ("/admin/faqs", "FAQ 관리", "자주 묻는 질문 편집", "info"),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <AdminGuard>
            <AdminHome />
        </AdminGuard>
    }
}

#[component]
fn AdminHome() -> impl IntoView {
    let portal = use_portal();

    let pending = move || portal.requests.with(|r| count_by_status(r, RequestStatus::Pending));
    let approved = move || portal.requests.with(|r| count_by_status(r, RequestStatus::Approved));
    let rejected = move || portal.requests.with(|r| count_by_status(r, RequestStatus::Rejected));
    let user_count = move || portal.users.with(|u| u.len());

    view! {
        <div class="page">
            <PageHeader title="관리자 홈" subtitle="전체 현황과 관리 메뉴" />

            <div class="stat-grid">
                <StatCard
                    label="승인 대기"
                    icon_name="bell"
                    value=Signal::derive(move || format!("{}건", pending()))
                />
                <StatCard
                    label="승인"
                    icon_name="check-circle"
                    value=Signal::derive(move || format!("{}건", approved()))
                />
                <StatCard
                    label="반려"
                    icon_name="x-circle"
                    value=Signal::derive(move || format!("{}건", rejected()))
                />
                <StatCard
                    label="등록 사용자"
                    icon_name="users"
                    value=Signal::derive(move || format!("{}명", user_count()))
                />
            </div>

            <div class="admin-shortcuts">
                {ADMIN_SHORTCUTS
                    .iter()
                    .map(|(href, title, desc, icon_name)| view! {
                        <A href=*href attr:class="admin-shortcut">
                            <span class="admin-shortcut__icon">{icon(icon_name)}</span>
                            <div>
                                <h3 class="admin-shortcut__title">{*title}</h3>
                                <p class="admin-shortcut__desc">{*desc}</p>
                            </div>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
