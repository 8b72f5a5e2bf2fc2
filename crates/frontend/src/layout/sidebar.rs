use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct NavItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const REQUEST_ITEMS: &[NavItem] = &[
    NavItem { href: "/wreath", label: "화환 신청", icon: "flower" },
    NavItem { href: "/supplies", label: "사무용품", icon: "box" },
    NavItem { href: "/vehicle", label: "법인차량", icon: "car" },
    NavItem { href: "/business-card", label: "명함 신청", icon: "card" },
    NavItem { href: "/document", label: "법인 문서", icon: "file" },
    NavItem { href: "/facility", label: "고장 신고", icon: "wrench" },
];

const INFO_ITEMS: &[NavItem] = &[
    NavItem { href: "/manuals", label: "업무 매뉴얼", icon: "book" },
    NavItem { href: "/inquiry", label: "문의하기", icon: "edit" },
    NavItem { href: "/my-requests", label: "내 신청 내역", icon: "clipboard" },
];

const ACCOUNT_ITEMS: &[NavItem] = &[
    NavItem { href: "/profile", label: "프로필", icon: "user" },
    NavItem { href: "/settings", label: "설정", icon: "settings" },
];

const ADMIN_ITEMS: &[NavItem] = &[
    NavItem { href: "/admin", label: "관리자 홈", icon: "shield" },
    NavItem { href: "/admin/approvals", label: "승인 관리", icon: "check-circle" },
    NavItem { href: "/admin/users", label: "사용자 관리", icon: "users" },
    NavItem { href: "/admin/manuals", label: "매뉴얼 관리", icon: "book" },
    NavItem { href: "/admin/faqs", label: "FAQ 관리", icon: "info" },
];

fn nav_section(title: &'static str, items: &'static [NavItem]) -> impl IntoView {
    let location = use_location();
    view! {
        <div class="sidebar__section">
            <span class="sidebar__section-title">{title}</span>
            {items
                .iter()
                .map(|item| {
                    let href = item.href;
                    let is_active = move || location.pathname.get() == href;
                    view! {
                        <A
                            href=href
                            attr:class=move || {
                                if is_active() {
                                    "sidebar__link sidebar__link--active"
                                } else {
                                    "sidebar__link"
                                }
                            }
                        >
                            <span class="sidebar__link-icon">{icon(item.icon)}</span>
                            <span>{item.label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let portal = use_portal();
    let location = use_location();
    let is_admin = move || portal.current_user.with(|u| u.role.is_admin());
    let home_active = move || location.pathname.get() == "/";

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__brand-mark">"C&W"</span>
                <span class="sidebar__brand-name">"인트라넷"</span>
            </div>
            <nav class="sidebar__nav">
                <div class="sidebar__section">
                    <A
                        href="/"
                        attr:class=move || {
                            if home_active() {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        }
                    >
                        <span class="sidebar__link-icon">{icon("home")}</span>
                        <span>"홈"</span>
                    </A>
                </div>
                {nav_section("신청", REQUEST_ITEMS)}
                {nav_section("정보", INFO_ITEMS)}
                {nav_section("계정", ACCOUNT_ITEMS)}
                <Show when=is_admin>
                    {nav_section("관리자", ADMIN_ITEMS)}
                </Show>
            </nav>
        </aside>
    }
}
