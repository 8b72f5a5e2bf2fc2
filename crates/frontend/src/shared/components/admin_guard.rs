use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Gate for admin-only pages. Renders the page for admins and an
/// access-denied card for everyone else.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let portal = use_portal();
    let is_admin = move || portal.current_user.with(|u| u.role.is_admin());

    view! {
        <Show
            when=is_admin
            fallback=|| {
                view! {
                    <div class="page">
                        <div class="card access-denied">
                            <span class="access-denied__icon">{icon("lock")}</span>
                            <h2 class="access-denied__title">"접근 권한이 없습니다"</h2>
                            <p class="access-denied__text">
                                "관리자 전용 페이지입니다. 관리자 계정으로 이용해 주세요."
                            </p>
                        </div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
