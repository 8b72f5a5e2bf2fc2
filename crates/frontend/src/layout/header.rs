use crate::layout::global_context::use_portal;
use crate::shared::icons::icon;
use contracts::domain::a007_notification::Notification;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let portal = use_portal();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let unread = move || portal.unread_notifications();
    let user_name = move || portal.current_user.with(|u| u.name.clone());
    let user_dept = move || portal.current_user.with(|u| u.department.clone());

    view! {
        <header class="header">
            <crate::layout::breadcrumb::Breadcrumb />
            <div class="header__right">
                <div class="header__bell">
                    <button
                        class="header__bell-button"
                        on:click=move |_| set_dropdown_open.update(|v| *v = !*v)
                    >
                        {icon("bell")}
                        <Show when=move || (unread() > 0)>
                            <span class="header__bell-badge">{unread}</span>
                        </Show>
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="notifications">
                            <div class="notifications__head">
                                <span>"알림"</span>
                                <button
                                    class="notifications__mark-read"
                                    on:click=move |_| portal.mark_notifications_read()
                                >
                                    "모두 읽음"
                                </button>
                            </div>
                            <For
                                each=move || portal.notifications.get()
                                key=|n| (n.id.clone(), n.read)
                                children=move |n: Notification| {
                                    view! {
                                        <div class=if n.read {
                                            "notifications__item"
                                        } else {
                                            "notifications__item notifications__item--unread"
                                        }>
                                            <span class="notifications__icon">
                                                {icon(n.kind.icon())}
                                            </span>
                                            <div class="notifications__text">
                                                <p>{n.message.clone()}</p>
                                                <span class="notifications__time">{n.time.clone()}</span>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
                <div class="header__user">
                    <span class="header__user-name">{user_name}</span>
                    <span class="header__user-dept">{user_dept}</span>
                </div>
            </div>
        </header>
    }
}
