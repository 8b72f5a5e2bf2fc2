use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::components::{AdminGuard, PageHeader};
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::toast::use_toast;
use contracts::seed;
use contracts::shared::search;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;

#[component]
pub fn UserManagementPage() -> impl IntoView {
    view! {
        <AdminGuard>
            <UserManagement />
        </AdminGuard>
    }
}

/// Admin console: portal accounts.
#[component]
fn UserManagement() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let (query, set_query) = signal(String::new());
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<String>);
    let dto = RwSignal::new(UserDto::default());

    let filtered = move || portal.users.with(|u| search(u, &query.get()));

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

    let open_create = move |_| {
        set_editing_id.set(None);
        dto.set(UserDto::default());
        set_form_open.set(true);
    };

    let open_edit = move |user: User| {
        set_editing_id.set(Some(user.id.clone()));
        dto.set(UserDto {
            name: user.name,
            email: user.email,
            department: user.department,
            position: user.position,
            role_is_admin: user.role.is_admin(),
        });
        set_form_open.set(true);
    };

    let save = move |_| {
        let form = dto.get_untracked();
        if !form.is_valid() {
            toasts.error("이름과 이메일을 입력해 주세요.");
            return;
        }
        match editing_id.get_untracked() {
            Some(id) => {
                portal.update_user(&id, &form);
                toasts.success("사용자 정보가 수정되었습니다.");
            }
            None => {
                portal.add_user(&form);
                toasts.success("사용자가 추가되었습니다.");
            }
        }
        set_form_open.set(false);
    };

    view! {
        <div class="page">
            <PageHeader title="사용자 관리" subtitle="포털 계정을 관리합니다">
                <Button on_click=Callback::new(open_create)>
                    {icon("plus")}
                    " 사용자 추가"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_input=Callback::new(move |v: String| set_query.set(v))
                    placeholder="이름, 이메일, 부서 검색"
                />
            </div>

            <Show when=move || form_open.get()>
                <div class="card form">
                    <h2 class="card__title">
                        {move || if editing_id.get().is_some() { "사용자 수정" } else { "사용자 추가" }}
                    </h2>
                    <div class="form__row">
                        <Input
                            label="이름 *"
                            value=Signal::derive(move || dto.with(|d| d.name.clone()))
                            on_input=Callback::new(move |v: String| dto.update(|d| d.name = v))
                        />
                        <Input
                            label="이메일 *"
                            input_type="email"
                            value=Signal::derive(move || dto.with(|d| d.email.clone()))
                            on_input=Callback::new(move |v: String| dto.update(|d| d.email = v))
                        />
                    </div>
                    <div class="form__row">
                        <Select
                            label="부서"
                            value=Signal::derive(move || dto.with(|d| d.department.clone()))
                            options=Signal::derive(department_options)
                            on_change=Callback::new(move |v: String| {
                                dto.update(|d| d.department = v)
                            })
                        />
                        <Select
                            label="직급"
                            value=Signal::derive(move || dto.with(|d| d.position.clone()))
                            options=Signal::derive(position_options)
                            on_change=Callback::new(move |v: String| {
                                dto.update(|d| d.position = v)
                            })
                        />
                    </div>
                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || dto.with(|d| d.role_is_admin)
                            on:change=move |_| dto.update(|d| d.role_is_admin = !d.role_is_admin)
                        />
                        <span>"관리자 권한 부여"</span>
                    </label>
                    <div class="form__actions">
                        <Button on_click=Callback::new(save)>"저장"</Button>
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| set_form_open.set(false))
                        >
                            "취소"
                        </Button>
                    </div>
                </div>
            </Show>

            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__cell">"이름"</th>
                            <th class="table__cell">"이메일"</th>
                            <th class="table__cell">"부서"</th>
                            <th class="table__cell">"직급"</th>
                            <th class="table__cell">"권한"</th>
                            <th class="table__cell">"작업"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|u| (u.id.clone(), u.name.clone(), u.email.clone(), u.role)
                            children=move |user: User| {
                                let edit_target = user.clone();
                                let delete_id = user.id.clone();
                                let is_self = portal
                                    .current_user
                                    .with_untracked(|me| me.id == user.id);
                                view! {
                                    <tr>
                                        <td class="table__cell">{user.name.clone()}</td>
                                        <td class="table__cell">{user.email.clone()}</td>
                                        <td class="table__cell">{user.department.clone()}</td>
                                        <td class="table__cell">{user.position.clone()}</td>
                                        <td class="table__cell">
                                            <span class=if user.role.is_admin() {
                                                "badge badge--approved"
                                            } else {
                                                "badge badge--pending"
                                            }>
                                                {user.role.label()}
                                            </span>
                                        </td>
                                        <td class="table__cell">
                                            <div class="table__actions">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new({
                                                        let u = edit_target.clone();
                                                        move |_| open_edit(u.clone())
                                                    })
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    variant="danger"
                                                    size="sm"
                                                    disabled=is_self
                                                    on_click=Callback::new({
                                                        let id = delete_id.clone();
                                                        move |_| {
                                                            if !confirm(
                                                                "정말 이 사용자를 삭제하시겠습니까?",
                                                            ) {
                                                                return;
                                                            }
                                                            portal.delete_user(&id);
                                                            toasts.success("사용자가 삭제되었습니다.");
                                                        }
                                                    })
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
