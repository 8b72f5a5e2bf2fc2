use crate::layout::global_context::use_portal;
use crate::shared::components::ui::{Button, Input, Select, StatusBadge};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::toast::use_toast;
use contracts::domain::a001_request::{count_by_status, RequestStatus};
use contracts::seed;
use leptos::prelude::*;

/// Presence and match checks for the password-change form. The portal has
/// no real credential store, so this is the whole validation.
fn validate_password_change(
    current: &str,
    next: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if current.is_empty() || next.is_empty() || confirm.is_empty() {
        return Err("모든 비밀번호 항목을 입력해 주세요.");
    }
    if next != confirm {
        return Err("새 비밀번호가 일치하지 않습니다.");
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let portal = use_portal();
    let toasts = use_toast();

    let me = portal.current_user.get_untracked();
    let (name, set_name) = signal(me.name.clone());
    let (department, set_department) = signal(me.department.clone());
    let (position, set_position) = signal(me.position.clone());

    let (pw_current, set_pw_current) = signal(String::new());
    let (pw_next, set_pw_next) = signal(String::new());
    let (pw_confirm, set_pw_confirm) = signal(String::new());

    let save = move |_| {
        if name.get_untracked().trim().is_empty() {
            toasts.error("이름을 입력해 주세요.");
            return;
        }
        portal.current_user.update(|u| {
            u.name = name.get_untracked();
            u.department = department.get_untracked();
            u.position = position.get_untracked();
        });
        toasts.success("프로필이 저장되었습니다.");
    };

    let change_password = move |_| {
        let result = validate_password_change(
            &pw_current.get_untracked(),
            &pw_next.get_untracked(),
            &pw_confirm.get_untracked(),
        );
        match result {
            Ok(()) => {
                set_pw_current.set(String::new());
                set_pw_next.set(String::new());
                set_pw_confirm.set(String::new());
                toasts.success("비밀번호가 변경되었습니다.");
            }
            Err(message) => toasts.error(message),
        }
    };

    let initials = move || {
        portal
            .current_user
            .with(|u| u.name.chars().take(2).collect::<String>())
    };

    let total = move || portal.requests.with(|r| r.len());
    let pending = move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Pending))
    };
    let approved = move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Approved))
    };
    let completed = move || {
        portal
            .requests
            .with(|r| count_by_status(r, RequestStatus::Completed))
    };

    // Three most recent tickets.
    let recent = move || {
        let mut requests = portal.requests.get();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests.truncate(3);
        requests
    };

    view! {
        <div class="page">
            <PageHeader title="프로필" subtitle="내 계정 정보" />

            <div class="card profile">
                <div class="profile__avatar">{initials}</div>
                <div class="profile__meta">
                    <h2>{move || portal.current_user.with(|u| u.name.clone())}</h2>
                    <p>{me.email.clone()}</p>
                    <span class=if me.role.is_admin() {
                        "badge badge--approved"
                    } else {
                        "badge badge--pending"
                    }>
                        {me.role.label()}
                    </span>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"나의 신청 통계"</h2>
                <div class="profile-stats">
                    <div class="profile-stats__item">
                        <span class="profile-stats__value">{total}</span>
                        <span class="profile-stats__label">"전체 신청"</span>
                    </div>
                    <div class="profile-stats__item">
                        <span class="profile-stats__value">{approved}</span>
                        <span class="profile-stats__label">"승인"</span>
                    </div>
                    <div class="profile-stats__item">
                        <span class="profile-stats__value">{completed}</span>
                        <span class="profile-stats__label">"완료"</span>
                    </div>
                    <div class="profile-stats__item">
                        <span class="profile-stats__value">{pending}</span>
                        <span class="profile-stats__label">"대기 중"</span>
                    </div>
                </div>
            </div>

            <div class="card form">
                <h2 class="card__title">"정보 수정"</h2>
                <Input
                    label="이름"
                    value=name
                    on_input=Callback::new(move |v: String| set_name.set(v))
                />
                <div class="form__row">
                    <Select
                        label="부서"
                        value=department
                        options=Signal::derive(|| {
                            seed::departments()
                                .into_iter()
                                .map(|d| (d.clone(), d))
                                .collect::<Vec<_>>()
                        })
                        on_change=Callback::new(move |v: String| set_department.set(v))
                    />
                    <Select
                        label="직급"
                        value=position
                        options=Signal::derive(|| {
                            let mut options = vec![(String::new(), "미지정".to_string())];
                            options.extend(seed::positions().into_iter().map(|p| (p.clone(), p)));
                            options
                        })
                        on_change=Callback::new(move |v: String| set_position.set(v))
                    />
                </div>
                <div class="form__actions">
                    <Button on_click=Callback::new(save)>"저장"</Button>
                </div>
            </div>

            <div class="card form">
                <h2 class="card__title">"비밀번호 변경"</h2>
                <Input
                    label="현재 비밀번호"
                    input_type="password"
                    value=pw_current
                    placeholder="현재 비밀번호 입력"
                    on_input=Callback::new(move |v: String| set_pw_current.set(v))
                />
                <div class="form__row">
                    <Input
                        label="새 비밀번호"
                        input_type="password"
                        value=pw_next
                        placeholder="새 비밀번호 입력"
                        on_input=Callback::new(move |v: String| set_pw_next.set(v))
                    />
                    <Input
                        label="새 비밀번호 확인"
                        input_type="password"
                        value=pw_confirm
                        placeholder="새 비밀번호 재입력"
                        on_input=Callback::new(move |v: String| set_pw_confirm.set(v))
                    />
                </div>
                <div class="form__actions">
                    <Button on_click=Callback::new(change_password)>"비밀번호 변경"</Button>
                </div>
            </div>

            <div class="card">
                <h2 class="card__title">"최근 활동"</h2>
                <div class="activity-list">
                    <For
                        each=recent
                        key=|r| (r.id.clone(), r.status)
                        children=move |r| {
                            view! {
                                <div class="activity-list__row">
                                    <span class="activity-list__title">{r.title.clone()}</span>
                                    <span class="activity-list__date">
                                        {format_date(r.created_at)}
                                    </span>
                                    <StatusBadge status=r.status />
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_password_change;

    #[test]
    fn every_field_is_required() {
        assert!(validate_password_change("", "new1234", "new1234").is_err());
        assert!(validate_password_change("old1234", "", "new1234").is_err());
        assert!(validate_password_change("old1234", "new1234", "").is_err());
    }

    #[test]
    fn new_password_must_match_its_confirmation() {
        assert_eq!(
            validate_password_change("old1234", "new1234", "new9999"),
            Err("새 비밀번호가 일치하지 않습니다.")
        );
        assert!(validate_password_change("old1234", "new1234", "new1234").is_ok());
    }
}
