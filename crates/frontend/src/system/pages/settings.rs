use crate::shared::components::ui::{Button, Select};
use crate::shared::components::PageHeader;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const SETTINGS_KEY: &str = "portal_settings";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
struct Settings {
    // 알림 설정
    approval_alerts: bool,
    rejection_alerts: bool,
    completion_alerts: bool,
    email_notifications: bool,
    weekly_digest: bool,
    // 시스템 설정
    dark_mode: bool,
    sound_alerts: bool,
    language: String,
    timezone: String,
    auto_logout: String,
    // 개인정보 및 보안
    profile_visible: bool,
    activity_visible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            approval_alerts: true,
            rejection_alerts: true,
            completion_alerts: true,
            email_notifications: true,
            weekly_digest: false,
            dark_mode: false,
            sound_alerts: false,
            language: "ko".to_string(),
            timezone: "Asia/Seoul".to_string(),
            auto_logout: "60".to_string(),
            profile_visible: true,
            activity_visible: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Notifications,
    System,
    Privacy,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_settings() -> Settings {
    storage()
        .and_then(|s| s.get_item(SETTINGS_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_settings(settings: &Settings) {
    if let Ok(json) = serde_json::to_string(settings) {
        if let Some(s) = storage() {
            let _ = s.set_item(SETTINGS_KEY, &json);
        }
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let toasts = use_toast();
    let settings = RwSignal::new(load_settings());
    let (tab, set_tab) = signal(Tab::Notifications);

    let tab_button = move |t: Tab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == t { "tab tab--active" } else { "tab" }
                on:click=move |_| set_tab.set(t)
            >
                {label}
            </button>
        }
    };

    let toggle_row = move |label: &'static str,
                           hint: &'static str,
                           get: fn(&Settings) -> bool,
                           set: fn(&mut Settings, bool)| {
        view! {
            <label class="setting-row">
                <div>
                    <span class="setting-row__label">{label}</span>
                    <span class="setting-row__hint">{hint}</span>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || settings.with(get)
                    on:change=move |_| {
                        settings.update(|s| {
                            let current = get(s);
                            set(s, !current);
                        })
                    }
                />
            </label>
        }
    };

    let save = move |_| {
        save_settings(&settings.get_untracked());
        toasts.success("설정이 저장되었습니다.");
    };

    view! {
        <div class="page">
            <PageHeader title="설정" subtitle="알림, 시스템, 개인정보 설정" />

            <div class="tabs">
                {tab_button(Tab::Notifications, "알림 설정")}
                {tab_button(Tab::System, "시스템 설정")}
                {tab_button(Tab::Privacy, "개인정보 및 보안")}
            </div>

            <Show when=move || tab.get() == Tab::Notifications>
                <div class="card">
                    <h2 class="card__title">"처리 결과 알림"</h2>
                    {toggle_row(
                        "승인 알림",
                        "신청이 승인되면 알림을 받습니다",
                        |s| s.approval_alerts,
                        |s, v| s.approval_alerts = v,
                    )}
                    {toggle_row(
                        "반려 알림",
                        "신청이 반려되면 알림을 받습니다",
                        |s| s.rejection_alerts,
                        |s, v| s.rejection_alerts = v,
                    )}
                    {toggle_row(
                        "완료 알림",
                        "처리가 끝나면 알림을 받습니다",
                        |s| s.completion_alerts,
                        |s, v| s.completion_alerts = v,
                    )}
                </div>
                <div class="card">
                    <h2 class="card__title">"이메일"</h2>
                    {toggle_row(
                        "이메일 알림",
                        "처리 결과를 이메일로도 받습니다",
                        |s| s.email_notifications,
                        |s, v| s.email_notifications = v,
                    )}
                    {toggle_row(
                        "주간 요약",
                        "매주 월요일 신청 현황 요약을 받습니다",
                        |s| s.weekly_digest,
                        |s, v| s.weekly_digest = v,
                    )}
                </div>
            </Show>

            <Show when=move || tab.get() == Tab::System>
                <div class="card">
                    <h2 class="card__title">"화면과 소리"</h2>
                    {toggle_row(
                        "다크 모드",
                        "어두운 화면 테마를 사용합니다",
                        |s| s.dark_mode,
                        |s, v| s.dark_mode = v,
                    )}
                    {toggle_row(
                        "알림음",
                        "새 알림 도착 시 소리를 냅니다",
                        |s| s.sound_alerts,
                        |s, v| s.sound_alerts = v,
                    )}
                </div>
                <div class="card form">
                    <h2 class="card__title">"환경"</h2>
                    <div class="form__row">
                        <Select
                            label="언어"
                            value=Signal::derive(move || settings.with(|s| s.language.clone()))
                            options=Signal::derive(|| vec![
                                ("ko".to_string(), "한국어".to_string()),
                                ("en".to_string(), "English".to_string()),
                            ])
                            on_change=Callback::new(move |v: String| {
                                settings.update(|s| s.language = v)
                            })
                        />
                        <Select
                            label="시간대"
                            value=Signal::derive(move || settings.with(|s| s.timezone.clone()))
                            options=Signal::derive(|| vec![
                                ("Asia/Seoul".to_string(), "서울 (UTC+9)".to_string()),
                                ("Asia/Singapore".to_string(), "싱가포르 (UTC+8)".to_string()),
                                ("UTC".to_string(), "UTC".to_string()),
                            ])
                            on_change=Callback::new(move |v: String| {
                                settings.update(|s| s.timezone = v)
                            })
                        />
                        <Select
                            label="자동 로그아웃"
                            value=Signal::derive(move || settings.with(|s| s.auto_logout.clone()))
                            options=Signal::derive(|| vec![
                                ("30".to_string(), "30분".to_string()),
                                ("60".to_string(), "60분".to_string()),
                                ("120".to_string(), "120분".to_string()),
                            ])
                            on_change=Callback::new(move |v: String| {
                                settings.update(|s| s.auto_logout = v)
                            })
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == Tab::Privacy>
                <div class="card">
                    <h2 class="card__title">"공개 범위"</h2>
                    {toggle_row(
                        "프로필 공개",
                        "다른 직원이 내 부서와 직급을 볼 수 있습니다",
                        |s| s.profile_visible,
                        |s, v| s.profile_visible = v,
                    )}
                    {toggle_row(
                        "활동 내역 공개",
                        "내 신청 활동을 부서원에게 표시합니다",
                        |s| s.activity_visible,
                        |s, v| s.activity_visible = v,
                    )}
                </div>
            </Show>

            <div class="form__actions">
                <Button on_click=Callback::new(save)>"변경사항 저장"</Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn defaults_match_the_page() {
        let s = Settings::default();
        assert!(s.approval_alerts);
        assert!(!s.weekly_digest);
        assert_eq!(s.language, "ko");
        assert_eq!(s.timezone, "Asia/Seoul");
        assert_eq!(s.auto_logout, "60");
        assert!(s.profile_visible);
    }

    #[test]
    fn stored_snapshot_restores_every_field() {
        let mut s = Settings::default();
        s.dark_mode = true;
        s.auto_logout = "30".to_string();
        s.email_notifications = false;
        let json = serde_json::to_string(&s).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert!(restored == s);
    }
}
