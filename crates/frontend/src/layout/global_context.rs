use crate::shared::date_utils::today;
use contracts::domain::a001_request::{
    approve_request, cancel_request, reject_request, Request, RequestStatus, ServiceKind,
};
use contracts::domain::a003_document::{Division, PermissionUser};
use contracts::domain::a004_manual::Manual;
use contracts::domain::a005_faq::Faq;
use contracts::domain::a007_notification::{mark_all_read, unread_count, Notification};
use contracts::seed;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;
use log::info;

/// Application-wide store. Every collection starts from seed data and lives
/// only for the browser session; mutations never leave the signals.
#[derive(Clone, Copy)]
pub struct PortalContext {
    pub current_user: RwSignal<User>,
    pub requests: RwSignal<Vec<Request>>,
    pub notifications: RwSignal<Vec<Notification>>,
    pub manuals: RwSignal<Vec<Manual>>,
    pub faqs: RwSignal<Vec<Faq>>,
    pub users: RwSignal<Vec<User>>,
    pub permission_users: RwSignal<Vec<PermissionUser>>,
}

impl PortalContext {
    pub fn new() -> Self {
        Self {
            current_user: RwSignal::new(seed::CURRENT_USER.clone()),
            requests: RwSignal::new(seed::requests()),
            notifications: RwSignal::new(seed::notifications()),
            manuals: RwSignal::new(seed::manuals()),
            faqs: RwSignal::new(seed::faqs()),
            users: RwSignal::new(seed::users()),
            permission_users: RwSignal::new(seed::permission_users()),
        }
    }

    /// Next ticket id in the REQ-YYYY-NNN sequence.
    fn next_request_id(&self) -> String {
        let year = today().format("%Y");
        let n = self.requests.with_untracked(|r| r.len()) + 1;
        format!("REQ-{year}-{n:03}")
    }

    /// Register a submitted form as a pending ticket and return its id.
    pub fn submit_request(&self, kind: ServiceKind, title: &str) -> String {
        let id = self.next_request_id();
        let user = self.current_user.get_untracked();
        let request = Request {
            id: id.clone(),
            kind,
            title: title.to_string(),
            status: RequestStatus::Pending,
            created_at: today(),
            updated_at: today(),
            department: user.department,
            requester: user.name,
        };
        info!("request submitted: {} ({})", id, kind.code());
        self.requests.update(|r| r.push(request));
        id
    }

    pub fn approve(&self, id: &str) -> bool {
        let mut done = false;
        self.requests
            .update(|r| done = approve_request(r, id, today()));
        done
    }

    pub fn reject(&self, id: &str) -> bool {
        let mut done = false;
        self.requests
            .update(|r| done = reject_request(r, id, today()));
        done
    }

    /// Withdraw one of the current user's pending tickets.
    pub fn cancel(&self, id: &str) -> bool {
        let mut done = false;
        self.requests.update(|r| done = cancel_request(r, id));
        if done {
            info!("request cancelled: {id}");
        }
        done
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.with(|n| unread_count(n))
    }

    pub fn mark_notifications_read(&self) {
        self.notifications.update(|n| mark_all_read(n));
    }

    // --- admin console: manuals ---

    pub fn add_manual(&self, title: &str, category: &str) {
        let manual = Manual::new(title, category, today());
        self.manuals.update(|m| m.push(manual));
    }

    pub fn update_manual(&self, id: &str, title: &str, category: &str) {
        self.manuals.update(|manuals| {
            if let Some(m) = manuals.iter_mut().find(|m| m.id == id) {
                m.title = title.to_string();
                m.category = category.to_string();
                m.updated_at = today();
            }
        });
    }

    pub fn delete_manual(&self, id: &str) {
        self.manuals.update(|m| m.retain(|m| m.id != id));
    }

    // --- admin console: FAQ ---

    pub fn add_faq(&self, question: &str, answer: &str) {
        self.faqs.update(|f| f.push(Faq::new(question, answer)));
    }

    pub fn update_faq(&self, id: &str, question: &str, answer: &str) {
        self.faqs.update(|faqs| {
            if let Some(f) = faqs.iter_mut().find(|f| f.id == id) {
                f.question = question.to_string();
                f.answer = answer.to_string();
            }
        });
    }

    pub fn delete_faq(&self, id: &str) {
        self.faqs.update(|f| f.retain(|f| f.id != id));
    }

    // --- admin console: users ---

    pub fn add_user(&self, dto: &UserDto) {
        self.users.update(|u| u.push(User::from_dto(dto)));
    }

    pub fn update_user(&self, id: &str, dto: &UserDto) {
        self.users.update(|users| {
            if let Some(u) = users.iter_mut().find(|u| u.id == id) {
                u.apply_dto(dto);
            }
        });
    }

    pub fn delete_user(&self, id: &str) {
        self.users.update(|u| u.retain(|u| u.id != id));
    }

    // --- document permission matrix ---

    pub fn toggle_permission(&self, user_id: u32, division: Division, doc_id: &str) {
        self.permission_users.update(|users| {
            if let Some(u) = users.iter_mut().find(|u| u.id == user_id) {
                u.perms.toggle(division, doc_id);
            }
        });
    }

    pub fn grant_all_permissions(&self, user_id: u32, division: Division) {
        self.permission_users.update(|users| {
            if let Some(u) = users.iter_mut().find(|u| u.id == user_id) {
                u.perms.grant_all(division);
            }
        });
    }

    pub fn revoke_all_permissions(&self, user_id: u32, division: Division) {
        self.permission_users.update(|users| {
            if let Some(u) = users.iter_mut().find(|u| u.id == user_id) {
                u.perms.revoke_all(division);
            }
        });
    }
}

impl Default for PortalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext not provided")
}
