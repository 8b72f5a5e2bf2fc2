use crate::shared::{contains_ci, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// The six service kinds a request can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Wreath,
    Supplies,
    Vehicle,
    Card,
    Document,
    Facility,
}

impl ServiceKind {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceKind::Wreath => "wreath",
            ServiceKind::Supplies => "supplies",
            ServiceKind::Vehicle => "vehicle",
            ServiceKind::Card => "card",
            ServiceKind::Document => "document",
            ServiceKind::Facility => "facility",
        }
    }

    /// Label shown in lists and filter pills.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Wreath => "화환 신청",
            ServiceKind::Supplies => "사무용품",
            ServiceKind::Vehicle => "법인차량",
            ServiceKind::Card => "명함 신청",
            ServiceKind::Document => "법인 문서",
            ServiceKind::Facility => "고장 신고",
        }
    }

    pub fn all() -> Vec<ServiceKind> {
        vec![
            ServiceKind::Wreath,
            ServiceKind::Supplies,
            ServiceKind::Vehicle,
            ServiceKind::Card,
            ServiceKind::Document,
            ServiceKind::Facility,
        ]
    }
}

/// Request lifecycle status.
///
/// The admin UI only produces `Pending -> Approved` and `Pending -> Rejected`.
/// `Completed` exists in seed data as a separate terminal state and is never
/// reached through a visible transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl RequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "대기 중",
            RequestStatus::Approved => "승인",
            RequestStatus::Rejected => "반려",
            RequestStatus::Completed => "완료",
        }
    }

    /// BEM modifier used by the status badge component.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "badge badge--pending",
            RequestStatus::Approved => "badge badge--approved",
            RequestStatus::Rejected => "badge badge--rejected",
            RequestStatus::Completed => "badge badge--completed",
        }
    }

    pub fn all() -> Vec<RequestStatus> {
        vec![
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Completed,
        ]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A user-submitted service ticket with one lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub kind: ServiceKind,
    pub title: String,
    pub status: RequestStatus,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
    pub department: String,
    pub requester: String,
}

impl Request {
    /// `Pending -> Approved`; refreshes `updated_at`. Returns false when the
    /// request is not pending.
    pub fn approve(&mut self, today: NaiveDate) -> bool {
        if self.status != RequestStatus::Pending {
            return false;
        }
        self.status = RequestStatus::Approved;
        self.updated_at = today;
        true
    }

    /// `Pending -> Rejected`; refreshes `updated_at`. Returns false when the
    /// request is not pending.
    pub fn reject(&mut self, today: NaiveDate) -> bool {
        if self.status != RequestStatus::Pending {
            return false;
        }
        self.status = RequestStatus::Rejected;
        self.updated_at = today;
        true
    }
}

/// One entry of the processing-history timeline shown in the request
/// detail panel. `date` is `None` while the step has not happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStep {
    pub label: &'static str,
    pub date: Option<NaiveDate>,
    pub done: bool,
}

impl Request {
    /// The four-step processing timeline for this request. Review and
    /// decision steps are done once the request left `Pending`; the final
    /// step is done only for `Completed`.
    pub fn history(&self) -> Vec<HistoryStep> {
        let decided = self.status != RequestStatus::Pending;
        let decision_label = match self.status {
            RequestStatus::Rejected => "반려",
            _ => "승인",
        };
        vec![
            HistoryStep {
                label: "신청 접수",
                date: Some(self.created_at),
                done: true,
            },
            HistoryStep {
                label: "검토 중",
                date: decided.then_some(self.created_at),
                done: decided,
            },
            HistoryStep {
                label: decision_label,
                date: decided.then_some(self.updated_at),
                done: decided,
            },
            HistoryStep {
                label: "처리 완료",
                date: (self.status == RequestStatus::Completed).then_some(self.updated_at),
                done: self.status == RequestStatus::Completed,
            },
        ]
    }
}

impl Searchable for Request {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.id, query)
            || contains_ci(&self.title, query)
            || contains_ci(&self.requester, query)
    }
}

// ============================================================================
// List operations
// ============================================================================

/// Approve the request with the given id. Touches exactly one record;
/// returns whether a transition happened.
pub fn approve_request(requests: &mut [Request], id: &str, today: NaiveDate) -> bool {
    requests
        .iter_mut()
        .find(|r| r.id == id)
        .map(|r| r.approve(today))
        .unwrap_or(false)
}

/// Reject the request with the given id. Symmetric to [`approve_request`].
pub fn reject_request(requests: &mut [Request], id: &str, today: NaiveDate) -> bool {
    requests
        .iter_mut()
        .find(|r| r.id == id)
        .map(|r| r.reject(today))
        .unwrap_or(false)
}

/// Withdraw a pending request: removes it from the list. Non-pending
/// requests cannot be cancelled; returns whether a removal happened.
pub fn cancel_request(requests: &mut Vec<Request>, id: &str) -> bool {
    match requests
        .iter()
        .position(|r| r.id == id && r.status == RequestStatus::Pending)
    {
        Some(pos) => {
            requests.remove(pos);
            true
        }
        None => false,
    }
}

pub fn count_by_status(requests: &[Request], status: RequestStatus) -> usize {
    requests.iter().filter(|r| r.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn approve_transitions_only_pending() {
        let mut requests = seed::requests();
        let today = day(2026, 2, 22);

        assert!(approve_request(&mut requests, "REQ-2026-002", today));
        let touched = requests.iter().find(|r| r.id == "REQ-2026-002").unwrap();
        assert_eq!(touched.status, RequestStatus::Approved);
        assert_eq!(touched.updated_at, today);

        // Already approved: a second approve is a no-op.
        assert!(!approve_request(&mut requests, "REQ-2026-002", today));
        // Completed never transitions.
        assert!(!approve_request(&mut requests, "REQ-2026-004", today));
        // Unknown id reports false.
        assert!(!approve_request(&mut requests, "REQ-9999-001", today));
    }

    #[test]
    fn reject_is_symmetric_to_approve() {
        let mut requests = seed::requests();
        let today = day(2026, 2, 22);

        assert!(reject_request(&mut requests, "REQ-2026-005", today));
        let touched = requests.iter().find(|r| r.id == "REQ-2026-005").unwrap();
        assert_eq!(touched.status, RequestStatus::Rejected);
        assert_eq!(touched.updated_at, today);

        assert!(!reject_request(&mut requests, "REQ-2026-001", today));
    }

    #[test]
    fn approving_one_request_leaves_the_rest_untouched() {
        let before = seed::requests();
        let mut after = before.clone();
        approve_request(&mut after, "REQ-2026-002", day(2026, 2, 22));

        let changed: Vec<&str> = before
            .iter()
            .zip(after.iter())
            .filter(|(b, a)| b != a)
            .map(|(b, _)| b.id.as_str())
            .collect();
        assert_eq!(changed, vec!["REQ-2026-002"]);

        let b = &before.iter().find(|r| r.id == "REQ-2026-002").unwrap();
        let a = &after.iter().find(|r| r.id == "REQ-2026-002").unwrap();
        assert_eq!(b.status, RequestStatus::Pending);
        assert_eq!(a.status, RequestStatus::Approved);
    }

    #[test]
    fn status_counts_match_seed() {
        let requests = seed::requests();
        assert_eq!(requests.len(), 7);
        assert_eq!(count_by_status(&requests, RequestStatus::Pending), 2);
        assert_eq!(count_by_status(&requests, RequestStatus::Approved), 2);
        assert_eq!(count_by_status(&requests, RequestStatus::Rejected), 1);
        assert_eq!(count_by_status(&requests, RequestStatus::Completed), 2);
    }

    #[test]
    fn cancel_removes_only_pending_requests() {
        let mut requests = seed::requests();
        let len = requests.len();

        // Pending request is withdrawn entirely.
        assert!(cancel_request(&mut requests, "REQ-2026-002"));
        assert_eq!(requests.len(), len - 1);
        assert!(!requests.iter().any(|r| r.id == "REQ-2026-002"));

        // Approved and completed rows stay put.
        assert!(!cancel_request(&mut requests, "REQ-2026-001"));
        assert!(!cancel_request(&mut requests, "REQ-2026-004"));
        // Unknown id reports false.
        assert!(!cancel_request(&mut requests, "REQ-9999-001"));
        assert_eq!(requests.len(), len - 1);
    }

    #[test]
    fn pending_history_has_one_done_step() {
        let requests = seed::requests();
        let pending = requests.iter().find(|r| r.id == "REQ-2026-002").unwrap();
        let steps = pending.history();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].label, "신청 접수");
        assert!(steps[0].done);
        assert_eq!(steps[0].date, Some(pending.created_at));
        assert!(!steps[1].done);
        assert_eq!(steps[1].date, None);
        assert!(!steps[2].done);
        assert!(!steps[3].done);
    }

    #[test]
    fn rejected_history_labels_the_decision_step() {
        let requests = seed::requests();
        let rejected = requests.iter().find(|r| r.id == "REQ-2026-007").unwrap();
        let steps = rejected.history();
        assert_eq!(steps[2].label, "반려");
        assert!(steps[2].done);
        assert_eq!(steps[2].date, Some(rejected.updated_at));
        // Rejection is terminal without a completion step.
        assert!(!steps[3].done);
    }

    #[test]
    fn completed_history_is_fully_done() {
        let requests = seed::requests();
        let completed = requests.iter().find(|r| r.id == "REQ-2026-004").unwrap();
        let steps = completed.history();
        assert!(steps.iter().all(|s| s.done));
        assert_eq!(steps[2].label, "승인");
        assert_eq!(steps[3].date, Some(completed.updated_at));
    }

    #[test]
    fn request_search_covers_id_title_and_requester() {
        let requests = seed::requests();
        assert!(requests[0].matches_query("req-2026-001"));
        assert!(requests[0].matches_query("화환"));
        assert!(requests[0].matches_query("이지수"));
        assert!(!requests[0].matches_query("없는 검색어"));
    }
}
