//! In-memory seed data backing every page. There is no persistence layer:
//! each page clones what it needs into signals and mutates the copies.

use crate::domain::a001_request::{Request, RequestStatus, ServiceKind};
use crate::domain::a002_supply::SupplyItem;
use crate::domain::a003_document::{PermissionUser, UserPermissions};
use crate::domain::a004_manual::Manual;
use crate::domain::a005_faq::Faq;
use crate::domain::a006_vehicle::{FacilityStatus, FacilityTicket, Vehicle, VehicleBooking};
use crate::domain::a007_notification::{Notification, NotificationKind};
use crate::system::users::{Role, User};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date")
}

/// The signed-in account. There is no login flow; this is fixed.
pub static CURRENT_USER: Lazy<User> = Lazy::new(|| User {
    id: "u001".into(),
    name: "Noel Kim".into(),
    email: "noel.kim@cushwake.com".into(),
    department: "WPR팀".into(),
    position: String::new(),
    role: Role::Admin,
});

pub fn users() -> Vec<User> {
    fn u(id: &str, name: &str, email: &str, department: &str, position: &str, role: Role) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
            position: position.into(),
            role,
        }
    }
    vec![
        u("u001", "Noel Kim", "noel.kim@cushwake.com", "WPR팀", "팀장", Role::Admin),
        u("u002", "김철수", "kim.cs@cushwake.com", "AM팀", "부장", Role::User),
        u("u003", "이지수", "lee.js@cushwake.com", "마케팅팀", "과장", Role::User),
        u("u004", "박민준", "park.mj@cushwake.com", "전략기획팀", "대리", Role::User),
        u("u005", "최서연", "choi.sy@cushwake.com", "AM팀", "차장", Role::User),
    ]
}

pub fn requests() -> Vec<Request> {
    fn r(
        id: &str,
        kind: ServiceKind,
        title: &str,
        status: RequestStatus,
        created: NaiveDate,
        updated: NaiveDate,
        department: &str,
        requester: &str,
    ) -> Request {
        Request {
            id: id.into(),
            kind,
            title: title.into(),
            status,
            created_at: created,
            updated_at: updated,
            department: department.into(),
            requester: requester.into(),
        }
    }
    vec![
        r(
            "REQ-2026-001",
            ServiceKind::Wreath,
            "김철수 부장님 결혼 화환",
            RequestStatus::Approved,
            d(2026, 2, 18),
            d(2026, 2, 19),
            "마케팅팀",
            "이지수",
        ),
        r(
            "REQ-2026-002",
            ServiceKind::Supplies,
            "A4 용지 10박스, 볼펜 50개",
            RequestStatus::Pending,
            d(2026, 2, 19),
            d(2026, 2, 19),
            "전략기획팀",
            "박민준",
        ),
        r(
            "REQ-2026-003",
            ServiceKind::Vehicle,
            "2026-02-21 클라이언트 미팅",
            RequestStatus::Approved,
            d(2026, 2, 17),
            d(2026, 2, 18),
            "AM팀",
            "최서연",
        ),
        r(
            "REQ-2026-004",
            ServiceKind::Document,
            "재직증명서 (영문) - 비자 신청용",
            RequestStatus::Completed,
            d(2026, 2, 15),
            d(2026, 2, 16),
            "밸류에이션팀",
            "정현우",
        ),
        r(
            "REQ-2026-005",
            ServiceKind::Card,
            "명함 재발급 100매",
            RequestStatus::Pending,
            d(2026, 2, 20),
            d(2026, 2, 20),
            "리서치팀",
            "김다은",
        ),
        r(
            "REQ-2026-006",
            ServiceKind::Facility,
            "3층 복사기 용지 걸림",
            RequestStatus::Completed,
            d(2026, 2, 14),
            d(2026, 2, 15),
            "시설팀",
            "오태양",
        ),
        r(
            "REQ-2026-007",
            ServiceKind::Wreath,
            "장모님 상 조화",
            RequestStatus::Rejected,
            d(2026, 2, 12),
            d(2026, 2, 13),
            "임대차팀",
            "한지민",
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    fn n(id: &str, kind: NotificationKind, message: &str, time: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            kind,
            message: message.into(),
            time: time.into(),
            read,
        }
    }
    vec![
        n(
            "n1",
            NotificationKind::Approved,
            "REQ-2026-001 화환 신청이 승인되었습니다.",
            "30분 전",
            false,
        ),
        n(
            "n2",
            NotificationKind::Completed,
            "REQ-2026-004 재직증명서 발급이 완료되었습니다.",
            "2시간 전",
            false,
        ),
        n(
            "n3",
            NotificationKind::Info,
            "법인차량 예약 가능 시간이 업데이트되었습니다.",
            "어제",
            true,
        ),
        n(
            "n4",
            NotificationKind::Rejected,
            "REQ-2026-007 화환 신청이 반려되었습니다.",
            "2일 전",
            true,
        ),
        n(
            "n5",
            NotificationKind::Info,
            "2월 사무용품 재고 업데이트가 완료되었습니다.",
            "3일 전",
            true,
        ),
    ]
}

/// Home-dashboard headline numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalStats {
    pub this_month_requests: u32,
    pub approval_rate: u32,
    pub avg_processing_days: f32,
    pub pending_count: u32,
}

pub fn stats() -> PortalStats {
    PortalStats {
        this_month_requests: 14,
        approval_rate: 87,
        avg_processing_days: 1.4,
        pending_count: 3,
    }
}

pub fn manuals() -> Vec<Manual> {
    fn m(id: &str, title: &str, category: &str, views: u32, updated: NaiveDate) -> Manual {
        Manual {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            views,
            updated_at: updated,
        }
    }
    vec![
        m("m1", "법인차량 이용 안내", "업무 지원", 324, d(2026, 1, 15)),
        m("m2", "출장비 정산 매뉴얼", "재무/회계", 512, d(2026, 2, 1)),
        m("m3", "명함 디자인 가이드", "브랜드", 198, d(2025, 12, 20)),
        m("m4", "화상회의 시스템 사용법", "IT/시스템", 445, d(2026, 1, 28)),
        m("m5", "사무용품 신청 가이드", "업무 지원", 287, d(2026, 1, 10)),
        m("m6", "출장 여비 규정", "재무/회계", 394, d(2026, 1, 20)),
        m("m7", "고장 신고 절차", "시설", 156, d(2025, 12, 15)),
        m("m8", "보안 정책 안내", "IT/시스템", 328, d(2026, 2, 1)),
        m("m9", "신입 사원 온보딩 가이드", "인사", 621, d(2026, 1, 5)),
        m("m10", "개인정보 처리방침", "법무", 189, d(2025, 11, 30)),
    ]
}

pub fn manual_categories() -> Vec<String> {
    ["전체", "업무 지원", "재무/회계", "브랜드", "IT/시스템", "시설", "인사", "법무"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn faqs() -> Vec<Faq> {
    fn f(id: &str, question: &str, answer: &str) -> Faq {
        Faq {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
    vec![
        f(
            "f1",
            "화환 신청은 며칠 전에 해야 하나요?",
            "배송 날짜 최소 2영업일 전까지 신청해 주세요.",
        ),
        f(
            "f2",
            "사무용품 재고가 없을 경우?",
            "총무팀에서 별도 발주 후 3~5영업일 내 지급됩니다.",
        ),
        f(
            "f3",
            "법인 문서는 얼마나 걸리나요?",
            "재직증명서는 즉시, 경력증명서는 1~2 영업일 소요됩니다.",
        ),
        f(
            "f4",
            "법인차량 예약 취소는 어떻게 하나요?",
            "출발 2시간 전까지 시스템에서 직접 취소 가능합니다.",
        ),
        f(
            "f5",
            "명함 디자인 커스텀이 가능한가요?",
            "브랜드 가이드라인 내에서 부분 수정 가능합니다. 마케팅팀에 문의하세요.",
        ),
        f(
            "f6",
            "고장 신고 후 연락이 없으면?",
            "시설팀 내선 1004 또는 이 시스템에서 상태를 확인해 주세요.",
        ),
    ]
}

pub fn supply_items() -> Vec<SupplyItem> {
    fn s(id: &str, name: &str, category: &str, url: &str, price: u32) -> SupplyItem {
        SupplyItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            external_url: url.into(),
            supplier: "오피스 디포".into(),
            price,
        }
    }
    let base = "https://www.officedepot.co.kr/product/detail.do?pdtCode=";
    vec![
        s("s1", "A4 용지 (박스)", "소모품", &format!("{base}1234"), 25_000),
        s("s2", "볼펜 (흑색)", "필기구", &format!("{base}2345"), 800),
        s("s3", "볼펜 (청색)", "필기구", &format!("{base}2346"), 800),
        s("s4", "형광펜 세트", "필기구", &format!("{base}3456"), 4_500),
        s("s5", "포스트잇 (3x3)", "노트/메모지", &format!("{base}4567"), 3_200),
        s("s6", "A5 노트", "노트/메모지", &format!("{base}5678"), 2_500),
        s("s7", "2홀 파일", "파일/바인더", &format!("{base}6789"), 1_200),
        s("s8", "클리어파일 (20매)", "파일/바인더", &format!("{base}7890"), 8_500),
        s("s9", "스테이플러", "기타", &format!("{base}8901"), 12_000),
        s("s10", "테이프 (투명)", "기타", &format!("{base}9012"), 1_500),
        s("s11", "가위", "기타", &format!("{base}0123"), 3_500),
        s("s12", "화이트보드 마커", "필기구", &format!("{base}1122"), 2_800),
        s("s13", "클립 (중형)", "기타", &format!("{base}2233"), 1_800),
        s("s14", "수정테이프", "필기구", &format!("{base}3344"), 2_200),
        s("s15", "라벨지 A4", "소모품", &format!("{base}4455"), 15_000),
    ]
}

pub fn supply_categories() -> Vec<String> {
    ["전체", "소모품", "필기구", "노트/메모지", "파일/바인더", "기타"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn fleet() -> Vec<Vehicle> {
    fn v(id: &str, name: &str, capacity: u32, available: bool) -> Vehicle {
        Vehicle {
            id: id.into(),
            name: name.into(),
            capacity,
            available,
        }
    }
    vec![
        v("v1", "소나타 (가나1234)", 4, true),
        v("v2", "K5 (나다5678)", 4, true),
        v("v3", "카니발 (다라9012)", 8, false),
    ]
}

pub fn vehicle_bookings() -> Vec<VehicleBooking> {
    fn b(date: NaiveDate, time: &str, driver: &str, destination: &str) -> VehicleBooking {
        VehicleBooking {
            date,
            time: time.into(),
            driver: driver.into(),
            destination: destination.into(),
        }
    }
    vec![
        b(d(2026, 2, 20), "09:00-12:00", "김철수", "강남구청"),
        b(d(2026, 2, 20), "14:00-17:00", "이영희", "부산 클라이언트"),
        b(d(2026, 2, 21), "10:00-13:00", "박민수", "인천공항"),
        b(d(2026, 2, 24), "09:00-11:00", "최지영", "판교 사무소"),
        b(d(2026, 2, 25), "13:00-16:00", "정우성", "여의도 고객사"),
    ]
}

pub fn facility_tickets() -> Vec<FacilityTicket> {
    fn t(
        id: &str,
        location: &str,
        category: &str,
        summary: &str,
        urgency: &str,
        status: FacilityStatus,
        date: NaiveDate,
    ) -> FacilityTicket {
        FacilityTicket {
            id: id.into(),
            location: location.into(),
            category: category.into(),
            summary: summary.into(),
            urgency: urgency.into(),
            status,
            date,
        }
    }
    vec![
        t(
            "FR-001",
            "3층 A구역",
            "복사기",
            "용지 걸림 반복",
            "보통",
            FacilityStatus::Completed,
            d(2026, 2, 15),
        ),
        t(
            "FR-002",
            "5층 회의실",
            "프로젝터",
            "연결 불량",
            "높음",
            FacilityStatus::InProgress,
            d(2026, 2, 18),
        ),
        t(
            "FR-003",
            "2층 탕비실",
            "정수기",
            "냉각 불량",
            "낮음",
            FacilityStatus::Pending,
            d(2026, 2, 19),
        ),
    ]
}

pub fn permission_users() -> Vec<PermissionUser> {
    fn strs(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }
    fn p(
        id: u32,
        name: &str,
        dept: &str,
        division: &str,
        role: Role,
        perms: UserPermissions,
    ) -> PermissionUser {
        PermissionUser {
            id,
            name: name.into(),
            dept: dept.into(),
            division: division.into(),
            role,
            perms,
        }
    }
    vec![
        p(
            1,
            "Noel Kim",
            "WPR팀",
            "Back Office",
            Role::Admin,
            UserPermissions {
                iac: strs(&["biz_reg", "corp_reg", "seal_cert", "seal_card"]),
                brokerage: strs(&["biz_reg", "corp_reg", "seal_cert", "seal_card"]),
                cre_gos: strs(&["biz_reg", "corp_reg", "seal_cert", "seal_card"]),
                wpr: strs(&[
                    "wpr_sm_2025",
                    "wpr_sm_2024",
                    "wpr_sm_2023",
                    "wpr_articles",
                    "wpr_shareholder",
                    "wpr_board_2025",
                ]),
            },
        ),
        p(
            2,
            "이준혁",
            "AM팀",
            "IAC",
            Role::User,
            UserPermissions {
                iac: strs(&["biz_reg", "corp_reg"]),
                ..Default::default()
            },
        ),
        p(
            3,
            "박서연",
            "임대차팀",
            "Brokerage",
            Role::User,
            UserPermissions {
                brokerage: strs(&["biz_reg", "corp_reg", "seal_cert"]),
                ..Default::default()
            },
        ),
        p(
            4,
            "최민준",
            "리서치팀",
            "CRE&GOS",
            Role::User,
            UserPermissions {
                cre_gos: strs(&["biz_reg", "corp_reg"]),
                ..Default::default()
            },
        ),
        p(
            5,
            "김하은",
            "밸류에이션팀",
            "IAC",
            Role::User,
            UserPermissions {
                iac: strs(&["biz_reg"]),
                ..Default::default()
            },
        ),
        p(
            6,
            "정성우",
            "마케팅팀",
            "Back Office",
            Role::User,
            UserPermissions::default(),
        ),
        p(
            7,
            "한지민",
            "재무팀",
            "Back Office",
            Role::User,
            UserPermissions {
                iac: strs(&["biz_reg", "corp_reg", "seal_cert"]),
                brokerage: strs(&["biz_reg", "corp_reg", "seal_cert"]),
                cre_gos: strs(&["biz_reg", "corp_reg", "seal_cert"]),
                wpr: strs(&["wpr_sm_2025", "wpr_articles"]),
            },
        ),
        p(
            8,
            "오지훈",
            "시설팀",
            "Back Office",
            Role::User,
            UserPermissions {
                iac: strs(&["biz_reg"]),
                brokerage: strs(&["biz_reg"]),
                cre_gos: strs(&["biz_reg"]),
                ..Default::default()
            },
        ),
    ]
}

pub fn departments() -> Vec<String> {
    [
        "AM팀", "마케팅팀", "전략기획팀", "밸류에이션팀", "리서치팀", "임대차팀", "시설팀",
        "재무팀", "인사팀", "법무팀", "IT팀", "경영지원팀", "WPR팀",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn positions() -> Vec<String> {
    [
        "사원", "대리", "과장", "차장", "부장", "이사", "상무", "전무", "부사장", "사장",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_document::{division_doc_ids, Division};
    use std::collections::HashSet;

    fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id: {id}");
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        assert_unique_ids(requests().iter().map(|r| r.id.as_str()));
        assert_unique_ids(users().iter().map(|u| u.id.as_str()));
        assert_unique_ids(supply_items().iter().map(|s| s.id.as_str()));
        assert_unique_ids(manuals().iter().map(|m| m.id.as_str()));
        assert_unique_ids(faqs().iter().map(|f| f.id.as_str()));
        assert_unique_ids(notifications().iter().map(|n| n.id.as_str()));
        assert_unique_ids(facility_tickets().iter().map(|t| t.id.as_str()));
    }

    #[test]
    fn granted_doc_ids_exist_in_their_division_catalog() {
        for user in permission_users() {
            for division in Division::all() {
                let catalog = division_doc_ids(division);
                for doc_id in user.perms.get(division) {
                    assert!(
                        catalog.contains(&doc_id.as_str()),
                        "{}: unknown {} doc id {doc_id}",
                        user.name,
                        division.key(),
                    );
                }
            }
        }
    }

    #[test]
    fn supply_categories_cover_every_item() {
        let categories = supply_categories();
        for item in supply_items() {
            assert!(categories.contains(&item.category), "{}", item.category);
        }
    }

    #[test]
    fn manual_categories_cover_every_manual() {
        let categories = manual_categories();
        for manual in manuals() {
            assert!(categories.contains(&manual.category), "{}", manual.category);
        }
    }

    #[test]
    fn current_user_is_the_admin_account() {
        assert!(CURRENT_USER.role.is_admin());
        assert_eq!(CURRENT_USER.id, "u001");
        assert_eq!(users()[0].id, CURRENT_USER.id);
    }
}
