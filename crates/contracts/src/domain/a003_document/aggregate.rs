use crate::shared::{contains_ci, Searchable};
use crate::system::users::Role;
use serde::{Deserialize, Serialize};

// ============================================================================
// Divisions
// ============================================================================

/// Organizational/legal-entity grouping used to scope document permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Iac,
    Brokerage,
    CreGos,
    Wpr,
}

impl Division {
    pub fn key(&self) -> &'static str {
        match self {
            Division::Iac => "iac",
            Division::Brokerage => "brokerage",
            Division::CreGos => "cre_gos",
            Division::Wpr => "wpr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Division::Iac => "IAC",
            Division::Brokerage => "Brokerage",
            Division::CreGos => "CRE&GOS",
            Division::Wpr => "WPR",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Division::Iac => "Investment Advisory & Capital",
            Division::Brokerage => "Brokerage",
            Division::CreGos => "Corporate Real Estate & GOS",
            Division::Wpr => "Workplace & Portfolio Resources",
        }
    }

    /// Legal entity issuing the division's corporate documents.
    pub fn entity(&self) -> &'static str {
        match self {
            Division::CreGos => "쿠시먼앤드웨이크필드 코리아 (유)",
            Division::Iac => "쿠시먼앤드웨이크필드 코리아 투자자문(주)",
            Division::Brokerage => "쿠시먼앤드웨이크필드 코리아 부동산중개(유)",
            Division::Wpr => "쿠시먼앤드웨이크필드 코리아 (유)",
        }
    }

    pub fn all() -> Vec<Division> {
        vec![
            Division::Iac,
            Division::Brokerage,
            Division::CreGos,
            Division::Wpr,
        ]
    }

    /// Divisions selectable in the request flow. WPR documents go through
    /// the dedicated WPR panel instead.
    pub fn requestable() -> Vec<Division> {
        vec![Division::CreGos, Division::Iac, Division::Brokerage]
    }
}

// ============================================================================
// Document catalogs
// ============================================================================

/// Corporate document issued per legal entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpDoc {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    /// Issued automatically and mailed immediately, no reviewer step.
    pub auto_issued: bool,
}

/// WPR-exclusive governance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WprDoc {
    pub id: &'static str,
    pub name: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
    pub issued: &'static str,
    pub restricted: bool,
}

pub const CORP_DOCS: &[CorpDoc] = &[
    CorpDoc {
        id: "biz_reg",
        name: "사업자등록증",
        summary: "국세청 발급 · 사업자 등록 확인",
        auto_issued: true,
    },
    CorpDoc {
        id: "corp_reg",
        name: "등기부등본",
        summary: "법원 발급 · 법인 등기 전체",
        auto_issued: false,
    },
    CorpDoc {
        id: "seal_cert",
        name: "인감증명서",
        summary: "법원 발급 · 법인 인감 확인용",
        auto_issued: false,
    },
    CorpDoc {
        id: "seal_card",
        name: "사용인감계",
        summary: "사용인감계 발급/재발급",
        auto_issued: false,
    },
];

pub const CRE_DOCS: &[CorpDoc] = &[
    CorpDoc {
        id: "cre_contract",
        name: "CRE 계약서",
        summary: "기업부동산 임대차 계약",
        auto_issued: false,
    },
    CorpDoc {
        id: "cre_report",
        name: "CRE 리포트",
        summary: "부동산 분석 보고서",
        auto_issued: false,
    },
];

pub const GOS_DOCS: &[CorpDoc] = &[
    CorpDoc {
        id: "gos_service",
        name: "GOS 서비스 계약",
        summary: "시설관리 서비스 계약",
        auto_issued: false,
    },
    CorpDoc {
        id: "gos_maintenance",
        name: "GOS 유지보수",
        summary: "시설 유지보수 문서",
        auto_issued: false,
    },
];

pub const WPR_DOCS: &[WprDoc] = &[
    WprDoc {
        id: "wpr_sm_2025",
        name: "사원총회 의사록",
        year: "2025",
        summary: "제23기 정기 사원총회",
        issued: "2025.03.28",
        restricted: false,
    },
    WprDoc {
        id: "wpr_sm_2024",
        name: "사원총회 의사록",
        year: "2024",
        summary: "제22기 정기 사원총회",
        issued: "2024.03.29",
        restricted: false,
    },
    WprDoc {
        id: "wpr_sm_2023",
        name: "사원총회 의사록",
        year: "2023",
        summary: "제21기 정기 사원총회",
        issued: "2023.03.31",
        restricted: false,
    },
    WprDoc {
        id: "wpr_articles",
        name: "정관",
        year: "최신",
        summary: "현행 정관 (최종 개정: 2024.03)",
        issued: "2024.03.29",
        restricted: false,
    },
    WprDoc {
        id: "wpr_shareholder",
        name: "주주명부",
        year: "최신",
        summary: "현행 주주 현황",
        issued: "2025.01.01",
        restricted: true,
    },
    WprDoc {
        id: "wpr_board_2025",
        name: "이사회 의사록",
        year: "2025",
        summary: "정기 이사회",
        issued: "2025.12.15",
        restricted: true,
    },
];

/// The full grantable document-id set for a division.
pub fn division_doc_ids(division: Division) -> Vec<&'static str> {
    match division {
        Division::Wpr => WPR_DOCS.iter().map(|d| d.id).collect(),
        _ => CORP_DOCS.iter().map(|d| d.id).collect(),
    }
}

// ============================================================================
// Permission matrix
// ============================================================================

/// Per-user, per-division set of permitted document ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPermissions {
    pub iac: Vec<String>,
    pub brokerage: Vec<String>,
    pub cre_gos: Vec<String>,
    pub wpr: Vec<String>,
}

impl UserPermissions {
    pub fn get(&self, division: Division) -> &Vec<String> {
        match division {
            Division::Iac => &self.iac,
            Division::Brokerage => &self.brokerage,
            Division::CreGos => &self.cre_gos,
            Division::Wpr => &self.wpr,
        }
    }

    fn get_mut(&mut self, division: Division) -> &mut Vec<String> {
        match division {
            Division::Iac => &mut self.iac,
            Division::Brokerage => &mut self.brokerage,
            Division::CreGos => &mut self.cre_gos,
            Division::Wpr => &mut self.wpr,
        }
    }

    pub fn has(&self, division: Division, doc_id: &str) -> bool {
        self.get(division).iter().any(|id| id == doc_id)
    }

    /// Symmetric difference against a singleton: grants the document when
    /// absent, revokes it when present. Self-inverse.
    pub fn toggle(&mut self, division: Division, doc_id: &str) {
        let set = self.get_mut(division);
        match set.iter().position(|id| id == doc_id) {
            Some(pos) => {
                set.remove(pos);
            }
            None => set.push(doc_id.to_string()),
        }
    }

    /// Replace the division's grants with its full catalog. Idempotent.
    pub fn grant_all(&mut self, division: Division) {
        *self.get_mut(division) = division_doc_ids(division)
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    /// Replace the division's grants with the empty set. Idempotent.
    pub fn revoke_all(&mut self, division: Division) {
        self.get_mut(division).clear();
    }

    /// Total granted documents across every division.
    pub fn total(&self) -> usize {
        self.iac.len() + self.brokerage.len() + self.cre_gos.len() + self.wpr.len()
    }
}

/// Row of the permission-management tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionUser {
    pub id: u32,
    pub name: String,
    pub dept: String,
    /// Display grouping; includes "Back Office" which is not a permission key.
    pub division: String,
    pub role: Role,
    pub perms: UserPermissions,
}

impl Searchable for PermissionUser {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.dept, query)
            || contains_ci(&self.division, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut perms = UserPermissions::default();
        let before = perms.clone();
        perms.toggle(Division::Iac, "biz_reg");
        assert!(perms.has(Division::Iac, "biz_reg"));
        perms.toggle(Division::Iac, "biz_reg");
        assert_eq!(perms, before);
    }

    #[test]
    fn toggle_scopes_to_one_division() {
        let mut perms = UserPermissions::default();
        perms.toggle(Division::Brokerage, "corp_reg");
        assert!(perms.has(Division::Brokerage, "corp_reg"));
        assert!(!perms.has(Division::Iac, "corp_reg"));
        assert!(!perms.has(Division::CreGos, "corp_reg"));
    }

    #[test]
    fn grant_all_then_revoke_all_empties_the_division() {
        let mut perms = UserPermissions::default();
        perms.grant_all(Division::CreGos);
        assert_eq!(perms.cre_gos.len(), CORP_DOCS.len());
        perms.grant_all(Division::CreGos);
        assert_eq!(perms.cre_gos.len(), CORP_DOCS.len());

        perms.revoke_all(Division::CreGos);
        assert!(perms.cre_gos.is_empty());
        perms.revoke_all(Division::CreGos);
        assert!(perms.cre_gos.is_empty());
    }

    #[test]
    fn wpr_grant_all_uses_the_wpr_catalog() {
        let mut perms = UserPermissions::default();
        perms.grant_all(Division::Wpr);
        assert_eq!(perms.wpr.len(), WPR_DOCS.len());
        assert!(perms.has(Division::Wpr, "wpr_board_2025"));
    }

    #[test]
    fn total_counts_across_divisions() {
        let mut perms = UserPermissions::default();
        perms.toggle(Division::Iac, "biz_reg");
        perms.toggle(Division::Wpr, "wpr_articles");
        perms.grant_all(Division::Brokerage);
        assert_eq!(perms.total(), 2 + CORP_DOCS.len());
    }
}
