use crate::shared::{contains_ci, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Published work manual. Admins create, edit and delete these from the
/// management console; everyone else reads them on the manuals page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manual {
    pub id: String,
    pub title: String,
    pub category: String,
    pub views: u32,
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
}

impl Manual {
    /// Admin-created manual: fresh id, zero views, stamped with today.
    pub fn new(title: &str, category: &str, today: NaiveDate) -> Self {
        Manual {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            category: category.into(),
            views: 0,
            updated_at: today,
        }
    }
}

impl Searchable for Manual {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.title, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manual_starts_unviewed_with_a_unique_id() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        let a = Manual::new("연차 사용 안내", "인사", today);
        let b = Manual::new("연차 사용 안내", "인사", today);
        assert_eq!(a.views, 0);
        assert_eq!(a.updated_at, today);
        assert_ne!(a.id, b.id);
    }
}
