//! Generic list filtering shared by every list page.
//!
//! All pages follow the same pattern: a free-text query matched
//! case-insensitively against the record's searchable fields, combined with
//! an equality filter on a category/status field where a sentinel value
//! ("전체" / "all") selects everything.

/// Types whose records can be matched against a free-text query.
pub trait Searchable {
    /// True when `query` is a case-insensitive substring of one of the
    /// record's designated search fields. An empty query matches everything.
    fn matches_query(&self, query: &str) -> bool;
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter by free-text query only, preserving source order.
pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}

/// Filter by free-text query and a category selection.
///
/// `selection == sentinel` disables the category filter; otherwise only
/// records whose `category_of` value equals the selection pass.
pub fn filter_list<T, F>(
    items: &[T],
    query: &str,
    selection: &str,
    sentinel: &str,
    category_of: F,
) -> Vec<T>
where
    T: Searchable + Clone,
    F: Fn(&T) -> String,
{
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .filter(|item| selection == sentinel || category_of(item) == selection)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        category: String,
    }

    impl Searchable for Row {
        fn matches_query(&self, query: &str) -> bool {
            contains_ci(&self.name, query)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "A4 용지 (박스)".into(),
                category: "소모품".into(),
            },
            Row {
                name: "볼펜 (흑색)".into(),
                category: "필기구".into(),
            },
            Row {
                name: "볼펜 (청색)".into(),
                category: "필기구".into(),
            },
        ]
    }

    #[test]
    fn empty_query_and_sentinel_return_everything() {
        let all = filter_list(&rows(), "", "전체", "전체", |r| r.category.clone());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn query_is_case_insensitive() {
        let hits = search(&rows(), "a4");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "A4 용지 (박스)");
    }

    #[test]
    fn category_selection_restricts_results() {
        let hits = filter_list(&rows(), "볼펜", "필기구", "전체", |r| r.category.clone());
        assert_eq!(hits.len(), 2);
        let none = filter_list(&rows(), "볼펜", "소모품", "전체", |r| r.category.clone());
        assert!(none.is_empty());
    }

    #[test]
    fn source_order_is_preserved() {
        let hits = filter_list(&rows(), "", "필기구", "전체", |r| r.category.clone());
        assert_eq!(hits[0].name, "볼펜 (흑색)");
        assert_eq!(hits[1].name, "볼펜 (청색)");
    }
}
