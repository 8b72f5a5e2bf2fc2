use chrono::{Datelike, NaiveDate};

/// Current calendar date taken from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Dates render in ISO form everywhere, matching the seed data.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Cells of a Sunday-first month grid: leading `None` padding up to the
/// weekday of the 1st, then `Some(day)` for every day of the month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<u32>> = vec![None; lead];
    cells.extend((1..=days_in_month(year, month)).map(Some));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.pred_opt().map(|d| d.day()).unwrap_or(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_is_iso() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        assert_eq!(format_date(d), "2026-02-05");
    }

    #[test]
    fn february_2026_grid_starts_on_a_sunday() {
        let grid = month_grid(2026, 2);
        // 2026-02-01 is a Sunday: no leading padding, 28 day cells.
        assert_eq!(grid.len(), 28);
        assert_eq!(grid.first(), Some(&Some(1)));
        assert_eq!(grid.last(), Some(&Some(28)));
    }

    #[test]
    fn month_grid_pads_to_the_first_weekday() {
        // 2026-01-01 is a Thursday: four leading blanks, 31 days.
        let grid = month_grid(2026, 1);
        assert_eq!(grid.len(), 4 + 31);
        assert!(grid[..4].iter().all(|c| c.is_none()));
        assert_eq!(grid[4], Some(1));
    }

    #[test]
    fn december_grid_handles_the_year_boundary() {
        let grid = month_grid(2025, 12);
        assert_eq!(grid.iter().flatten().count(), 31);
    }
}
