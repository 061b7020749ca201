//! Collection period status constants and window rules.
//!
//! A collection period is the year+quarter interval during which order
//! submissions are accepted. The window rule here is the single source of
//! truth for "may an order be created right now"; the repository layer
//! mirrors it in SQL for the transactional gate check.

use chrono::NaiveDate;

/// Period has been announced but collection has not started.
pub const PERIOD_UPCOMING: &str = "upcoming";

/// Period is accepting order submissions.
pub const PERIOD_OPEN: &str = "open";

/// Period is closed; its adjudicated orders are locked.
pub const PERIOD_CLOSED: &str = "closed";

/// All valid period statuses.
pub const VALID_PERIOD_STATUSES: &[&str] = &[PERIOD_UPCOMING, PERIOD_OPEN, PERIOD_CLOSED];

/// Whether a period accepts submissions on `today`.
///
/// The period must be open and `today` must fall inside the collection
/// window. An unset end date means the window is unbounded on the right.
pub fn is_collection_open(
    status: &str,
    collection_start: NaiveDate,
    collection_end: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    status == PERIOD_OPEN
        && collection_start <= today
        && collection_end.is_none_or(|end| today <= end)
}

/// First and last day of the given calendar quarter.
///
/// Returns `None` for a quarter outside `1..=4`.
pub fn quarter_bounds(year: i32, quarter: i16) -> Option<(NaiveDate, NaiveDate)> {
    let (start_month, end_month, end_day) = match quarter {
        1 => (1, 3, 31),
        2 => (4, 6, 30),
        3 => (7, 9, 30),
        4 => (10, 12, 31),
        _ => return None,
    };
    let start = NaiveDate::from_ymd_opt(year, start_month, 1)?;
    let end = NaiveDate::from_ymd_opt(year, end_month, end_day)?;
    Some((start, end))
}

/// Human-readable period label, e.g. `Q1 2024`.
pub fn quarter_label(year: i32, quarter: i16) -> String {
    format!("Q{quarter} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_period_inside_window_accepts() {
        assert!(is_collection_open(
            PERIOD_OPEN,
            date(2024, 1, 1),
            Some(date(2024, 3, 31)),
            date(2024, 2, 15),
        ));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let start = date(2024, 1, 1);
        let end = Some(date(2024, 3, 31));
        assert!(is_collection_open(PERIOD_OPEN, start, end, start));
        assert!(is_collection_open(PERIOD_OPEN, start, end, end.unwrap()));
    }

    #[test]
    fn test_unset_end_date_means_unbounded() {
        assert!(is_collection_open(
            PERIOD_OPEN,
            date(2024, 1, 1),
            None,
            date(2031, 12, 31),
        ));
    }

    #[test]
    fn test_before_start_rejects() {
        assert!(!is_collection_open(
            PERIOD_OPEN,
            date(2024, 1, 10),
            None,
            date(2024, 1, 9),
        ));
    }

    #[test]
    fn test_after_end_rejects() {
        assert!(!is_collection_open(
            PERIOD_OPEN,
            date(2024, 1, 1),
            Some(date(2024, 3, 31)),
            date(2024, 4, 1),
        ));
    }

    #[test]
    fn test_closed_and_upcoming_reject_regardless_of_window() {
        let today = date(2024, 2, 15);
        assert!(!is_collection_open(
            PERIOD_CLOSED,
            date(2024, 1, 1),
            None,
            today
        ));
        assert!(!is_collection_open(
            PERIOD_UPCOMING,
            date(2024, 1, 1),
            None,
            today
        ));
    }

    #[test]
    fn test_quarter_bounds() {
        assert_eq!(
            quarter_bounds(2024, 1),
            Some((date(2024, 1, 1), date(2024, 3, 31)))
        );
        assert_eq!(
            quarter_bounds(2024, 2),
            Some((date(2024, 4, 1), date(2024, 6, 30)))
        );
        assert_eq!(
            quarter_bounds(2024, 3),
            Some((date(2024, 7, 1), date(2024, 9, 30)))
        );
        assert_eq!(
            quarter_bounds(2024, 4),
            Some((date(2024, 10, 1), date(2024, 12, 31)))
        );
    }

    #[test]
    fn test_quarter_bounds_rejects_bad_quarter() {
        assert_eq!(quarter_bounds(2024, 0), None);
        assert_eq!(quarter_bounds(2024, 5), None);
    }

    #[test]
    fn test_quarter_label() {
        assert_eq!(quarter_label(2024, 1), "Q1 2024");
    }
}
