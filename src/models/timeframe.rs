//! Reporting week model.
//!
//! This module contains the [`Timeframe`] type: the five calendar day window
//! that one report column (or row, when transposed) covers.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Number of calendar days after `start` that `finish` falls on.
pub const TIMEFRAME_SPAN_DAYS: i64 = 4;

/// Number of days between consecutive reporting weeks.
pub const DAYS_PER_WEEK: i64 = 7;

/// Represents one reporting week.
///
/// A timeframe always spans five calendar days, `start` through
/// `start + 4` inclusive. By convention `start` is a Monday, but nothing
/// enforces that.
///
/// # Example
///
/// ```
/// use workday_report::models::Timeframe;
/// use chrono::NaiveDate;
///
/// let week = Timeframe::week_starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
///
/// assert_eq!(week.finish, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
/// assert!(week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
/// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timeframe {
    /// The first day of the window (inclusive).
    pub start: NaiveDate,
    /// The last day of the window (inclusive).
    pub finish: NaiveDate,
}

impl Timeframe {
    /// Creates the five-day window beginning on `start`.
    ///
    /// # Errors
    ///
    /// Returns `DateOutOfRange` if the window ends past the last
    /// representable date.
    pub fn week_starting(start: NaiveDate) -> ReportResult<Self> {
        let finish = start
            .checked_add_signed(Duration::days(TIMEFRAME_SPAN_DAYS))
            .ok_or(ReportError::DateOutOfRange { start, weeks: 1 })?;
        Ok(Self { start, finish })
    }

    /// Creates `count` consecutive weekly windows, the first beginning on `start`.
    ///
    /// Week `i` begins `7 * i` days after `start`. The result is in
    /// chronological order.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_report::models::Timeframe;
    /// use chrono::NaiveDate;
    ///
    /// let weeks =
    ///     Timeframe::consecutive_weeks(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 3).unwrap();
    /// let starts: Vec<String> = weeks.iter().map(|w| w.start.to_string()).collect();
    ///
    /// assert_eq!(starts, vec!["2024-01-01", "2024-01-08", "2024-01-15"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DateOutOfRange` if the last week ends past the last
    /// representable date. Nothing is built in that case.
    pub fn consecutive_weeks(start: NaiveDate, count: u32) -> ReportResult<Vec<Self>> {
        let out_of_range = || ReportError::DateOutOfRange {
            start,
            weeks: count,
        };
        let week_start = |i: i64| {
            start
                .checked_add_signed(Duration::days(i * DAYS_PER_WEEK))
                .ok_or_else(out_of_range)
        };

        if count > 0 {
            let last = week_start(i64::from(count) - 1)?;
            last.checked_add_signed(Duration::days(TIMEFRAME_SPAN_DAYS))
                .ok_or_else(out_of_range)?;
        }

        (0..i64::from(count))
            .map(|i| {
                let week = week_start(i)?;
                Self::week_starting(week).map_err(|_| out_of_range())
            })
            .collect()
    }

    /// Checks if a given date falls within this timeframe, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.finish
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.finish)
    }
}

/// Returns the Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use workday_report::models::beginning_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-01-04 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// assert_eq!(
///     beginning_of_week(thursday).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
/// );
/// ```
///
/// # Errors
///
/// Returns `DateOutOfRange` if that Monday falls before the first
/// representable date.
pub fn beginning_of_week(date: NaiveDate) -> ReportResult<NaiveDate> {
    date.checked_sub_signed(Duration::days(i64::from(
        date.weekday().num_days_from_monday(),
    )))
    .ok_or(ReportError::DateOutOfRange {
        start: date,
        weeks: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// TF-001: finish is four days after start
    #[test]
    fn test_week_starting_spans_five_days() {
        let week = Timeframe::week_starting(make_date("2024-01-01")).unwrap();
        assert_eq!(week.start, make_date("2024-01-01"));
        assert_eq!(week.finish, make_date("2024-01-05"));
    }

    /// TF-002: windows cross month and year boundaries
    #[test]
    fn test_week_starting_crosses_year_boundary() {
        let week = Timeframe::week_starting(make_date("2024-12-30")).unwrap();
        assert_eq!(week.finish, make_date("2025-01-03"));
    }

    /// TF-003: consecutive weeks step by seven days
    #[test]
    fn test_consecutive_weeks_are_chronological() {
        let weeks = Timeframe::consecutive_weeks(make_date("2024-01-29"), 2).unwrap();
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].start, make_date("2024-01-29"));
        assert_eq!(weeks[1].start, make_date("2024-02-05"));
        assert_eq!(weeks[1].finish, make_date("2024-02-09"));
    }

    #[test]
    fn test_consecutive_weeks_zero_is_empty() {
        assert!(Timeframe::consecutive_weeks(make_date("2024-01-01"), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let week = Timeframe::week_starting(make_date("2024-01-01")).unwrap();
        assert!(week.contains_date(week.start));
        assert!(week.contains_date(week.finish));
        assert!(!week.contains_date(make_date("2023-12-31")));
    }

    #[test]
    fn test_beginning_of_week_for_monday_is_itself() {
        assert_eq!(
            beginning_of_week(make_date("2024-01-08")).unwrap(),
            make_date("2024-01-08")
        );
    }

    #[test]
    fn test_beginning_of_week_for_sunday_is_previous_monday() {
        assert_eq!(
            beginning_of_week(make_date("2024-01-07")).unwrap(),
            make_date("2024-01-01")
        );
    }

    /// TF-004: a window past the end of the calendar is an error
    #[test]
    fn test_week_starting_at_calendar_end_is_out_of_range() {
        match Timeframe::week_starting(NaiveDate::MAX) {
            Err(ReportError::DateOutOfRange { start, weeks }) => {
                assert_eq!(start, NaiveDate::MAX);
                assert_eq!(weeks, 1);
            }
            other => panic!("Expected DateOutOfRange, got {:?}", other),
        }
    }

    /// TF-005: too many weeks fails up front instead of overflowing
    #[test]
    fn test_consecutive_weeks_past_calendar_end_is_out_of_range() {
        match Timeframe::consecutive_weeks(make_date("2024-01-01"), 20_000_000) {
            Err(ReportError::DateOutOfRange { start, weeks }) => {
                assert_eq!(start, make_date("2024-01-01"));
                assert_eq!(weeks, 20_000_000);
            }
            other => panic!("Expected DateOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_consecutive_weeks_with_max_count_is_out_of_range() {
        assert!(Timeframe::consecutive_weeks(make_date("2024-01-01"), u32::MAX).is_err());
    }

    #[test]
    fn test_beginning_of_week_before_calendar_start_is_out_of_range() {
        // The first representable date is not a Monday
        let first = NaiveDate::MIN;
        if first.weekday() != chrono::Weekday::Mon {
            assert!(matches!(
                beginning_of_week(first),
                Err(ReportError::DateOutOfRange { .. })
            ));
        } else {
            assert_eq!(beginning_of_week(first).unwrap(), first);
        }
    }

    #[test]
    fn test_display_shows_range() {
        let week = Timeframe::week_starting(make_date("2024-01-01")).unwrap();
        assert_eq!(week.to_string(), "2024-01-01..2024-01-05");
    }

    #[test]
    fn test_serialize_timeframe() {
        let week = Timeframe::week_starting(make_date("2024-01-01")).unwrap();
        let json = serde_json::to_string(&week).unwrap();
        assert_eq!(json, r#"{"start":"2024-01-01","finish":"2024-01-05"}"#);
    }
}
