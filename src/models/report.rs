//! Work-day map and report models.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::Timeframe;

/// Net working days per person name for a single timeframe.
///
/// A `BTreeMap` keeps names sorted, which is the order both report
/// orientations print people in.
pub type WorkDayMap = BTreeMap<String, i32>;

/// The computed work days for one timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The week these counts cover.
    pub timeframe: Timeframe,
    /// Net working days per person.
    pub work_days: WorkDayMap,
}

/// An ordered, append-only collection of report periods.
///
/// # Example
///
/// ```
/// use workday_report::models::{Report, ReportPeriod, Timeframe, WorkDayMap};
/// use chrono::NaiveDate;
///
/// let mut report = Report::new();
/// report.push(ReportPeriod {
///     timeframe: Timeframe::week_starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///         .unwrap(),
///     work_days: WorkDayMap::from([("Alice".to_string(), 5)]),
/// });
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.names(), vec!["Alice"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    periods: Vec<ReportPeriod>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next period.
    pub fn push(&mut self, period: ReportPeriod) {
        self.periods.push(period);
    }

    /// Returns the periods in the order they were added.
    pub fn periods(&self) -> &[ReportPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if no periods have been added.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns every person name appearing in any period, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.periods
            .iter()
            .flat_map(|p| p.work_days.keys())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<ReportPeriod>> for Report {
    fn from(periods: Vec<ReportPeriod>) -> Self {
        Self { periods }
    }
}
