//! Leave entry model.
//!
//! This module contains the [`LeaveEntry`] and [`LeaveKind`] types, deserialized
//! directly from the HR system's "who's out" payload.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Timeframe;

/// The kind of a leave entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Approved time off for a single employee.
    #[serde(alias = "timeOff")]
    TimeOff,
    /// A company-wide holiday; applies to everyone.
    Holiday,
}

/// Represents one approved absence or company holiday.
///
/// The date range is inclusive on both ends. Holidays normally carry no
/// `employee_id`.
///
/// # Example
///
/// ```
/// use workday_report::models::{LeaveEntry, LeaveKind};
///
/// let json = r#"{
///     "id": 1044,
///     "type": "timeOff",
///     "employeeId": 42,
///     "name": "Bob Smith",
///     "start": "2024-01-02",
///     "end": "2024-01-03"
/// }"#;
///
/// let entry: LeaveEntry = serde_json::from_str(json).unwrap();
/// assert_eq!(entry.kind, LeaveKind::TimeOff);
/// assert_eq!(entry.employee_id.as_deref(), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveEntry {
    /// Upstream identifier of the entry.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// The employee this entry belongs to. Absent for holidays.
    #[serde(default, deserialize_with = "string_or_number")]
    pub employee_id: Option<String>,
    /// Employee name or holiday name, as reported upstream.
    #[serde(default)]
    pub name: Option<String>,
    /// First day of the leave (inclusive).
    pub start: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end: NaiveDate,
    /// Whether this is personal time off or a company holiday.
    #[serde(rename = "type")]
    pub kind: LeaveKind,
}

impl LeaveEntry {
    /// Creates a time off entry for one employee.
    pub fn time_off(employee_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: None,
            employee_id: Some(employee_id.into()),
            name: None,
            start,
            end,
            kind: LeaveKind::TimeOff,
        }
    }

    /// Creates a company holiday entry.
    pub fn holiday(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: None,
            employee_id: None,
            name: Some(name.into()),
            start,
            end,
            kind: LeaveKind::Holiday,
        }
    }

    /// Returns true if this is a company holiday.
    pub fn is_holiday(&self) -> bool {
        self.kind == LeaveKind::Holiday
    }

    /// Returns true if this entry belongs to the employee with the given id.
    pub fn belongs_to(&self, person_id: &str) -> bool {
        self.employee_id.as_deref() == Some(person_id)
    }

    /// Counts the weekdays shared by this entry and the timeframe.
    ///
    /// Both ranges are inclusive. Saturdays and Sundays in the overlap are
    /// not counted. Disjoint ranges and inverted entries count zero.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_report::models::{LeaveEntry, Timeframe};
    /// use chrono::NaiveDate;
    ///
    /// let week = Timeframe::week_starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
    /// // Thursday to the following Tuesday
    /// let entry = LeaveEntry::time_off(
    ///     "42",
    ///     NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
    /// );
    ///
    /// assert_eq!(entry.weekdays_within(&week), 2);
    /// ```
    pub fn weekdays_within(&self, timeframe: &Timeframe) -> i32 {
        let first = self.start.max(timeframe.start);
        let last = self.end.min(timeframe.finish);
        if first > last {
            return 0;
        }

        let count = first
            .iter_days()
            .take_while(|date| *date <= last)
            .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .count();

        i32::try_from(count).unwrap_or(i32::MAX)
    }
}

/// Accepts `"42"`, `42`, or `null` for identifier fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {}",
            other
        ))),
    }
}
