//! Report generation pipeline.
//!
//! Resolves the people once, then fetches and computes each week in
//! chronological order. Any failure aborts the whole run; nothing computed
//! for earlier weeks is returned.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{compute_work_days, remove_excluded, resolve_reporting_tree};
use crate::client::TimeOffSource;
use crate::error::{ReportError, ReportResult};
use crate::models::{Person, Report, ReportPeriod, Timeframe, beginning_of_week};
use crate::org_chart::Directory;

/// Parameters of one report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Name of the manager at the top of the report.
    pub under_user: String,
    /// Names pruned with their whole subtree during resolution.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Names removed individually after resolution.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Start of the first week.
    pub start_date: NaiveDate,
    /// Number of consecutive weeks.
    pub weeks: u32,
}

impl ReportRequest {
    /// Returns the weekly timeframes covered, in chronological order.
    ///
    /// # Errors
    ///
    /// Returns `DateOutOfRange` if the weeks run past the supported calendar.
    pub fn timeframes(&self) -> ReportResult<Vec<Timeframe>> {
        Timeframe::consecutive_weeks(self.start_date, self.weeks)
    }
}

/// Checks the report root supplied on the command line.
///
/// # Example
///
/// ```
/// use workday_report::report::under_user_from_input;
///
/// assert_eq!(under_user_from_input(Some(" Alice ")).unwrap(), "Alice");
/// assert!(under_user_from_input(None).is_err());
/// ```
///
/// # Errors
///
/// Returns `MissingArgument` if the name is absent or blank.
pub fn under_user_from_input(input: Option<&str>) -> ReportResult<String> {
    match input.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ReportError::MissingArgument {
            name: "under-user".to_string(),
        }),
    }
}

/// Works out the first reporting week's start from optional user input.
///
/// The input (`YYYY-MM-DD`) or, when absent, `today` is moved back to the
/// Monday of its week. The resulting week must fit in the supported
/// calendar.
///
/// # Example
///
/// ```
/// use workday_report::report::week_start_from_input;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(
///     week_start_from_input(Some("2024-01-04"), today).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
/// );
/// assert_eq!(
///     week_start_from_input(None, today).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
/// );
/// ```
///
/// # Errors
///
/// Returns `InvalidDate` if the input is not a calendar date, or
/// `DateOutOfRange` if its week falls at the edge of the calendar.
pub fn week_start_from_input(input: Option<&str>, today: NaiveDate) -> ReportResult<NaiveDate> {
    let date = match input {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
            ReportError::InvalidDate {
                value: value.to_string(),
            }
        })?,
        None => today,
    };
    let start = beginning_of_week(date)?;
    Timeframe::week_starting(start)?;
    Ok(start)
}

/// Resolves the report's people: the reporting tree minus the exclude list.
///
/// # Errors
///
/// Returns `PersonNotFound` if the root is not in the directory.
pub fn resolve_people<D>(directory: &D, request: &ReportRequest) -> ReportResult<Vec<Person>>
where
    D: Directory + ?Sized,
{
    let people = resolve_reporting_tree(directory, &request.under_user, &request.ignore)?;
    Ok(remove_excluded(people, &request.exclude))
}

/// Builds the full report.
///
/// The TimeOff source is called once per week, sequentially, and each
/// week's work days are computed over the same set of people.
///
/// # Errors
///
/// Propagates `PersonNotFound` from resolution, `DateOutOfRange` from the
/// week arithmetic, and any error from the TimeOff source. All of these
/// except upstream errors are raised before the first call.
pub async fn generate_report<D, S>(
    directory: &D,
    source: &S,
    request: &ReportRequest,
) -> ReportResult<Report>
where
    D: Directory + ?Sized,
    S: TimeOffSource + ?Sized,
{
    let people = resolve_people(directory, request)?;
    let timeframes = request.timeframes()?;
    info!(
        root = %request.under_user,
        people = people.len(),
        weeks = request.weeks,
        "Generating report"
    );

    let mut report = Report::new();
    for timeframe in timeframes {
        let leave = source.whos_out(timeframe.start, timeframe.finish).await?;
        let work_days = compute_work_days(&people, &leave, &timeframe);
        info!(
            timeframe = %timeframe,
            leave_entries = leave.len(),
            "Computed work days"
        );
        report.push(ReportPeriod {
            timeframe,
            work_days,
        });
    }

    Ok(report)
}
