//! CSV rendering of a [`Report`].
//!
//! Both orientations go through the same period-by-person matrix, so they
//! are exact transposes of one another.

use csv::Writer;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::Report;

/// Label of the first header cell in both orientations.
pub const CORNER_LABEL: &str = "date";

/// Which way round the table is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// One row per person, one column per week.
    #[default]
    Normal,
    /// One row per week, one column per person.
    Transposed,
}

/// A report flattened into rows (periods) and columns (people).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDayMatrix<'a> {
    /// Start dates of each period, chronological.
    pub dates: Vec<String>,
    /// Person names, sorted.
    pub names: Vec<&'a str>,
    /// `counts[period][person]`.
    pub counts: Vec<Vec<i32>>,
}

impl<'a> WorkDayMatrix<'a> {
    /// Builds the matrix, checking every period has every person.
    ///
    /// # Errors
    ///
    /// Returns `MissingReportEntry` for the first period lacking a name
    /// that some other period has.
    pub fn from_report(report: &'a Report) -> ReportResult<Self> {
        let names = report.names();
        let mut dates = Vec::with_capacity(report.len());
        let mut counts = Vec::with_capacity(report.len());

        for period in report.periods() {
            let row = names
                .iter()
                .map(|name| {
                    period.work_days.get(*name).copied().ok_or_else(|| {
                        ReportError::MissingReportEntry {
                            name: name.to_string(),
                            date: period.timeframe.start,
                        }
                    })
                })
                .collect::<ReportResult<Vec<i32>>>()?;
            dates.push(period.timeframe.start.to_string());
            counts.push(row);
        }

        Ok(Self {
            dates,
            names,
            counts,
        })
    }
}

/// Renders the report in the requested orientation.
pub fn render_report(report: &Report, orientation: Orientation) -> ReportResult<String> {
    match orientation {
        Orientation::Normal => render_normal(report),
        Orientation::Transposed => render_transposed(report),
    }
}

/// Renders people as rows and weeks as columns.
///
/// # Example
///
/// ```
/// use workday_report::models::{Report, ReportPeriod, Timeframe, WorkDayMap};
/// use workday_report::report::render_normal;
/// use chrono::NaiveDate;
///
/// let report = Report::from(vec![ReportPeriod {
///     timeframe: Timeframe::week_starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///         .unwrap(),
///     work_days: WorkDayMap::from([("Bob".to_string(), 3), ("Alice".to_string(), 5)]),
/// }]);
///
/// assert_eq!(render_normal(&report).unwrap(), "date,2024-01-01\nAlice,5\nBob,3\n");
/// ```
pub fn render_normal(report: &Report) -> ReportResult<String> {
    let matrix = WorkDayMatrix::from_report(report)?;
    let mut writer = Writer::from_writer(Vec::new());

    write_row(&mut writer, CORNER_LABEL, matrix.dates.iter().map(String::as_str))?;
    for (column, name) in matrix.names.iter().enumerate() {
        let counts: Vec<String> = matrix
            .counts
            .iter()
            .map(|row| row[column].to_string())
            .collect();
        write_row(&mut writer, name, counts.iter().map(String::as_str))?;
    }

    finish(writer)
}

/// Renders weeks as rows and people as columns.
///
/// # Example
///
/// ```
/// use workday_report::models::{Report, ReportPeriod, Timeframe, WorkDayMap};
/// use workday_report::report::render_transposed;
/// use chrono::NaiveDate;
///
/// let report = Report::from(vec![ReportPeriod {
///     timeframe: Timeframe::week_starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///         .unwrap(),
///     work_days: WorkDayMap::from([("Bob".to_string(), 3), ("Alice".to_string(), 5)]),
/// }]);
///
/// assert_eq!(render_transposed(&report).unwrap(), "date,Alice,Bob\n2024-01-01,5,3\n");
/// ```
pub fn render_transposed(report: &Report) -> ReportResult<String> {
    let matrix = WorkDayMatrix::from_report(report)?;
    let mut writer = Writer::from_writer(Vec::new());

    write_row(&mut writer, CORNER_LABEL, matrix.names.iter().copied())?;
    for (date, row) in matrix.dates.iter().zip(&matrix.counts) {
        let counts: Vec<String> = row.iter().map(i32::to_string).collect();
        write_row(&mut writer, date, counts.iter().map(String::as_str))?;
    }

    finish(writer)
}

fn write_row<'a, I>(
    writer: &mut Writer<Vec<u8>>,
    label: &'a str,
    cells: I,
) -> ReportResult<()>
where
    I: Iterator<Item = &'a str>,
{
    writer
        .write_record(std::iter::once(label).chain(cells))
        .map_err(|e| ReportError::Render {
            message: e.to_string(),
        })
}

fn finish(writer: Writer<Vec<u8>>) -> ReportResult<String> {
    let bytes = writer.into_inner().map_err(|e| ReportError::Render {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| ReportError::Render {
        message: e.to_string(),
    })
}
