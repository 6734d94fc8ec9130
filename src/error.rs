//! Error types for the work-day report.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can abort a report run. There are no partial
//! results: any of these errors ends the run without output.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the work-day report.
///
/// Variants fall into four groups:
/// - configuration problems (missing arguments, environment, files),
/// - lookup failures (the root person is not in the org chart),
/// - upstream failures (the HR API call failed or returned garbage),
/// - data shape failures (periods disagree on who is in the report).
///
/// # Example
///
/// ```
/// use workday_report::error::ReportError;
///
/// let error = ReportError::PersonNotFound {
///     name: "Alice".to_string(),
/// };
/// assert_eq!(error.to_string(), "Person not found in org chart: Alice");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required command line argument was not supplied.
    #[error("Missing argument --{name}")]
    MissingArgument {
        /// The long name of the argument.
        name: String,
    },

    /// A required environment variable was not set.
    #[error("Missing environment variable: {name}")]
    MissingEnvVar {
        /// The environment variable name.
        name: String,
    },

    /// None of the candidate org chart files exist.
    #[error("Unable to find org chart to read (looked for: {searched})")]
    OrgChartNotFound {
        /// The paths that were checked, comma separated.
        searched: String,
    },

    /// An org chart file exists but could not be read or parsed.
    #[error("Failed to parse org chart '{path}': {message}")]
    OrgChartParseError {
        /// The path to the org chart file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An explicitly requested settings file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date argument could not be parsed.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The reporting weeks requested run past the supported calendar.
    #[error("Reporting weeks starting {start} run past the supported date range ({weeks} week(s))")]
    DateOutOfRange {
        /// Start of the first requested week.
        start: NaiveDate,
        /// Number of weeks requested.
        weeks: u32,
    },

    /// The report root was not found in the org chart.
    #[error("Person not found in org chart: {name}")]
    PersonNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The HTTP request to the HR API failed before a response arrived.
    #[error("HR API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The HR API answered with a non-success status.
    #[error("HR API returned {status}: {message}")]
    UpstreamStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body or a summary of it.
        message: String,
    },

    /// The HR API answered with a body that could not be understood.
    #[error("Unexpected HR API payload: {message}")]
    UpstreamPayload {
        /// A description of what was wrong with the payload.
        message: String,
    },

    /// A period in the report has no entry for a person present in another period.
    #[error("No work-day entry for '{name}' in the period starting {date}")]
    MissingReportEntry {
        /// The person's name.
        name: String,
        /// The start date of the period missing the entry.
        date: NaiveDate,
    },

    /// A local file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The path being read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV output could not be written.
    #[error("Failed to render report: {message}")]
    Render {
        /// A description of the writer error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
