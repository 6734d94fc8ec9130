//! Leave data sources.
//!
//! The report only needs one thing from the HR system: every leave entry
//! overlapping a date range. [`TimeOffSource`] is that seam; the production
//! implementation is [`BambooHrClient`].

mod bamboohr;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ReportResult;
use crate::models::LeaveEntry;

pub use bamboohr::{BambooHrClient, REQUEST_TIMEOUT_SECS, parse_whos_out};

/// Something that can list who is out between two dates.
#[async_trait]
pub trait TimeOffSource: Send + Sync {
    /// Returns all time off and holiday entries overlapping `start..=finish`.
    async fn whos_out(&self, start: NaiveDate, finish: NaiveDate) -> ReportResult<Vec<LeaveEntry>>;
}
