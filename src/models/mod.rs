//! Core data models for the work-day report.
//!
//! This module contains all the domain models used throughout the crate.

mod leave;
mod person;
mod report;
mod timeframe;

pub use leave::{LeaveEntry, LeaveKind};
pub use person::Person;
pub use report::{Report, ReportPeriod, WorkDayMap};
pub use timeframe::{DAYS_PER_WEEK, TIMEFRAME_SPAN_DAYS, Timeframe, beginning_of_week};
