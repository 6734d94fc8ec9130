//! Calculation logic for the work-day report.
//!
//! This module contains the reporting tree resolver, the post-resolution
//! exclude list, and the per-week work-day calculation including the
//! company holiday deduction.

mod exclusions;
mod reporting_tree;
mod work_days;

pub use exclusions::{load_exclude_list, parse_exclude_list, remove_excluded};
pub use reporting_tree::resolve_reporting_tree;
pub use work_days::{BASE_WORK_DAYS, calculate_work_days, compute_work_days, deduct_holidays};
