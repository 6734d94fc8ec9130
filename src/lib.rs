//! Work-Day Report
//!
//! This crate builds a weekly attendance report for everyone under a given
//! manager: it walks the org chart, pulls approved leave and company
//! holidays from BambooHR, and counts each person's net working days per
//! week.

#![warn(missing_docs)]

pub mod calculation;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod org_chart;
pub mod report;
