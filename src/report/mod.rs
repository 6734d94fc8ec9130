//! Report generation and output for the work-day report.
//!
//! [`generate_report`] drives the pipeline (resolve, then fetch and compute
//! per week); [`render_report`] turns the result into CSV text.

mod pipeline;
mod render;

pub use pipeline::{
    ReportRequest, generate_report, resolve_people, under_user_from_input, week_start_from_input,
};
pub use render::{
    CORNER_LABEL, Orientation, WorkDayMatrix, render_normal, render_report, render_transposed,
};
