//! Organization hierarchy for the work-day report.
//!
//! This module loads the employee directory export (JSON or CSV) and exposes
//! it through the [`Directory`] trait used by the reporting tree resolver.
//!
//! # Example
//!
//! ```
//! use workday_report::org_chart::{Directory, OrgChart, OrgChartFormat, parse_org_chart};
//!
//! let people = parse_org_chart(
//!     r#"[{"id": "1", "name": "Alice"}, {"id": "2", "name": "Bob", "supervisorId": "1"}]"#,
//!     OrgChartFormat::Json,
//! )
//! .unwrap();
//! let chart = OrgChart::new(people);
//!
//! assert_eq!(chart.lookup("Bob").unwrap().id, "2");
//! ```

mod directory;
mod loader;

pub use directory::{Directory, OrgChart};
pub use loader::{OrgChartFormat, discover_org_chart, load_org_chart, parse_org_chart};
