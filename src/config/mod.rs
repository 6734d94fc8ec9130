//! Configuration loading and management for the work-day report.
//!
//! HR API credentials come from `BAMBOOHR_*` environment variables (a
//! `.env` file is honoured by the binary). Local file locations come from an
//! optional YAML settings file and default to the current directory.
//!
//! # Example
//!
//! ```no_run
//! use workday_report::config::ConfigLoader;
//!
//! let credentials = ConfigLoader::bamboohr_from_env().unwrap();
//! println!("Reporting for {}", credentials.subdomain);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BambooHrConfig, DEFAULT_BASE_URL, ENV_PREFIX, ReportSettings};
