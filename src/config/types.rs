//! Configuration type definitions.
//!
//! These types hold the environment credentials for the HR API and the
//! optional YAML settings that locate the local input files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::org_chart::OrgChartFormat;

/// Default BambooHR API gateway.
pub const DEFAULT_BASE_URL: &str = "https://api.bamboohr.com/api/gateway.php";

/// Prefix of every HR API environment variable.
pub const ENV_PREFIX: &str = "BAMBOOHR_";

/// Credentials for the BambooHR API, read from `BAMBOOHR_*` variables.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BambooHrConfig {
    /// Company subdomain (`BAMBOOHR_SUBDOMAIN`).
    pub subdomain: String,
    /// API key (`BAMBOOHR_API_KEY`).
    pub api_key: String,
    /// Gateway override (`BAMBOOHR_BASE_URL`), mainly for testing.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl BambooHrConfig {
    /// Returns the gateway URL, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl std::fmt::Debug for BambooHrConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BambooHrConfig")
            .field("subdomain", &self.subdomain)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Local file settings, optionally loaded from YAML.
///
/// Every field has a default, so an empty file (or no file) is valid.
///
/// # Example
///
/// ```
/// use workday_report::config::ReportSettings;
///
/// let settings: ReportSettings = serde_yaml::from_str("default_ignore: [Bob]").unwrap();
///
/// assert_eq!(settings.default_ignore, vec!["Bob"]);
/// assert_eq!(settings.org_chart_json.to_str(), Some("employees.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    /// JSON org chart export, checked first.
    pub org_chart_json: PathBuf,
    /// CSV org chart export, checked when the JSON file is absent.
    pub org_chart_csv: PathBuf,
    /// Comma-separated names removed after resolution.
    pub exclude_file: PathBuf,
    /// Names always pruned (with their subtrees) during resolution.
    pub default_ignore: Vec<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            org_chart_json: PathBuf::from("employees.json"),
            org_chart_csv: PathBuf::from("employees.csv"),
            exclude_file: PathBuf::from("remove_people.csv"),
            default_ignore: Vec::new(),
        }
    }
}

impl ReportSettings {
    /// Org chart files to try, in order of preference.
    pub fn org_chart_candidates(&self) -> Vec<(PathBuf, OrgChartFormat)> {
        vec![
            (self.org_chart_json.clone(), OrgChartFormat::Json),
            (self.org_chart_csv.clone(), OrgChartFormat::Csv),
        ]
    }
}
