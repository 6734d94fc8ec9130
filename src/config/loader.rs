//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the HR API
//! credentials from the environment and the local file settings from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, ReportResult};

use super::types::{BambooHrConfig, ENV_PREFIX, ReportSettings};

/// Loads report configuration.
///
/// # Example
///
/// ```no_run
/// use workday_report::config::ConfigLoader;
///
/// let settings = ConfigLoader::load_settings(Some("./report.yaml"))?;
/// let credentials = ConfigLoader::bamboohr_from_env()?;
/// println!("Reading org chart from {}", settings.org_chart_json.display());
/// # Ok::<(), workday_report::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the settings file, or the defaults when no path is given.
    ///
    /// An empty file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the given file cannot be read, or
    /// `ConfigParseError` if it is not valid settings YAML.
    pub fn load_settings<P: AsRef<Path>>(path: Option<P>) -> ReportResult<ReportSettings> {
        let Some(path) = path else {
            return Ok(ReportSettings::default());
        };
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(ReportSettings::default());
        }

        let settings = serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path_str, "Loaded settings file");
        Ok(settings)
    }

    /// Reads the `BAMBOOHR_*` credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingEnvVar` naming the first missing or empty variable.
    pub fn bamboohr_from_env() -> ReportResult<BambooHrConfig> {
        Self::bamboohr_from_vars(std::env::vars())
    }

    /// Reads the `BAMBOOHR_*` credentials from the given variables.
    ///
    /// # Example
    ///
    /// ```
    /// use workday_report::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::bamboohr_from_vars(vec![
    ///     ("BAMBOOHR_SUBDOMAIN".to_string(), "acme".to_string()),
    ///     ("BAMBOOHR_API_KEY".to_string(), "key".to_string()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(config.subdomain, "acme");
    /// assert_eq!(config.base_url(), "https://api.bamboohr.com/api/gateway.php");
    /// ```
    pub fn bamboohr_from_vars<I>(vars: I) -> ReportResult<BambooHrConfig>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: BambooHrConfig = envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| match e {
                envy::Error::MissingValue(field) => ReportError::MissingEnvVar {
                    name: format!("{}{}", ENV_PREFIX, field.to_uppercase()),
                },
                other => ReportError::ConfigParseError {
                    path: "environment".to_string(),
                    message: other.to_string(),
                },
            })?;

        for (name, value) in [("SUBDOMAIN", &config.subdomain), ("API_KEY", &config.api_key)] {
            if value.trim().is_empty() {
                return Err(ReportError::MissingEnvVar {
                    name: format!("{ENV_PREFIX}{name}"),
                });
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// CF-001: no settings path gives defaults
    #[test]
    fn test_load_settings_without_path_is_default() {
        let settings = ConfigLoader::load_settings(None::<&str>).unwrap();
        assert_eq!(settings, ReportSettings::default());
        assert_eq!(settings.exclude_file, PathBuf::from("remove_people.csv"));
    }

    /// CF-002: settings file overrides selected fields
    #[test]
    fn test_load_settings_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        fs::write(
            &path,
            "org_chart_csv: data/org.csv\ndefault_ignore:\n  - Bob\n  - Carol\n",
        )
        .unwrap();

        let settings = ConfigLoader::load_settings(Some(&path)).unwrap();
        assert_eq!(settings.org_chart_csv, PathBuf::from("data/org.csv"));
        assert_eq!(settings.org_chart_json, PathBuf::from("employees.json"));
        assert_eq!(settings.default_ignore, vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_load_settings_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(
            ConfigLoader::load_settings(Some(&path)).unwrap(),
            ReportSettings::default()
        );
    }

    #[test]
    fn test_load_settings_missing_file_returns_config_not_found() {
        match ConfigLoader::load_settings(Some("/nonexistent/report.yaml")) {
            Err(ReportError::ConfigNotFound { path }) => {
                assert!(path.contains("report.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_settings_unknown_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        fs::write(&path, "org_chart: employees.json\n").unwrap();
        assert!(matches!(
            ConfigLoader::load_settings(Some(&path)),
            Err(ReportError::ConfigParseError { .. })
        ));
    }

    /// CF-003: credentials read with the BAMBOOHR_ prefix
    #[test]
    fn test_bamboohr_from_vars() {
        let config = ConfigLoader::bamboohr_from_vars(vars(&[
            ("BAMBOOHR_SUBDOMAIN", "acme"),
            ("BAMBOOHR_API_KEY", "key"),
            ("BAMBOOHR_BASE_URL", "http://localhost:9000"),
            ("UNRELATED", "value"),
        ]))
        .unwrap();
        assert_eq!(config.subdomain, "acme");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    /// CF-004: missing key is reported by variable name
    #[test]
    fn test_bamboohr_missing_api_key() {
        match ConfigLoader::bamboohr_from_vars(vars(&[("BAMBOOHR_SUBDOMAIN", "acme")])) {
            Err(ReportError::MissingEnvVar { name }) => assert_eq!(name, "BAMBOOHR_API_KEY"),
            other => panic!("Expected MissingEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_bamboohr_empty_subdomain_is_missing() {
        match ConfigLoader::bamboohr_from_vars(vars(&[
            ("BAMBOOHR_SUBDOMAIN", " "),
            ("BAMBOOHR_API_KEY", "key"),
        ])) {
            Err(ReportError::MissingEnvVar { name }) => assert_eq!(name, "BAMBOOHR_SUBDOMAIN"),
            other => panic!("Expected MissingEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = ConfigLoader::bamboohr_from_vars(vars(&[
            ("BAMBOOHR_SUBDOMAIN", "acme"),
            ("BAMBOOHR_API_KEY", "super-secret"),
        ]))
        .unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
