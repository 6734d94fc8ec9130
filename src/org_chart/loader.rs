//! Org chart file loading.
//!
//! Reads the employee directory export from JSON or CSV and normalizes every
//! record into a [`Person`]. The format is an explicit argument; picking
//! which file to read is done by [`discover_org_chart`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};
use crate::models::Person;

const ID_KEYS: &[&str] = &["id", "employeeId"];
const NAME_KEYS: &[&str] = &["name", "displayName", "fullName"];
const SUPERVISOR_ID_KEYS: &[&str] =
    &["supervisor_id", "supervisorId", "supervisorEId", "manager_id"];
const SUPERVISOR_NAME_KEYS: &[&str] = &["supervisor", "manager"];

/// The file format of an org chart export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgChartFormat {
    /// A JSON array of records, or an object with an `employees` array.
    Json,
    /// A CSV file with a header row.
    Csv,
}

impl std::fmt::Display for OrgChartFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrgChartFormat::Json => write!(f, "json"),
            OrgChartFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Records(Vec<Map<String, Value>>),
    Directory { employees: Vec<Map<String, Value>> },
}

/// Picks the first candidate file that exists.
///
/// Candidates are checked in order, so the caller decides precedence
/// (JSON before CSV by default).
///
/// # Errors
///
/// Returns `OrgChartNotFound` listing every candidate if none exist.
pub fn discover_org_chart(
    candidates: &[(PathBuf, OrgChartFormat)],
) -> ReportResult<(PathBuf, OrgChartFormat)> {
    for (path, format) in candidates {
        if path.is_file() {
            debug!(path = %path.display(), %format, "Found org chart");
            return Ok((path.clone(), *format));
        }
    }

    Err(ReportError::OrgChartNotFound {
        searched: candidates
            .iter()
            .map(|(path, _)| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Loads and normalizes an org chart file.
///
/// # Errors
///
/// Returns `OrgChartParseError` if the file cannot be read, is not valid
/// in the given format, or a record has no usable id or name.
pub fn load_org_chart<P: AsRef<Path>>(
    path: P,
    format: OrgChartFormat,
) -> ReportResult<Vec<Person>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| ReportError::OrgChartParseError {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let people = parse_org_chart(&content, format).map_err(|message| {
        ReportError::OrgChartParseError {
            path: path_str.clone(),
            message,
        }
    })?;

    info!(path = %path_str, %format, people = people.len(), "Loaded org chart");
    Ok(people)
}

/// Parses org chart content already in memory.
///
/// # Example
///
/// ```
/// use workday_report::org_chart::{OrgChartFormat, parse_org_chart};
///
/// let csv = "id,name,supervisorId,department\n1,Alice,,Ops\n2,Bob,1,Ops\n";
/// let people = parse_org_chart(csv, OrgChartFormat::Csv).unwrap();
///
/// assert_eq!(people[1].supervisor_id.as_deref(), Some("1"));
/// assert_eq!(people[1].fields["department"], "Ops");
/// ```
pub fn parse_org_chart(content: &str, format: OrgChartFormat) -> Result<Vec<Person>, String> {
    let records = match format {
        OrgChartFormat::Json => json_records(content)?,
        OrgChartFormat::Csv => csv_records(content)?,
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            normalize_record(record).map_err(|e| format!("record {}: {}", index + 1, e))
        })
        .collect()
}

fn json_records(content: &str) -> Result<Vec<Map<String, Value>>, String> {
    let document: JsonDocument = serde_json::from_str(content).map_err(|e| {
        format!("expected an array of employees or an object with an \"employees\" array: {e}")
    })?;

    Ok(match document {
        JsonDocument::Records(records) => records,
        JsonDocument::Directory { employees } => employees,
    })
}

fn csv_records(content: &str) -> Result<Vec<Map<String, Value>>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| e.to_string())?.clone();

    reader
        .records()
        .map(|row| {
            let row = row.map_err(|e| e.to_string())?;
            Ok(headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .collect())
        })
        .collect()
}

/// Turns one raw record into a [`Person`], moving recognized keys out of
/// the pass-through fields.
fn normalize_record(mut record: Map<String, Value>) -> Result<Person, String> {
    let id = take_first(&mut record, ID_KEYS).ok_or("missing \"id\"")?;

    let name = match take_first(&mut record, NAME_KEYS) {
        Some(name) => name,
        None => full_name(&record).ok_or("missing \"name\"")?,
    };

    let supervisor_id = take_first(&mut record, SUPERVISOR_ID_KEYS);
    let supervisor_name = take_first(&mut record, SUPERVISOR_NAME_KEYS);

    Ok(Person {
        id,
        name,
        supervisor_id,
        supervisor_name,
        fields: record,
    })
}

/// Removes and returns the first non-empty scalar among `keys`.
fn take_first(record: &mut Map<String, Value>, keys: &[&str]) -> Option<String> {
    let key = keys
        .iter()
        .find(|key| record.get(**key).and_then(scalar_string).is_some())?;
    record.remove(*key).as_ref().and_then(scalar_string)
}

fn full_name(record: &Map<String, Value>) -> Option<String> {
    let first = record.get("firstName").and_then(scalar_string);
    let last = record.get("lastName").and_then(scalar_string);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// OL-001: plain JSON array
    #[test]
    fn test_parse_json_array() {
        let json = r#"[
            {"id": "1", "name": "Alice"},
            {"id": "2", "name": "Bob", "supervisor_id": "1"}
        ]"#;
        let people = parse_org_chart(json, OrgChartFormat::Json).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[1].supervisor_id.as_deref(), Some("1"));
    }

    /// OL-002: directory export wrapped in "employees"
    #[test]
    fn test_parse_json_directory_export() {
        let json = r#"{
            "fields": [],
            "employees": [
                {"id": 10, "displayName": "Alice Jones", "jobTitle": "CTO"},
                {"id": 11, "firstName": "Bob", "lastName": "Lee", "supervisor": "Alice Jones"}
            ]
        }"#;
        let people = parse_org_chart(json, OrgChartFormat::Json).unwrap();
        assert_eq!(people[0].id, "10");
        assert_eq!(people[0].name, "Alice Jones");
        assert_eq!(people[0].fields["jobTitle"], "CTO");
        assert_eq!(people[1].name, "Bob Lee");
        assert_eq!(people[1].supervisor_name.as_deref(), Some("Alice Jones"));
    }

    /// OL-003: CSV with empty supervisor column
    #[test]
    fn test_parse_csv_with_blank_supervisor() {
        let csv = "id,name,supervisor_id\n1,Alice,\n2,Bob,1\n";
        let people = parse_org_chart(csv, OrgChartFormat::Csv).unwrap();
        assert_eq!(people[0].supervisor_id, None);
        assert_eq!(people[1].supervisor_id.as_deref(), Some("1"));
        // the blank column stays behind as a pass-through field
        assert_eq!(people[0].fields["supervisor_id"], "");
    }

    #[test]
    fn test_parse_csv_trims_cells() {
        let csv = "id , name\n 1 , Alice \n";
        let people = parse_org_chart(csv, OrgChartFormat::Csv).unwrap();
        assert_eq!(people[0].id, "1");
        assert_eq!(people[0].name, "Alice");
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let json = r#"[{"name": "Alice"}]"#;
        let err = parse_org_chart(json, OrgChartFormat::Json).unwrap_err();
        assert!(err.contains("record 1"));
        assert!(err.contains("id"));
    }

    #[test]
    fn test_record_without_name_is_rejected() {
        let json = r#"[{"id": "1", "name": "Alice"}, {"id": "2"}]"#;
        let err = parse_org_chart(json, OrgChartFormat::Json).unwrap_err();
        assert!(err.contains("record 2"));
    }

    #[test]
    fn test_json_scalar_document_is_rejected() {
        assert!(parse_org_chart("42", OrgChartFormat::Json).is_err());
    }

    #[test]
    fn test_discover_prefers_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("employees.json");
        let csv_path = dir.path().join("employees.csv");
        fs::write(&csv_path, "id,name\n1,Alice\n").unwrap();

        let candidates = vec![
            (json_path.clone(), OrgChartFormat::Json),
            (csv_path.clone(), OrgChartFormat::Csv),
        ];
        let (path, format) = discover_org_chart(&candidates).unwrap();
        assert_eq!(path, csv_path);
        assert_eq!(format, OrgChartFormat::Csv);

        fs::write(&json_path, "[]").unwrap();
        let (path, format) = discover_org_chart(&candidates).unwrap();
        assert_eq!(path, json_path);
        assert_eq!(format, OrgChartFormat::Json);
    }

    #[test]
    fn test_discover_with_no_files_lists_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![
            (dir.path().join("employees.json"), OrgChartFormat::Json),
            (dir.path().join("employees.csv"), OrgChartFormat::Csv),
        ];
        match discover_org_chart(&candidates) {
            Err(ReportError::OrgChartNotFound { searched }) => {
                assert!(searched.contains("employees.json"));
                assert!(searched.contains("employees.csv"));
            }
            other => panic!("Expected OrgChartNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_org_chart_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "1", "name": "Alice"}}]"#).unwrap();

        let people = load_org_chart(file.path(), OrgChartFormat::Json).unwrap();
        assert_eq!(people.len(), 1);
    }

    #[test]
    fn test_load_org_chart_parse_error_includes_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        match load_org_chart(file.path(), OrgChartFormat::Json) {
            Err(ReportError::OrgChartParseError { path, .. }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected OrgChartParseError, got {:?}", other),
        }
    }
}
