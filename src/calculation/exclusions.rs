//! Post-resolution exclude list.
//!
//! Unlike the resolver's ignore list, excluding a name removes only that
//! person from the report; their reports stay.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::Person;

/// Splits a comma-separated exclude list into trimmed, non-empty names.
///
/// # Example
///
/// ```
/// use workday_report::calculation::parse_exclude_list;
///
/// assert_eq!(parse_exclude_list("Bob, Carol,\n"), vec!["Bob", "Carol"]);
/// ```
pub fn parse_exclude_list(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the exclude list file.
///
/// A missing file is an empty list.
///
/// # Errors
///
/// Returns `Io` if the file exists but cannot be read.
pub fn load_exclude_list<P: AsRef<Path>>(path: P) -> ReportResult<Vec<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => {
            let names = parse_exclude_list(&content);
            debug!(path = %path.display(), count = names.len(), "Loaded exclude list");
            Ok(names)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Exclude list not found, excluding nobody");
            Ok(Vec::new())
        }
        Err(source) => Err(ReportError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Removes every person whose name is on the exclude list.
///
/// # Example
///
/// ```
/// use workday_report::calculation::remove_excluded;
/// use workday_report::models::Person;
///
/// let people = vec![Person::new("1", "Alice"), Person::new("2", "Bob")];
/// let kept = remove_excluded(people, &["Bob".to_string()]);
///
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].name, "Alice");
/// ```
pub fn remove_excluded(mut people: Vec<Person>, exclude: &[String]) -> Vec<Person> {
    let before = people.len();
    people.retain(|person| !exclude.contains(&person.name));
    if people.len() != before {
        debug!(removed = before - people.len(), "Removed excluded people");
    }
    people
}
