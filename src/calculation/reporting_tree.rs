//! Reporting tree resolution.
//!
//! This module flattens the org chart below a named manager into the set of
//! people a report covers.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{ReportError, ReportResult};
use crate::models::Person;
use crate::org_chart::Directory;

/// Collects a person and everyone who reports to them, directly or not.
///
/// The walk uses an explicit stack and a visited set keyed by person id,
/// so shared reporting lines yield each person once and a cycle in the
/// org data terminates instead of recursing forever.
///
/// Any report whose name is in `ignore` is skipped together with their
/// entire subtree, at every depth. The root itself is always included.
///
/// # Arguments
///
/// * `directory` - The org chart to walk
/// * `root_name` - Name of the manager at the top of the report
/// * `ignore` - Names whose subtrees are pruned
///
/// # Returns
///
/// The root followed by its descendants in depth-first discovery order.
///
/// # Errors
///
/// Returns `PersonNotFound` if `root_name` is not in the directory.
///
/// # Example
///
/// ```
/// use workday_report::calculation::resolve_reporting_tree;
/// use workday_report::models::Person;
/// use workday_report::org_chart::OrgChart;
///
/// let chart = OrgChart::new(vec![
///     Person::new("1", "Alice"),
///     Person::new("2", "Bob").with_supervisor_id("1"),
///     Person::new("3", "Carol").with_supervisor_id("1"),
///     Person::new("4", "Dan").with_supervisor_id("3"),
/// ]);
///
/// let people = resolve_reporting_tree(&chart, "Alice", &["Carol".to_string()]).unwrap();
/// let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["Alice", "Bob"]);
/// ```
pub fn resolve_reporting_tree<D>(
    directory: &D,
    root_name: &str,
    ignore: &[String],
) -> ReportResult<Vec<Person>>
where
    D: Directory + ?Sized,
{
    let root = directory
        .lookup(root_name)
        .ok_or_else(|| ReportError::PersonNotFound {
            name: root_name.to_string(),
        })?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut resolved = Vec::new();
    let mut stack = vec![root];

    while let Some(person) = stack.pop() {
        if !visited.insert(person.id.as_str()) {
            debug!(id = %person.id, name = %person.name, "Already visited, skipping");
            continue;
        }
        resolved.push(person.clone());

        let reports = directory.direct_reports(person);
        for report in reports.into_iter().rev() {
            if ignore.iter().any(|name| *name == report.name) {
                debug!(name = %report.name, "Ignoring subtree");
                continue;
            }
            stack.push(report);
        }
    }

    info!(root = %root_name, people = resolved.len(), "Resolved reporting tree");
    Ok(resolved)
}
