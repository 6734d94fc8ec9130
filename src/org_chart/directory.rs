//! In-memory org chart directory.
//!
//! Answers the two questions the reporting tree resolver asks: "who is this
//! name" and "who reports directly to this person".

use std::collections::HashMap;

use tracing::debug;

use crate::models::Person;

/// Read-only view of an organization hierarchy.
pub trait Directory {
    /// Finds a person by display name.
    fn lookup(&self, name: &str) -> Option<&Person>;

    /// Returns the people whose supervisor is `person`.
    fn direct_reports(&self, person: &Person) -> Vec<&Person>;
}

/// An org chart built once from normalized records.
///
/// Each person's supervisor is resolved by `supervisor_id` when present,
/// falling back to `supervisor_name`. References to unknown people and
/// self-references are dropped, leaving that person as a root.
///
/// When two records share a name, [`Directory::lookup`] returns the first.
///
/// # Example
///
/// ```
/// use workday_report::models::Person;
/// use workday_report::org_chart::{Directory, OrgChart};
///
/// let chart = OrgChart::new(vec![
///     Person::new("1", "Alice"),
///     Person::new("2", "Bob").with_supervisor_id("1"),
///     Person::new("3", "Carol").with_supervisor_name("Alice"),
/// ]);
///
/// let alice = chart.lookup("Alice").unwrap();
/// let names: Vec<&str> = chart.direct_reports(alice).iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["Bob", "Carol"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrgChart {
    people: Vec<Person>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    reports: HashMap<usize, Vec<usize>>,
}

impl OrgChart {
    /// Builds the directory and its supervisor index.
    pub fn new(people: Vec<Person>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for (index, person) in people.iter().enumerate() {
            by_id.entry(person.id.clone()).or_insert(index);
            by_name.entry(person.name.clone()).or_insert(index);
        }

        let mut reports: HashMap<usize, Vec<usize>> = HashMap::new();
        for (index, person) in people.iter().enumerate() {
            let supervisor = person
                .supervisor_id
                .as_ref()
                .and_then(|id| by_id.get(id))
                .or_else(|| {
                    person
                        .supervisor_name
                        .as_ref()
                        .and_then(|name| by_name.get(name))
                });

            match supervisor {
                Some(&supervisor) if supervisor != index => {
                    reports.entry(supervisor).or_default().push(index);
                }
                Some(_) => debug!(id = %person.id, "Ignoring self-referencing supervisor"),
                None => {}
            }
        }

        Self {
            people,
            by_id,
            by_name,
            reports,
        }
    }

    /// Returns every person in the chart, in load order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the number of people in the chart.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the chart has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Directory for OrgChart {
    fn lookup(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name).map(|&index| &self.people[index])
    }

    fn direct_reports(&self, person: &Person) -> Vec<&Person> {
        self.by_id
            .get(&person.id)
            .and_then(|index| self.reports.get(index))
            .map(|children| children.iter().map(|&i| &self.people[i]).collect())
            .unwrap_or_default()
    }
}
