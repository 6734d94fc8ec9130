//! Person model.
//!
//! A [`Person`] is one normalized org chart record. Identity is the `id`;
//! the `name` is what reports, ignore lists and exclude lists match on.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents an employee in the org chart.
///
/// Two people are equal when their ids are equal, regardless of name or
/// pass-through fields. This is what deduplication during reporting tree
/// resolution relies on.
///
/// # Example
///
/// ```
/// use workday_report::models::Person;
///
/// let alice = Person::new("1", "Alice");
/// let bob = Person::new("2", "Bob").with_supervisor_id("1");
///
/// assert_eq!(bob.supervisor_id.as_deref(), Some("1"));
/// assert_ne!(alice, bob);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, matched against `LeaveEntry::employee_id`.
    pub id: String,
    /// Display name used as the report key.
    pub name: String,
    /// Id of the person this one reports to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    /// Name of the person this one reports to, used when no id is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    /// Every other field of the source record, untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl Person {
    /// Creates a person with no supervisor and no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supervisor_id: None,
            supervisor_name: None,
            fields: Map::new(),
        }
    }

    /// Sets the supervisor by id.
    pub fn with_supervisor_id(mut self, supervisor_id: impl Into<String>) -> Self {
        self.supervisor_id = Some(supervisor_id.into());
        self
    }

    /// Sets the supervisor by name.
    pub fn with_supervisor_name(mut self, supervisor_name: impl Into<String>) -> Self {
        self.supervisor_name = Some(supervisor_name.into());
        self
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
