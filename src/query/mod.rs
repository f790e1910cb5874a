//! Query engine for list requests
//!
//! Applies the supported filters in a fixed order (name, age, country), then
//! the optional age sort. A filter only applies when its parameter is
//! present and non-empty. The engine never errors; an unmatched query yields
//! an empty result.

mod filters;
mod sorter;

use serde::Deserialize;
use serde_json::{Map, Value};

pub use filters::{age_match, substring_match};
pub use sorter::sort_by_age;

/// Query parameters accepted by the list endpoint.
///
/// All values arrive as strings; `age` is parsed as an integer at match
/// time. Empty values are treated as absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl ListQuery {
    /// The `id` parameter, if present and non-empty
    pub fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    /// Filters and sorts the collection, in collection iteration order.
    pub fn apply(&self, collection: &Map<String, Value>) -> Vec<Value> {
        let mut results: Vec<Value> = collection
            .values()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        if self.sort.as_deref() == Some("age") {
            sort_by_age(&mut results);
        }

        results
    }

    fn matches(&self, record: &Value) -> bool {
        if let Some(name) = non_empty(self.name.as_deref()) {
            if !substring_match(record.get("name"), name) {
                return false;
            }
        }
        if let Some(age) = non_empty(self.age.as_deref()) {
            if !age_match(record.get("age"), age) {
                return false;
            }
        }
        if let Some(country) = non_empty(self.country.as_deref()) {
            if !substring_match(record.get("country"), country) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
