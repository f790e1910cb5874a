//! Result sorting for list queries
//!
//! Only one sort key is supported: ascending by `age`. The sort is stable,
//! so records with equal ages keep their relative filtered order.

use std::cmp::Ordering;

use serde_json::Value;

/// Sorts records ascending by their `age` field, stably.
pub fn sort_by_age(records: &mut [Value]) {
    records.sort_by(|a, b| {
        let a_age = a.get("age").and_then(Value::as_f64).unwrap_or(0.0);
        let b_age = b.get("age").and_then(Value::as_f64).unwrap_or(0.0);
        a_age.partial_cmp(&b_age).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_ascending_by_age() {
        let mut records = vec![
            json!({"name": "c", "age": 30}),
            json!({"name": "a", "age": 20}),
            json!({"name": "b", "age": 25}),
        ];

        sort_by_age(&mut records);

        assert_eq!(records[0]["name"], "a");
        assert_eq!(records[1]["name"], "b");
        assert_eq!(records[2]["name"], "c");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut records = vec![
            json!({"name": "first", "age": 25}),
            json!({"name": "second", "age": 25}),
            json!({"name": "third", "age": 25}),
        ];

        sort_by_age(&mut records);

        assert_eq!(records[0]["name"], "first");
        assert_eq!(records[1]["name"], "second");
        assert_eq!(records[2]["name"], "third");
    }

    #[test]
    fn test_sort_handles_float_ages() {
        let mut records = vec![
            json!({"name": "b", "age": 20.5}),
            json!({"name": "a", "age": 20.1}),
        ];

        sort_by_age(&mut records);

        assert_eq!(records[0]["name"], "a");
    }
}
