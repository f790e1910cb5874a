//! Field matching for list filters
//!
//! Matching over `serde_json::Value` fields, no type coercion beyond the
//! documented integer parse of the `age` query parameter.

use serde_json::Value;

/// Case-insensitive substring match of `needle` against a string field.
///
/// Missing or non-string fields never match.
pub fn substring_match(field: Option<&Value>, needle: &str) -> bool {
    match field {
        Some(Value::String(s)) => s.to_lowercase().contains(&needle.to_lowercase()),
        _ => false,
    }
}

/// Numeric equality of a field against a query value parsed as an integer.
///
/// A non-numeric query value matches nothing. Comparison is numeric, so a
/// stored `30.0` matches query `30`.
pub fn age_match(field: Option<&Value>, query: &str) -> bool {
    let wanted = match query.trim().parse::<i64>() {
        Ok(n) => n as f64,
        Err(_) => return false,
    };

    match field {
        Some(Value::Number(n)) => n.as_f64() == Some(wanted),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_substring_is_case_insensitive() {
        let field = json!("France");
        assert!(substring_match(Some(&field), "fr"));
        assert!(substring_match(Some(&field), "ANCE"));
        assert!(substring_match(Some(&field), "France"));
        assert!(!substring_match(Some(&field), "Germany"));
    }

    #[test]
    fn test_substring_matches_anywhere() {
        let field = json!("France");
        assert!(substring_match(Some(&field), "ance"));
    }

    #[test]
    fn test_substring_missing_or_non_string_never_matches() {
        assert!(!substring_match(None, "fr"));
        assert!(!substring_match(Some(&json!(42)), "fr"));
        assert!(!substring_match(Some(&json!(null)), "fr"));
    }

    #[test]
    fn test_age_exact_equality() {
        let field = json!(30);
        assert!(age_match(Some(&field), "30"));
        assert!(!age_match(Some(&field), "31"));
    }

    #[test]
    fn test_age_numeric_comparison_across_int_and_float() {
        let field = json!(30.0);
        assert!(age_match(Some(&field), "30"));

        let field = json!(30.5);
        assert!(!age_match(Some(&field), "30"));
    }

    #[test]
    fn test_non_numeric_query_matches_nothing() {
        let field = json!(30);
        assert!(!age_match(Some(&field), "abc"));
        assert!(!age_match(Some(&field), ""));
    }

    #[test]
    fn test_age_missing_field_never_matches() {
        assert!(!age_match(None, "30"));
        assert!(!age_match(Some(&json!("30")), "30"));
    }
}
