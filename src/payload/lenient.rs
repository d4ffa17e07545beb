//! Field readers that never fail on shape.
//!
//! The payload comes out of a scraping pipeline, so any field may hold the
//! wrong JSON type. These readers map whatever is there onto `Option`/empty
//! instead of rejecting the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings pass through, numbers and booleans are stringified, anything else is absent.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// JSON numbers and numeric strings. Non-finite results are absent.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

pub fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// A nested object that does not match `T` is treated as absent.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Keeps the entries of an array that match `T` and drops the rest.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "number")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let p = record(json!({}));
        assert_eq!(p.label, None);
        assert_eq!(p.amount, None);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn wrong_types_do_not_fail_the_record() {
        let p = record(json!({ "label": [1, 2], "amount": {"x": 1}, "tags": "nope" }));
        assert_eq!(p.label, None);
        assert_eq!(p.amount, None);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn numbers_and_numeric_strings_are_read() {
        assert_eq!(record(json!({ "amount": 4.5 })).amount, Some(4.5));
        assert_eq!(record(json!({ "amount": " 1200 " })).amount, Some(1200.0));
        assert_eq!(record(json!({ "amount": "n/a" })).amount, None);
        assert_eq!(record(json!({ "label": 7 })).label.as_deref(), Some("7"));
    }

    #[test]
    fn list_keeps_only_matching_entries() {
        let p = record(json!({ "tags": ["pool", 3, "beach", null] }));
        assert_eq!(p.tags, vec!["pool".to_string(), "beach".to_string()]);
    }
}
