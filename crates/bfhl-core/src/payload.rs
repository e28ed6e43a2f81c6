//! Payload parsing and `data[]` entry coercion.

use serde_json::Value;

use crate::error::PayloadError;

/// A parsed submission payload.
///
/// Holds the string form of each element of the payload's `data` array, in
/// the order they appeared. These become the repeated `data[]` multipart
/// fields of the submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    entries: Vec<String>,
}

impl Payload {
    /// Parse raw JSON text into a payload.
    ///
    /// Syntactically invalid input fails with the fixed
    /// "Invalid JSON format" error before any of the structure is examined;
    /// a missing or non-array `data` field fails with its own message.
    pub fn parse(input: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(input).map_err(|_| PayloadError::InvalidJson)?;
        let data = value.get("data").ok_or(PayloadError::MissingData)?;
        let items = data.as_array().ok_or(PayloadError::DataNotArray)?;

        Ok(Self {
            entries: items.iter().map(value_text).collect(),
        })
    }

    /// The `data[]` entries in payload order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// String form of a JSON value as it is sent in a `data[]` field and shown
/// in rendered section lists.
///
/// Strings are taken verbatim; every other value uses its compact JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_preserves_entry_count_and_order() {
        let payload = Payload::parse(r#"{"data": ["A", "C", "z", "1"]}"#).unwrap();
        assert_eq!(payload.len(), 4);
        assert_eq!(payload.entries(), ["A", "C", "z", "1"]);
    }

    #[test]
    fn test_parse_accepts_empty_data() {
        let payload = Payload::parse(r#"{"data": []}"#).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let error = Payload::parse("{not json").unwrap_err();
        assert_eq!(error, PayloadError::InvalidJson);
        assert_eq!(error.to_string(), "Invalid JSON format");
    }

    #[test]
    fn test_parse_rejects_missing_data() {
        let error = Payload::parse(r#"{"other": []}"#).unwrap_err();
        assert_eq!(error, PayloadError::MissingData);
    }

    #[test]
    fn test_parse_rejects_non_array_data() {
        let error = Payload::parse(r#"{"data": "A"}"#).unwrap_err();
        assert_eq!(error, PayloadError::DataNotArray);
    }

    #[test]
    fn test_parse_rejects_non_object_root_without_data() {
        // A bare array parses as JSON but has no `data` field.
        let error = Payload::parse(r#"["A", "C"]"#).unwrap_err();
        assert_eq!(error, PayloadError::MissingData);
    }

    #[test]
    fn test_value_text_coercion() {
        assert_eq!(value_text(&json!("A")), "A");
        assert_eq!(value_text(&json!(1)), "1");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(null)), "null");
        assert_eq!(value_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_mixed_scalar_entries() {
        let payload = Payload::parse(r#"{"data": ["M", 1, true, null]}"#).unwrap();
        assert_eq!(payload.entries(), ["M", "1", "true", "null"]);
    }
}
