//! Response model and rendering rules.
//!
//! The full decoded response is stored as-is, so fields beyond the ones
//! rendered today stay available. Section lookups use normalized filter
//! keys; missing or non-array sections render as the no-data placeholder.

use serde_json::Value;

use crate::payload::value_text;

/// Placeholder shown for a selected section with no data.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Placeholder shown for absent file metadata.
pub const NOT_AVAILABLE: &str = "N/A";

/// A stored endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    value: Value,
}

impl SubmitResponse {
    /// Wrap a decoded response body.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Look up a field by normalized key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// The full decoded response, unrecognized fields included.
    pub fn raw(&self) -> &Value {
        &self.value
    }

    /// Rendered list entries for a normalized section key.
    ///
    /// Missing keys and non-array values yield an empty list; callers render
    /// the empty case as [`NO_DATA_PLACEHOLDER`].
    pub fn section_items(&self, key: &str) -> Vec<String> {
        match self.value.get(key).and_then(Value::as_array) {
            Some(items) => items.iter().map(value_text).collect(),
            None => Vec::new(),
        }
    }

    /// File metadata derived from the response.
    pub fn file_report(&self) -> FileReport {
        FileReport {
            valid: self
                .get("file_valid")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            mime_type: self
                .get("file_mime_type")
                .and_then(Value::as_str)
                .map(str::to_owned),
            size_kb: self.get("file_size_kb").and_then(Value::as_f64),
        }
    }
}

/// File metadata block of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub valid: bool,
    pub mime_type: Option<String>,
    pub size_kb: Option<f64>,
}

impl FileReport {
    /// "Yes"/"No" rendering of the validity flag.
    pub fn valid_label(&self) -> &'static str {
        if self.valid { "Yes" } else { "No" }
    }

    /// MIME type, or "N/A" when absent.
    pub fn mime_type_label(&self) -> String {
        self.mime_type
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Size in KB to two decimal places; absent and zero sizes both read
    /// "N/A".
    pub fn size_kb_label(&self) -> String {
        match self.size_kb {
            Some(kb) if kb != 0.0 => format!("{kb:.2}"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> SubmitResponse {
        SubmitResponse::new(json!({
            "alphabets": ["A", "C"],
            "numbers": [],
            "file_valid": true,
            "file_mime_type": "text/plain",
            "file_size_kb": 2.5,
            "is_success": true,
        }))
    }

    #[test]
    fn test_section_items_for_populated_section() {
        let response = sample_response();
        assert_eq!(response.section_items("alphabets"), ["A", "C"]);
    }

    #[test]
    fn test_section_items_for_empty_section() {
        let response = sample_response();
        assert!(response.section_items("numbers").is_empty());
    }

    #[test]
    fn test_section_items_for_missing_section() {
        let response = sample_response();
        assert!(
            response
                .section_items("highest_lowercase_alphabet")
                .is_empty()
        );
    }

    #[test]
    fn test_section_items_for_non_array_field() {
        let response = sample_response();
        assert!(response.section_items("file_valid").is_empty());
    }

    #[test]
    fn test_unrecognized_fields_are_preserved() {
        let response = sample_response();
        assert_eq!(response.get("is_success"), Some(&json!(true)));
    }

    #[test]
    fn test_file_report_fields() {
        let report = sample_response().file_report();
        assert!(report.valid);
        assert_eq!(report.valid_label(), "Yes");
        assert_eq!(report.mime_type_label(), "text/plain");
        assert_eq!(report.size_kb_label(), "2.50");
    }

    #[test]
    fn test_file_report_defaults_when_absent() {
        let report = SubmitResponse::new(json!({})).file_report();
        assert!(!report.valid);
        assert_eq!(report.valid_label(), "No");
        assert_eq!(report.mime_type_label(), "N/A");
        assert_eq!(report.size_kb_label(), "N/A");
    }

    #[test]
    fn test_file_size_zero_reads_not_available() {
        let report = SubmitResponse::new(json!({"file_size_kb": 0})).file_report();
        assert_eq!(report.size_kb_label(), "N/A");
    }

    #[test]
    fn test_non_object_response_has_no_sections() {
        let response = SubmitResponse::new(json!("unexpected"));
        assert!(response.section_items("alphabets").is_empty());
        assert!(!response.file_report().valid);
    }

    #[test]
    fn test_numeric_section_entries_are_stringified() {
        let response = SubmitResponse::new(json!({"numbers": [1, 334, 4]}));
        assert_eq!(response.section_items("numbers"), ["1", "334", "4"]);
    }
}
