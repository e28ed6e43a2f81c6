//! Tests for the submit lifecycle and response rendering rules.

use std::path::PathBuf;

use serde_json::json;

use bfhl_core::{FilterOption, SubmitResponse};
use bfhl_gui::state::FormState;

fn canned_response() -> SubmitResponse {
    SubmitResponse::new(json!({
        "alphabets": ["A", "C"],
        "numbers": [],
        "file_valid": true,
        "file_mime_type": "text/plain",
        "file_size_kb": 2.5,
    }))
}

#[test]
fn test_invalid_json_sets_fixed_error_without_request() {
    let mut form = FormState::default();
    form.json_input = r#"{"data": ["A" "C"]}"#.to_string();

    // prepare_submit returning None means the app starts no request
    assert!(form.prepare_submit().is_none());
    assert_eq!(form.error(), Some("Invalid JSON format"));
    assert!(form.response().is_none());
    assert!(form.can_submit());
}

#[test]
fn test_request_entries_match_data_order() {
    let mut form = FormState::default();
    form.json_input = r#"{"data": ["M", "1", "334", "4", "B"]}"#.to_string();

    let payload = form.prepare_submit().unwrap();
    assert_eq!(payload.entries(), ["M", "1", "334", "4", "B"]);
}

#[test]
fn test_filtered_rendering_follows_toggle_order() {
    let mut form = FormState::default();
    form.filters.toggle(FilterOption::Alphabets, true);
    form.filters.toggle(FilterOption::Numbers, true);
    form.apply_result(Ok(canned_response()));

    let response = form.response().unwrap();
    let rendered: Vec<(FilterOption, Vec<String>)> = form
        .filters
        .iter()
        .map(|option| (option, response.section_items(option.key())))
        .collect();

    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].0, FilterOption::Alphabets);
    assert_eq!(rendered[0].1, ["A", "C"]);
    // Empty section renders as the no-data placeholder
    assert_eq!(rendered[1].0, FilterOption::Numbers);
    assert!(rendered[1].1.is_empty());
}

#[test]
fn test_file_info_hidden_without_attachment() {
    let mut form = FormState::default();
    form.apply_result(Ok(canned_response()));

    assert!(!form.shows_file_info());
}

#[test]
fn test_file_info_shown_with_attachment() {
    let mut form = FormState::default();
    form.set_attachment(Some(PathBuf::from("report.txt")));
    form.apply_result(Ok(canned_response()));

    assert!(form.shows_file_info());
    let report = form.response().unwrap().file_report();
    assert_eq!(report.valid_label(), "Yes");
    assert_eq!(report.mime_type_label(), "text/plain");
    assert_eq!(report.size_kb_label(), "2.50");
}

#[test]
fn test_absent_file_size_renders_not_available() {
    let mut form = FormState::default();
    form.set_attachment(Some(PathBuf::from("report.txt")));
    form.apply_result(Ok(SubmitResponse::new(json!({"file_valid": false}))));

    let report = form.response().unwrap().file_report();
    assert_eq!(report.valid_label(), "No");
    assert_eq!(report.size_kb_label(), "N/A");
}

#[test]
fn test_back_to_back_attempts_keep_state_consistent() {
    let mut form = FormState::default();
    form.json_input = r#"{"data": ["A"]}"#.to_string();
    form.filters.toggle(FilterOption::Alphabets, true);

    // First attempt starts a request
    assert!(form.prepare_submit().is_some());
    form.mark_in_flight();

    // A second submit is blocked while the first is running
    assert!(!form.can_submit());

    // The outcome lands; never both response and error
    form.apply_result(Ok(canned_response()));
    assert!(form.response().is_some());
    assert!(form.error().is_none());
    assert_eq!(form.filters.len(), 1);

    // A failed follow-up replaces the response with the error
    assert!(form.prepare_submit().is_some());
    form.mark_in_flight();
    form.apply_result(Err("network down".to_string()));
    assert!(form.response().is_none());
    assert_eq!(form.error(), Some("network down"));
}
