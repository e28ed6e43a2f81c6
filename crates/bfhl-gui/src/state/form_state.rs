//! Submission form state.

use std::path::PathBuf;

use bfhl_core::{FilterSelection, Payload, SubmitResponse};

/// State owned by the submission form.
///
/// `response` and `error` are never both set: each submit attempt clears
/// both before parsing, and finished requests land through
/// [`FormState::apply_result`], which stores exactly one of the two.
#[derive(Default)]
pub struct FormState {
    /// Raw JSON text, edited verbatim. Validated only on submit.
    pub json_input: String,
    /// Path of the attached file, if any.
    pub attachment: Option<PathBuf>,
    /// Selected filter options in toggle order.
    pub filters: FilterSelection,
    /// Last successful response.
    response: Option<SubmitResponse>,
    /// Last error message.
    error: Option<String>,
    /// True while a request runs on the background thread.
    in_flight: bool,
}

impl FormState {
    /// The stored response, if the last attempt succeeded.
    pub fn response(&self) -> Option<&SubmitResponse> {
        self.response.as_ref()
    }

    /// The stored error message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is currently running.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// A new submit can start when no request is currently running.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Run the local validation step of a submit attempt.
    ///
    /// Clears any previous outcome, then parses the JSON input. On failure
    /// the parse error message is stored and `None` is returned — no request
    /// may be started.
    pub fn prepare_submit(&mut self) -> Option<Payload> {
        self.error = None;
        self.response = None;

        match Payload::parse(&self.json_input) {
            Ok(payload) => Some(payload),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Mark the background request as started.
    pub fn mark_in_flight(&mut self) {
        self.in_flight = true;
    }

    /// Apply the outcome of a finished background request.
    pub fn apply_result(&mut self, result: Result<SubmitResponse, String>) {
        self.in_flight = false;
        match result {
            Ok(response) => {
                self.error = None;
                self.response = Some(response);
            }
            Err(message) => {
                self.response = None;
                self.error = Some(message);
            }
        }
    }

    /// Set or clear the attachment.
    pub fn set_attachment(&mut self, path: Option<PathBuf>) {
        self.attachment = path;
    }

    /// File info is rendered only when a response exists and a file was
    /// attached.
    pub fn shows_file_info(&self) -> bool {
        self.response.is_some() && self.attachment.is_some()
    }
}
