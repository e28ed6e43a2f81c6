//! Submit client and multipart request construction.

use std::fs;
use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use bfhl_core::{Payload, SubmitResponse};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// User agent string for submit requests.
const USER_AGENT_VALUE: &str = concat!("bfhl-studio/", env!("CARGO_PKG_VERSION"));

/// A file attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name sent with the `file` multipart part.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read an attachment from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("attachment")
            .to_string();

        Ok(Self { file_name, bytes })
    }
}

/// Blocking client for the classification endpoint.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl SubmitClient {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The endpoint configuration this client submits to.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a payload and optional attachment as one multipart request.
    ///
    /// Non-success statuses and non-JSON bodies are reported as errors; the
    /// decoded body of a successful response is returned as-is.
    pub fn submit(
        &self,
        payload: &Payload,
        attachment: Option<Attachment>,
    ) -> Result<SubmitResponse> {
        let url = self.config.submit_url();
        tracing::debug!(
            "Submitting {} data entries to {} (attachment: {})",
            payload.len(),
            url,
            attachment.is_some()
        );

        let form = build_form(payload, attachment);
        let response = self.client.post(&url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        tracing::debug!("Received response with {} top-level fields", field_count(&value));

        Ok(SubmitResponse::new(value))
    }
}

/// Build the multipart body: one `data[]` text field per payload entry, in
/// payload order, plus the optional binary `file` part.
fn build_form(payload: &Payload, attachment: Option<Attachment>) -> Form {
    let mut form = Form::new();
    for entry in payload.entries() {
        form = form.text("data[]", entry.clone());
    }
    if let Some(attachment) = attachment {
        form = form.part(
            "file",
            Part::bytes(attachment.bytes).file_name(attachment.file_name),
        );
    }
    form
}

fn field_count(value: &serde_json::Value) -> usize {
    value.as_object().map_or(0, serde_json::Map::len)
}
