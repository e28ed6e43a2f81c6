//! Background submit service.
//!
//! Runs the network call on a worker thread so the UI stays responsive. The
//! result is handed back over the app's channel and the UI thread is woken
//! with a repaint request; the app drains the channel each frame.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use bfhl_client::{Attachment, ClientConfig, SubmitClient};
use bfhl_core::{Payload, SubmitResponse};

/// Outcome of a finished submit request.
///
/// Errors are already flattened into the user-facing message.
pub struct SubmitOutcome {
    pub result: Result<SubmitResponse, String>,
}

/// Spawn a submit request on a background thread.
pub fn spawn_submit(
    ctx: egui::Context,
    sender: Sender<SubmitOutcome>,
    config: ClientConfig,
    payload: Payload,
    attachment_path: Option<PathBuf>,
) {
    thread::spawn(move || {
        let result = run_submit(&config, &payload, attachment_path.as_deref());
        let _ = sender.send(SubmitOutcome { result });
        ctx.request_repaint();
    });
}

fn run_submit(
    config: &ClientConfig,
    payload: &Payload,
    attachment_path: Option<&Path>,
) -> Result<SubmitResponse, String> {
    let attachment = match attachment_path {
        Some(path) => Some(Attachment::from_path(path).map_err(|e| {
            tracing::warn!("Failed to read attachment {:?}: {}", path, e);
            e.user_message()
        })?),
        None => None,
    };

    let client = SubmitClient::new(config.clone()).map_err(|e| e.user_message())?;
    client.submit(payload, attachment).map_err(|e| {
        tracing::warn!("Submit failed: {}", e);
        e.user_message()
    })
}
