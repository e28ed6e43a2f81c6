//! Application-level state.
//!
//! This module contains `AppState`, the root of all state.

use std::sync::mpsc::{Receiver, Sender};

use crate::services::SubmitOutcome;
use crate::settings::Settings;
use crate::settings::ui::SettingsWindow;
use crate::state::FormState;

/// Top-level application state.
pub struct AppState {
    /// Submission form.
    pub form: FormState,
    /// Application settings (persisted).
    pub settings: Settings,
    /// Whether the settings window is open.
    pub settings_open: bool,
    /// Pending settings copy edited by the settings window.
    pub settings_pending: Option<Settings>,
    /// Settings window state.
    pub settings_window: SettingsWindow,
    /// Channel for receiving submit outcomes from background threads.
    pub submit_receiver: Receiver<SubmitOutcome>,
    /// Sender cloned into background submit threads.
    pub submit_sender: Sender<SubmitOutcome>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn new(settings: Settings) -> Self {
        let (submit_sender, submit_receiver) = std::sync::mpsc::channel();
        Self {
            form: FormState::default(),
            settings,
            settings_open: false,
            settings_pending: None,
            settings_window: SettingsWindow::default(),
            submit_receiver,
            submit_sender,
        }
    }

    /// Drain finished submit outcomes into the form.
    ///
    /// Call this each frame; the last outcome wins.
    pub fn poll_submit_outcomes(&mut self) {
        while let Ok(outcome) = self.submit_receiver.try_recv() {
            self.form.apply_result(outcome.result);
        }
    }

    /// Open the settings window with a pending copy to edit.
    pub fn open_settings(&mut self) {
        self.settings_pending = Some(self.settings.clone());
        self.settings_open = true;
    }

    /// Close the settings window, applying the pending copy when requested.
    pub fn close_settings(&mut self, apply: bool) {
        if apply {
            if let Some(pending) = self.settings_pending.take() {
                self.settings = pending;
            }
        }
        self.settings_pending = None;
        self.settings_open = false;
    }
}
