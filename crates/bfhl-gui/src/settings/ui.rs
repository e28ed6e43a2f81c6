//! Settings window UI implementation.
//!
//! Edits a pending copy of the settings; changes land only on Apply.

use eframe::egui::{self, RichText};

use super::Settings;
use crate::theme::spacing;

/// Result of showing the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsResult {
    /// Keep the window open.
    Open,
    /// Apply changes and close.
    Apply,
    /// Cancel changes and close.
    Cancel,
}

/// Settings window state.
#[derive(Default)]
pub struct SettingsWindow;

impl SettingsWindow {
    /// Show the settings window.
    pub fn show(&mut self, ctx: &egui::Context, pending: &mut Settings) -> SettingsResult {
        let mut result = SettingsResult::Open;
        let mut open = true;

        egui::Window::new(format!("{} Settings", egui_phosphor::regular::GEAR))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label(RichText::new("General").strong());
                ui.add_space(spacing::SM);
                ui.checkbox(&mut pending.general.dark_mode, "Dark mode");

                ui.add_space(spacing::MD);
                ui.separator();
                ui.add_space(spacing::SM);

                ui.label(RichText::new("Connection").strong());
                ui.add_space(spacing::SM);
                ui.horizontal(|ui| {
                    ui.label("Endpoint URL:");
                    ui.text_edit_singleline(&mut pending.connection.endpoint_url);
                });
                ui.label(
                    RichText::new(format!(
                        "Submissions go to {}",
                        pending.client_config().submit_url()
                    ))
                    .weak()
                    .small(),
                );

                ui.add_space(spacing::MD);
                ui.horizontal(|ui| {
                    if ui.button("Apply").clicked() {
                        result = SettingsResult::Apply;
                    }
                    if ui.button("Cancel").clicked() {
                        result = SettingsResult::Cancel;
                    }
                });
            });

        // Closing the window discards the pending copy
        if !open {
            result = SettingsResult::Cancel;
        }

        result
    }
}
