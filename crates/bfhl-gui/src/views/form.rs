//! Submission form view.
//!
//! JSON payload editor, file attachment row, and the submit control. The
//! response section renders below once a submission has succeeded.

use egui::{RichText, Ui};

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::ResponseView;

/// Actions the form view hands back to the app.
#[derive(Default)]
pub struct FormActions {
    /// The user pressed Submit.
    pub submit: bool,
    /// The user asked for the settings window.
    pub open_settings: bool,
}

/// Submission form view.
pub struct FormView;

impl FormView {
    /// Render the form page.
    ///
    /// Returns the actions for the app to run after borrowing ends.
    pub fn show(ui: &mut Ui, state: &mut AppState) -> FormActions {
        let mut actions = FormActions::default();

        ui.add_space(spacing::MD);

        ui.horizontal(|ui| {
            ui.heading(RichText::new("BFHL Studio").size(24.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Settings", egui_phosphor::regular::GEAR))
                    .clicked()
                {
                    actions.open_settings = true;
                }
            });
        });
        ui.label(RichText::new("Submit a JSON payload for classification").weak());

        ui.add_space(spacing::MD);

        ui.add(
            egui::TextEdit::multiline(&mut state.form.json_input)
                .hint_text(r#"Enter JSON (e.g., {"data": ["A", "C", "z"]})"#)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );

        ui.add_space(spacing::SM);

        // Attachment row
        ui.horizontal(|ui| {
            if ui
                .button(format!(
                    "{} Attach File",
                    egui_phosphor::regular::PAPERCLIP
                ))
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    tracing::info!("Selected attachment: {:?}", path);
                    state.form.set_attachment(Some(path));
                }
            }

            if let Some(path) = state.form.attachment.clone() {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("attachment");
                ui.label(RichText::new(name).weak());
                if ui
                    .small_button(format!("{} Clear", egui_phosphor::regular::X))
                    .clicked()
                {
                    state.form.set_attachment(None);
                }
            }
        });

        ui.add_space(spacing::MD);

        // Submit control, disabled while a request is running
        ui.horizontal(|ui| {
            ui.add_enabled_ui(state.form.can_submit(), |ui| {
                if ui
                    .button(
                        RichText::new(format!(
                            "{} Submit",
                            egui_phosphor::regular::PAPER_PLANE_TILT
                        ))
                        .size(16.0),
                    )
                    .clicked()
                {
                    actions.submit = true;
                }
            });
            if state.form.in_flight() {
                ui.label(RichText::new("Submitting...").weak());
            }
        });

        if let Some(error) = state.form.error() {
            ui.add_space(spacing::SM);
            ui.label(RichText::new(error).color(colors::ERROR));
        }

        if state.form.response().is_some() {
            ui.add_space(spacing::MD);
            ui.separator();
            ui.add_space(spacing::SM);
            ResponseView::show(ui, &mut state.form);
        }

        actions
    }
}
