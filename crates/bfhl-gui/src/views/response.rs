//! Filtered response rendering.
//!
//! Checkbox filter selection, per-section lists, and the file-information
//! block. Sections follow checkbox toggle order, not enumeration order.

use bfhl_core::{FilterOption, NO_DATA_PLACEHOLDER};
use egui::{RichText, Ui};

use crate::state::FormState;
use crate::theme::{colors, spacing};

/// Response section of the form page.
pub struct ResponseView;

impl ResponseView {
    /// Render the filter checkboxes, the filtered sections, and the
    /// file-information block.
    pub fn show(ui: &mut Ui, form: &mut FormState) {
        ui.label(
            RichText::new(format!(
                "{} Select Filters:",
                egui_phosphor::regular::LIST_CHECKS
            ))
            .strong(),
        );
        ui.add_space(spacing::SM);

        ui.horizontal(|ui| {
            for option in FilterOption::all() {
                let mut checked = form.filters.contains(*option);
                if ui.checkbox(&mut checked, option.label()).changed() {
                    form.filters.toggle(*option, checked);
                }
            }
        });

        ui.add_space(spacing::MD);

        let shows_file_info = form.shows_file_info();
        let Some(response) = form.response() else {
            return;
        };

        ui.label(RichText::new("Filtered Response:").strong());
        ui.add_space(spacing::SM);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for option in form.filters.iter() {
                ui.label(RichText::new(format!("{}:", option.label())).strong());
                let items = response.section_items(option.key());
                if items.is_empty() {
                    ui.label(RichText::new(NO_DATA_PLACEHOLDER).weak());
                } else {
                    for item in items {
                        ui.label(format!("• {item}"));
                    }
                }
                ui.add_space(spacing::SM);
            }

            if shows_file_info {
                let report = response.file_report();

                ui.add_space(spacing::SM);
                ui.separator();
                ui.add_space(spacing::SM);
                ui.label(
                    RichText::new(format!(
                        "{} File Information:",
                        egui_phosphor::regular::INFO
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                let valid_color = if report.valid {
                    colors::SUCCESS
                } else {
                    colors::ERROR
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new("File Valid:").strong());
                    ui.label(RichText::new(report.valid_label()).color(valid_color));
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("MIME Type:").strong());
                    ui.label(report.mime_type_label());
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("File Size (KB):").strong());
                    ui.label(report.size_kb_label());
                });
            }
        });
    }
}
