//! Main application struct and eframe::App implementation

use eframe::egui;

use crate::services;
use crate::settings::{load_settings, save_settings, ui::SettingsResult};
use crate::state::AppState;
use crate::views::{FormActions, FormView};

/// Main application struct
pub struct StudioApp {
    state: AppState,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!(
            "Loaded settings: endpoint={}",
            settings.connection.endpoint_url
        );

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.handle_shortcuts(ctx);

        // Results from background submit threads
        self.state.poll_submit_outcomes();

        // Show settings window if open
        if self.state.settings_open {
            if let Some(mut pending) = self.state.settings_pending.take() {
                let result = self.state.settings_window.show(ctx, &mut pending);
                self.state.settings_pending = Some(pending);

                match result {
                    SettingsResult::Open => {}
                    SettingsResult::Apply => {
                        self.state.close_settings(true);
                        // Save settings to disk
                        if let Err(e) = save_settings(&self.state.settings) {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    }
                    SettingsResult::Cancel => {
                        self.state.close_settings(false);
                    }
                }
            }
        }

        // Main panel
        let mut actions = FormActions::default();
        egui::CentralPanel::default().show(ctx, |ui| {
            actions = FormView::show(ui, &mut self.state);
        });

        if actions.open_settings && !self.state.settings_open {
            self.state.open_settings();
        }
        if actions.submit {
            self.start_submit(ctx);
        }
    }
}

impl StudioApp {
    fn apply_theme(&self, ctx: &egui::Context) {
        if self.state.settings.general.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Start a submit attempt: local validation first, then the background
    /// request.
    fn start_submit(&mut self, ctx: &egui::Context) {
        if !self.state.form.can_submit() {
            return;
        }

        let Some(payload) = self.state.form.prepare_submit() else {
            tracing::debug!("Payload rejected locally, no request sent");
            return;
        };

        self.state.form.mark_in_flight();
        services::spawn_submit(
            ctx.clone(),
            self.state.submit_sender.clone(),
            self.state.settings.client_config(),
            payload,
            self.state.form.attachment.clone(),
        );
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Use Cmd on macOS, Ctrl on other platforms
        let modifiers = ctx.input(|i| i.modifiers);
        let cmd_or_ctrl = if cfg!(target_os = "macos") {
            modifiers.command
        } else {
            modifiers.ctrl
        };

        let (open_settings, close_settings, submit) = ctx.input(|i| {
            (
                cmd_or_ctrl && i.key_pressed(egui::Key::Comma),
                i.key_pressed(egui::Key::Escape),
                cmd_or_ctrl && i.key_pressed(egui::Key::Enter),
            )
        });

        if open_settings && !self.state.settings_open {
            self.state.open_settings();
        }
        if close_settings && self.state.settings_open {
            self.state.close_settings(false);
        }
        if submit {
            self.start_submit(ctx);
        }
    }
}
