// IncomeScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the form, filter, and chart panels and owns the menu bar,
// status bar, and modal dialogs.

use crate::app::state::AppState;
use crate::core::store::Dataset;
use crate::ui;
use crate::util::constants;

/// The IncomeScope application.
pub struct IncomeScopeApp {
    pub state: AppState,
    /// Theme/font values last pushed into the egui context. Style is only
    /// rebuilt when these drift from the state, not every frame.
    applied_dark_mode: Option<bool>,
    applied_font_size: f32,
}

impl IncomeScopeApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_dark_mode: None,
            applied_font_size: 0.0,
        }
    }

    /// Push the current theme and font size into the egui context.
    fn apply_style(&mut self, ctx: &egui::Context) {
        use egui::{FontId, TextStyle};

        if self.applied_dark_mode == Some(self.state.dark_mode)
            && (self.applied_font_size - self.state.font_size).abs() < 0.05
        {
            return;
        }

        let size = self.state.font_size;
        let mut style = (*ctx.style()).clone();
        style.visuals = if self.state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style.text_styles = [
            (TextStyle::Heading, FontId::proportional(size * 1.4)),
            (TextStyle::Body, FontId::proportional(size)),
            (TextStyle::Button, FontId::proportional(size)),
            (TextStyle::Monospace, FontId::monospace(size)),
            (TextStyle::Small, FontId::proportional(size * 0.8)),
        ]
        .into();
        ctx.set_style(style);

        self.applied_dark_mode = Some(self.state.dark_mode);
        self.applied_font_size = size;
    }

    /// Handle File > Open CSV: replace the current table with one loaded
    /// from a user-chosen file. A load failure leaves the current table
    /// untouched and only updates the status bar.
    fn open_csv(&mut self, path: std::path::PathBuf) {
        match Dataset::load(&path) {
            Ok((dataset, warnings)) => {
                self.state.replace_dataset(dataset, path, warnings);
                self.state.save_session();
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Could not open CSV");
                self.state.status_message = format!("Could not open CSV: {e}");
                self.state.push_warning(e.to_string());
            }
        }
    }

    /// Handle File > Export JSON over the currently filtered rows.
    fn export_json(&mut self, dest: std::path::PathBuf) {
        let filtered: Vec<_> = self
            .state
            .filtered_indices
            .iter()
            .filter_map(|&i| self.state.dataset.rows.get(i))
            .cloned()
            .collect();
        match std::fs::File::create(&dest) {
            Ok(f) => match crate::core::export::export_json(&filtered, f, &dest) {
                Ok(n) => {
                    self.state.status_message = format!("Exported {n} submission(s) to JSON.");
                }
                Err(e) => {
                    self.state.status_message = format!("JSON export failed: {e}");
                }
            },
            Err(e) => {
                self.state.status_message = format!("Cannot create file: {e}");
            }
        }
    }
}

impl eframe::App for IncomeScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_style(ctx);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open CSV\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            self.open_csv(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export — enabled only when there are filtered rows
                    let has_rows = !self.state.filtered_indices.is_empty();
                    ui.add_enabled_ui(has_rows, |ui| {
                        if ui.button("Export JSON\u{2026}").clicked() {
                            if let Some(dest) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("submissions.json")
                                .save_file()
                            {
                                self.export_json(dest);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Dataset Summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui
                        .checkbox(&mut self.state.dark_mode, "Dark mode")
                        .changed()
                    {
                        self.state.save_session();
                    }
                    ui.horizontal(|ui| {
                        ui.label("Font size:");
                        ui.add(
                            egui::Slider::new(
                                &mut self.state.font_size,
                                constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE,
                            )
                            .step_by(0.5)
                            .suffix(" pt"),
                        );
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About IncomeScope").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.state.dataset.rows.len();
                    let shown = self.state.filtered_indices.len();
                    if total > 0 {
                        ui.label(format!("{shown}/{total} submissions"));
                    }
                    if !self.state.warnings.is_empty() {
                        let warn = format!("\u{26a0} {}", self.state.warnings.len());
                        if ui
                            .button(egui::RichText::new(warn).color(egui::Color32::from_rgb(
                                253, 186, 116,
                            )))
                            .on_hover_text("Show warnings in the dataset summary")
                            .clicked()
                        {
                            self.state.show_summary = true;
                        }
                    }
                });
            });
        });

        // Left sidebar — two independent scroll areas so the form and the
        // filter controls each get proportional room and scroll independently.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                let available = ui.available_height();
                // Form section: top ~55 % of the sidebar.
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_form")
                    .max_height(available * 0.55)
                    .show(ui, |ui| {
                        ui::panels::form::render(ui, &mut self.state);
                    });

                ui.separator();

                // Filters section: remaining space.
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_filters")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel (scatterplot)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::chart::render(ui, &mut self.state);
        });

        // Modal-ish dialogs
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
