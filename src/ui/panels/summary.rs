// IncomeScope - ui/panels/summary.rs
//
// Dataset summary modal window.
// Shows overall statistics and a per-category breakdown table.
// Warnings accumulated during the session are also listed.

use crate::app::state::AppState;
use crate::core::model::BroadRace;
use crate::ui::theme;

/// Render the dataset summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let summary = state.summary();

    let mut open = true;
    egui::Window::new("Dataset Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if summary.total_rows == 0 {
                ui.label("No submissions have been recorded yet.");
            } else {
                // -----------------------------------------------------------------
                // Overall statistics
                // -----------------------------------------------------------------
                ui.strong("Overview");
                egui::Grid::new("summary_overview")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Submissions:");
                        ui.label(summary.total_rows.to_string());
                        ui.end_row();

                        ui.label("Shown by current filters:");
                        ui.label(state.filtered_indices.len().to_string());
                        ui.end_row();

                        ui.label("Age range:");
                        match summary.age_range {
                            Some((lo, hi)) if lo == hi => ui.label(format!("{lo}")),
                            Some((lo, hi)) => ui.label(format!("{lo} \u{2013} {hi}")),
                            None => ui.label("--"),
                        };
                        ui.end_row();

                        ui.label("Income range:");
                        match summary.income_range {
                            Some((lo, hi)) => ui.label(format!("${lo} \u{2013} ${hi}")),
                            None => ui.label("--"),
                        };
                        ui.end_row();

                        ui.label("Mean income:");
                        match summary.mean_income {
                            Some(mean) => ui.label(format!("${mean:.0}")),
                            None => ui.label("--"),
                        };
                        ui.end_row();

                        ui.label("Data file:");
                        ui.label(
                            egui::RichText::new(state.data_path.display().to_string())
                                .monospace()
                                .size(11.5),
                        );
                        ui.end_row();
                    });

                // -----------------------------------------------------------------
                // Per-category breakdown table
                // -----------------------------------------------------------------
                ui.add_space(8.0);
                ui.separator();
                ui.strong("By racial category");

                egui::Grid::new("summary_race_table")
                    .num_columns(3)
                    .striped(true)
                    .spacing([12.0, 3.0])
                    .show(ui, |ui| {
                        ui.strong("Category");
                        ui.strong("Submissions");
                        ui.strong("Share");
                        ui.end_row();

                        for race in BroadRace::all() {
                            let count = summary.rows_by_race.get(race).copied().unwrap_or(0);
                            if count == 0 {
                                continue;
                            }
                            ui.colored_label(theme::race_colour(race), race.label());
                            ui.label(count.to_string());
                            ui.label(format!(
                                "{:.1}%",
                                100.0 * count as f64 / summary.total_rows as f64
                            ));
                            ui.end_row();
                        }
                    });
            }

            // -----------------------------------------------------------------
            // Warnings
            // -----------------------------------------------------------------
            if !state.warnings.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.strong(format!("Warnings ({})", state.warnings.len()));

                egui::ScrollArea::vertical()
                    .id_salt("summary_warnings")
                    .max_height(120.0)
                    .show(ui, |ui| {
                        for warn in &state.warnings {
                            ui.label(
                                egui::RichText::new(warn)
                                    .color(egui::Color32::from_rgb(253, 186, 116))
                                    .size(11.5),
                            );
                        }
                    });
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_summary = false;
            }
        });

    if !open {
        state.show_summary = false;
    }
}
