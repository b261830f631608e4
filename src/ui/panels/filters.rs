// IncomeScope - ui/panels/filters.rs
//
// Chart filter controls sidebar. Every change re-applies the filters so
// the scatterplot updates in the same frame.

use crate::app::state::AppState;
use crate::core::model::{BroadRace, Continent, Gender};
use crate::core::taxonomy;
use crate::util::constants;

/// Render the chart filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Chart Filters");
    ui.separator();

    if ui.button("Clear Filters").clicked() {
        state.filter_state = crate::core::filter::FilterState::default();
        state.apply_filters();
    }

    ui.separator();
    let mut changed = false;

    // ---- Broad race ----
    ui.label("Racial category:");
    let race_before = state.filter_state.racial_broad;
    egui::ComboBox::from_id_salt("filter_racial_broad")
        .width(ui.available_width())
        .selected_text(option_label(
            state.filter_state.racial_broad.map(|r| r.label()),
        ))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.filter_state.racial_broad, None, "(all)");
            for race in BroadRace::all() {
                ui.selectable_value(
                    &mut state.filter_state.racial_broad,
                    Some(*race),
                    race.label(),
                );
            }
        });
    if state.filter_state.racial_broad != race_before {
        // A specific-identity filter only makes sense within one category.
        state.filter_state.racial_specific = None;
        changed = true;
    }

    // ---- Specific identity (within the filtered category) ----
    if let Some(race) = state.filter_state.racial_broad {
        ui.label("Specific identity:");
        let specific_before = state.filter_state.racial_specific.clone();
        egui::ComboBox::from_id_salt("filter_racial_specific")
            .width(ui.available_width())
            .selected_text(option_label(state.filter_state.racial_specific.as_deref()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.filter_state.racial_specific, None, "(all)");
                for specific in taxonomy::specifics_for(Some(race)) {
                    ui.selectable_value(
                        &mut state.filter_state.racial_specific,
                        Some((*specific).to_string()),
                        *specific,
                    );
                }
            });
        changed |= state.filter_state.racial_specific != specific_before;
    }

    // ---- Gender ----
    ui.label("Gender:");
    let gender_before = state.filter_state.gender;
    egui::ComboBox::from_id_salt("filter_gender")
        .width(ui.available_width())
        .selected_text(option_label(state.filter_state.gender.map(|g| g.label())))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.filter_state.gender, None, "(all)");
            for gender in Gender::all() {
                ui.selectable_value(&mut state.filter_state.gender, Some(*gender), gender.label());
            }
        });
    changed |= state.filter_state.gender != gender_before;

    // ---- Continent ----
    ui.label("Continent:");
    let continent_before = state.filter_state.continent;
    egui::ComboBox::from_id_salt("filter_continent")
        .width(ui.available_width())
        .selected_text(option_label(
            state.filter_state.continent.map(|c| c.label()),
        ))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.filter_state.continent, None, "(all)");
            for continent in Continent::all() {
                ui.selectable_value(
                    &mut state.filter_state.continent,
                    Some(*continent),
                    continent.label(),
                );
            }
        });
    if state.filter_state.continent != continent_before {
        // Same cascade as the form: a country filter is scoped to a continent.
        state.filter_state.country = None;
        changed = true;
    }

    // ---- Country (within the filtered continent) ----
    if let Some(continent) = state.filter_state.continent {
        ui.label("Country:");
        let country_before = state.filter_state.country.clone();
        egui::ComboBox::from_id_salt("filter_country")
            .width(ui.available_width())
            .selected_text(option_label(state.filter_state.country.as_deref()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.filter_state.country, None, "(all)");
                for country in taxonomy::countries_for(Some(continent)) {
                    ui.selectable_value(
                        &mut state.filter_state.country,
                        Some((*country).to_string()),
                        *country,
                    );
                }
            });
        changed |= state.filter_state.country != country_before;
    }

    // ---- Age range ----
    let mut limit_age = state.filter_state.age_min.is_some() || state.filter_state.age_max.is_some();
    if ui.checkbox(&mut limit_age, "Limit age range").changed() {
        if limit_age {
            state.filter_state.age_min = Some(constants::MIN_AGE);
            state.filter_state.age_max = Some(constants::MAX_AGE);
        } else {
            state.filter_state.age_min = None;
            state.filter_state.age_max = None;
        }
        changed = true;
    }
    if limit_age {
        let mut lo = state.filter_state.age_min.unwrap_or(constants::MIN_AGE);
        let mut hi = state.filter_state.age_max.unwrap_or(constants::MAX_AGE);

        let lo_changed = ui
            .add(egui::Slider::new(&mut lo, constants::MIN_AGE..=constants::MAX_AGE).text("min age"))
            .changed();
        let hi_changed = ui
            .add(egui::Slider::new(&mut hi, constants::MIN_AGE..=constants::MAX_AGE).text("max age"))
            .changed();

        if lo_changed || hi_changed {
            // Keep the range well-formed as either end is dragged.
            if lo > hi {
                if lo_changed {
                    hi = lo;
                } else {
                    lo = hi;
                }
            }
            state.filter_state.age_min = Some(lo);
            state.filter_state.age_max = Some(hi);
            changed = true;
        }
    }

    if changed {
        state.apply_filters();
    }

    ui.separator();
    ui.label(format!(
        "{} of {} submission(s) shown",
        state.filtered_indices.len(),
        state.dataset.rows.len()
    ));
}

fn option_label(value: Option<&str>) -> String {
    value.unwrap_or("(all)").to_string()
}
