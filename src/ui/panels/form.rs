// IncomeScope - ui/panels/form.rs
//
// The survey form: seven inputs and the Submit button.
//
// The two cascades (broad race -> specific identity, continent -> country)
// are enforced here: a dependent dropdown only offers the fixed list for
// the currently selected parent, and a dependent selection is cleared the
// moment its parent changes to a value it no longer belongs to. This is
// the only place the cascade invariants are enforced — rows loaded from
// disk are trusted.

use crate::app::state::AppState;
use crate::core::model::{BroadRace, Continent, Gender};
use crate::core::taxonomy;
use crate::util::constants;

/// Render the submission form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Submit Your Data");
    ui.separator();

    // ---- Broad racial identity ----
    ui.label("Select Broad Racial Identity:");
    let race_before = state.draft.racial_broad;
    egui::ComboBox::from_id_salt("form_racial_broad")
        .width(ui.available_width())
        .selected_text(selected_label(state.draft.racial_broad.map(|r| r.label())))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.draft.racial_broad, None, "(none)");
            for race in BroadRace::all() {
                ui.selectable_value(&mut state.draft.racial_broad, Some(*race), race.label());
            }
        });
    if state.draft.racial_broad != race_before {
        let keep = matches!(
            (state.draft.racial_broad, state.draft.racial_specific.as_deref()),
            (Some(race), Some(specific)) if taxonomy::is_specific_of(race, specific)
        );
        if !keep {
            state.draft.racial_specific = None;
        }
    }

    // ---- Specific racial identity (depends on broad) ----
    ui.label("Select Specific Racial Identity:");
    egui::ComboBox::from_id_salt("form_racial_specific")
        .width(ui.available_width())
        .selected_text(selected_label(state.draft.racial_specific.as_deref()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.draft.racial_specific, None, "(none)");
            for specific in taxonomy::specifics_for(state.draft.racial_broad) {
                ui.selectable_value(
                    &mut state.draft.racial_specific,
                    Some((*specific).to_string()),
                    *specific,
                );
            }
        });

    // ---- Continent ----
    ui.label("Select Continent:");
    let continent_before = state.draft.continent;
    egui::ComboBox::from_id_salt("form_continent")
        .width(ui.available_width())
        .selected_text(selected_label(state.draft.continent.map(|c| c.label())))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.draft.continent, None, "(none)");
            for continent in Continent::all() {
                ui.selectable_value(&mut state.draft.continent, Some(*continent), continent.label());
            }
        });
    if state.draft.continent != continent_before {
        let keep = matches!(
            (state.draft.continent, state.draft.country.as_deref()),
            (Some(continent), Some(country)) if taxonomy::is_country_of(continent, country)
        );
        if !keep {
            state.draft.country = None;
        }
    }

    // ---- Country (depends on continent) ----
    ui.label("Select Country:");
    egui::ComboBox::from_id_salt("form_country")
        .width(ui.available_width())
        .selected_text(selected_label(state.draft.country.as_deref()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.draft.country, None, "(none)");
            for country in taxonomy::countries_for(state.draft.continent) {
                ui.selectable_value(
                    &mut state.draft.country,
                    Some((*country).to_string()),
                    *country,
                );
            }
        });

    // ---- Gender ----
    ui.label("Select Gender:");
    egui::ComboBox::from_id_salt("form_gender")
        .width(ui.available_width())
        .selected_text(selected_label(state.draft.gender.map(|g| g.label())))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut state.draft.gender, None, "(none)");
            for gender in Gender::all() {
                ui.selectable_value(&mut state.draft.gender, Some(*gender), gender.label());
            }
        });

    // ---- Age / Income ----
    // Held as raw text; anything that does not coerce to an in-range number
    // counts as missing at submit time.
    ui.label(format!(
        "Enter Age ({}\u{2013}{}):",
        constants::MIN_AGE,
        constants::MAX_AGE
    ));
    ui.text_edit_singleline(&mut state.draft.age_input);

    ui.label(format!(
        "Enter Income ($, steps of {}):",
        constants::INCOME_STEP
    ));
    ui.text_edit_singleline(&mut state.draft.income_input);

    ui.add_space(8.0);
    if ui.button("Submit Data").clicked() {
        state.submit();
    }
}

fn selected_label(value: Option<&str>) -> String {
    value.unwrap_or("(none)").to_string()
}
