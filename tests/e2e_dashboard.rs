// IncomeScope - tests/e2e_dashboard.rs
//
// End-to-end tests for the survey dashboard pipeline.
//
// These tests exercise the real filesystem, real CSV persistence, and the
// real application state — no mocks, no stubs. They cover the full path
// from a submitted form draft to a rewritten CSV on disk, a reloaded table
// on restart, and a filtered scatterplot series.

use incomescope::app::session;
use incomescope::app::state::AppState;
use incomescope::core::chart;
use incomescope::core::filter::FilterState;
use incomescope::core::model::{BroadRace, Continent, Gender, SubmissionDraft};
use incomescope::core::store::Dataset;
use incomescope::core::taxonomy;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Fresh application state over an empty table in a temp directory.
fn fresh_state(dir: &TempDir) -> AppState {
    let data_path = dir.path().join("submissions.csv");
    let session_path = dir.path().join("session.json");
    let (dataset, warnings) = Dataset::load(&data_path).expect("load empty");
    assert!(warnings.is_empty());
    AppState::new(dataset, data_path, session_path)
}

/// Application state reloaded from whatever is on disk in `dir`, as a
/// process restart would produce it.
fn restarted_state(dir: &TempDir) -> AppState {
    let data_path = dir.path().join("submissions.csv");
    let session_path = dir.path().join("session.json");
    let (dataset, warnings) = Dataset::load(&data_path).expect("reload");
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    let mut state = AppState::new(dataset, data_path, session_path);
    if let Some(data) = session::load(&state.session_path) {
        state.restore_session(data);
    }
    state
}

/// A complete draft matching the canonical example submission.
fn complete_draft() -> SubmissionDraft {
    SubmissionDraft {
        age_input: "34".to_string(),
        income_input: "52000".to_string(),
        racial_broad: Some(BroadRace::Asian),
        racial_specific: Some("Chinese".to_string()),
        gender: Some(Gender::Female),
        continent: Some(Continent::Asia),
        country: Some("China".to_string()),
    }
}

fn csv_line_count(path: &Path) -> usize {
    std::fs::read_to_string(path).unwrap().lines().count()
}

// =============================================================================
// Cascading dropdowns
// =============================================================================

/// Given a continent, the country options equal exactly its fixed list.
#[test]
fn e2e_country_options_follow_the_continent() {
    let asia = taxonomy::countries_for(Some(Continent::Asia));
    assert!(asia.contains(&"China"));
    assert!(asia.contains(&"India"));
    assert!(!asia.contains(&"Germany"));

    // The six per-continent lists partition the fixed 195-country table.
    let total: usize = Continent::all()
        .iter()
        .map(|c| taxonomy::countries_for(Some(*c)).len())
        .sum();
    assert_eq!(total, 195);
}

/// Given a broad race, the specific options equal exactly its fixed list.
#[test]
fn e2e_specific_options_follow_the_broad_race() {
    let asian = taxonomy::specifics_for(Some(BroadRace::Asian));
    assert!(asian.contains(&"Chinese"));
    assert!(!asian.contains(&"Mexican"));

    for race in BroadRace::all() {
        assert!(
            !taxonomy::specifics_for(Some(*race)).is_empty(),
            "{race} must offer specific identities"
        );
    }
}

/// An unset parent yields empty dependent options.
#[test]
fn e2e_unset_parent_yields_empty_options() {
    assert!(taxonomy::countries_for(None).is_empty());
    assert!(taxonomy::specifics_for(None).is_empty());
}

// =============================================================================
// Submission lifecycle
// =============================================================================

/// Submitting with any field empty leaves the stored table unchanged.
#[test]
fn e2e_incomplete_submission_leaves_table_unchanged() {
    let dir = TempDir::new().unwrap();

    // Knock out each of the seven fields in turn.
    let drafts: Vec<SubmissionDraft> = (0..7)
        .map(|missing| {
            let mut draft = complete_draft();
            match missing {
                0 => draft.age_input.clear(),
                1 => draft.income_input = "lots".to_string(),
                2 => draft.racial_broad = None,
                3 => draft.racial_specific = None,
                4 => draft.gender = None,
                5 => draft.continent = None,
                _ => draft.country = None,
            }
            draft
        })
        .collect();

    let mut state = fresh_state(&dir);
    for draft in drafts {
        state.draft = draft;
        state.submit();
        assert!(state.dataset.rows.is_empty());
    }
    assert!(
        !state.data_path.exists(),
        "no CSV should be written for ignored submissions"
    );
}

/// Submitting with all seven fields appends exactly one row with those
/// literal values, and the row survives a process restart.
#[test]
fn e2e_complete_submission_appends_one_row_and_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut state = fresh_state(&dir);
    state.draft = complete_draft();
    state.submit();

    assert_eq!(state.dataset.rows.len(), 1);
    // Header plus exactly one record on disk.
    assert_eq!(csv_line_count(&state.data_path), 2);

    let restarted = restarted_state(&dir);
    assert_eq!(restarted.dataset.rows.len(), 1);
    let row = &restarted.dataset.rows[0];
    assert_eq!(row.age, 34);
    assert_eq!(row.income, 52_000);
    assert_eq!(row.racial_broad, BroadRace::Asian);
    assert_eq!(row.racial_specific, "Chinese");
    assert_eq!(row.gender, Gender::Female);
    assert_eq!(row.continent, Continent::Asia);
    assert_eq!(row.country, "China");
}

/// Each submission rewrites the whole file: header stays singular and the
/// record count tracks the table exactly.
#[test]
fn e2e_each_submission_rewrites_the_full_file() {
    let dir = TempDir::new().unwrap();
    let mut state = fresh_state(&dir);

    for (i, (age, country)) in [("25", "Japan"), ("52", "India"), ("67", "China")]
        .iter()
        .enumerate()
    {
        let mut draft = complete_draft();
        draft.age_input = age.to_string();
        draft.country = Some(country.to_string());
        state.draft = draft;
        state.submit();
        assert_eq!(csv_line_count(&state.data_path), i + 2);
    }

    let content = std::fs::read_to_string(&state.data_path).unwrap();
    assert_eq!(content.matches("Age,Income").count(), 1, "one header only");
}

// =============================================================================
// Filtering and chart
// =============================================================================

/// Rendering on an empty table yields a placeholder with no data points;
/// a non-empty table yields one point per row.
#[test]
fn e2e_chart_has_one_point_per_filtered_row() {
    let dir = TempDir::new().unwrap();
    let mut state = fresh_state(&dir);

    let series = chart::scatter_series(&state.dataset.rows, &state.filtered_indices);
    assert_eq!(chart::point_count(&series), 0, "empty table plots nothing");

    for (age, race, specific) in [
        ("25", BroadRace::Asian, "Chinese"),
        ("40", BroadRace::Asian, "Japanese"),
        ("61", BroadRace::White, "German"),
    ] {
        let mut draft = complete_draft();
        draft.age_input = age.to_string();
        draft.racial_broad = Some(race);
        draft.racial_specific = Some(specific.to_string());
        state.draft = draft;
        state.submit();
    }

    let series = chart::scatter_series(&state.dataset.rows, &state.filtered_indices);
    assert_eq!(chart::point_count(&series), 3);
    // Grouped by category: Asian carries two points, White one.
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].race, BroadRace::Asian);
    assert_eq!(series[0].points.len(), 2);

    // An age-range filter narrows the plot without touching the table.
    state.filter_state.age_min = Some(30);
    state.filter_state.age_max = Some(50);
    state.apply_filters();
    let series = chart::scatter_series(&state.dataset.rows, &state.filtered_indices);
    assert_eq!(chart::point_count(&series), 1);
    assert_eq!(series[0].points[0], (40.0, 52_000.0));
    assert_eq!(state.dataset.rows.len(), 3);
}

/// Demographic equality filters AND-combine.
#[test]
fn e2e_demographic_filters_and_combine() {
    let dir = TempDir::new().unwrap();
    let mut state = fresh_state(&dir);

    let mut draft = complete_draft();
    state.draft = draft.clone();
    state.submit();

    draft.gender = Some(Gender::Male);
    draft.country = Some("Japan".to_string());
    draft.racial_specific = Some("Japanese".to_string());
    state.draft = draft;
    state.submit();

    state.filter_state = FilterState {
        continent: Some(Continent::Asia),
        gender: Some(Gender::Female),
        ..FilterState::default()
    };
    state.apply_filters();
    assert_eq!(state.filtered_indices, vec![0]);

    state.filter_state.gender = Some(Gender::Male);
    state.apply_filters();
    assert_eq!(state.filtered_indices, vec![1]);

    state.filter_state.country = Some("China".to_string());
    state.apply_filters();
    assert!(state.filtered_indices.is_empty());
}

// =============================================================================
// Session persistence
// =============================================================================

/// Filters and theme written on exit are restored on the next launch.
#[test]
fn e2e_session_restores_filters_and_theme_across_restart() {
    let dir = TempDir::new().unwrap();

    let mut state = fresh_state(&dir);
    state.draft = complete_draft();
    state.submit();
    state.filter_state.racial_broad = Some(BroadRace::Asian);
    state.filter_state.age_min = Some(20);
    state.filter_state.age_max = Some(60);
    state.dark_mode = false;
    state.save_session();

    let restarted = restarted_state(&dir);
    assert_eq!(restarted.filter_state.racial_broad, Some(BroadRace::Asian));
    assert_eq!(restarted.filter_state.age_min, Some(20));
    assert_eq!(restarted.filter_state.age_max, Some(60));
    assert!(!restarted.dark_mode);
    // Restored filters are applied to the reloaded table immediately.
    assert_eq!(restarted.filtered_indices, vec![0]);
}

/// A corrupt session file means a fresh start, never a crash.
#[test]
fn e2e_corrupt_session_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("session.json"), "{ not json").unwrap();

    let state = restarted_state(&dir);
    assert!(state.filter_state.is_empty());
    assert!(state.dark_mode);
}
