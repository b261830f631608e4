// IncomeScope - app/state.rs
//
// Application state management. Holds the loaded submissions table, the
// in-progress form draft, the chart filter state, and UI flags.
// Owned by the eframe::App implementation.

use crate::app::session::{self, PersistedFilter, SessionData};
use crate::core::filter::FilterState;
use crate::core::model::{DatasetSummary, SubmissionDraft};
use crate::core::store::Dataset;
use crate::util::constants;
use std::path::PathBuf;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The loaded submissions table.
    pub dataset: Dataset,

    /// Path of the submissions CSV the table is persisted to.
    pub data_path: PathBuf,

    /// Path of the session file (platform data dir).
    pub session_path: PathBuf,

    /// The form fields as entered so far.
    pub draft: SubmissionDraft,

    /// Current chart filter configuration.
    pub filter_state: FilterState,

    /// Indices of rows matching the current filter (into `dataset.rows`).
    pub filtered_indices: Vec<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (malformed rows, failed writes, config issues).
    pub warnings: Vec<String>,

    /// Whether to show the dataset summary dialog.
    pub show_summary: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) theme.
    pub dark_mode: bool,

    /// UI body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state around a loaded dataset.
    pub fn new(dataset: Dataset, data_path: PathBuf, session_path: PathBuf) -> Self {
        let row_count = dataset.rows.len();
        let mut state = Self {
            dataset,
            data_path,
            session_path,
            draft: SubmissionDraft::default(),
            filter_state: FilterState::default(),
            filtered_indices: Vec::new(),
            status_message: if row_count == 0 {
                "Ready. Submit your data to start the chart.".to_string()
            } else {
                format!("Loaded {row_count} submission(s).")
            },
            warnings: Vec::new(),
            show_summary: false,
            show_about: false,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            debug_mode: false,
        };
        state.apply_filters();
        state
    }

    /// Recompute filtered indices from the current table and filter state.
    pub fn apply_filters(&mut self) {
        self.filtered_indices =
            crate::core::filter::apply_filters(&self.dataset.rows, &self.filter_state);
    }

    /// Handle the Submit button.
    ///
    /// An incomplete draft (any of the seven fields missing, including Age
    /// or Income text that does not coerce to an in-range number) leaves the
    /// table untouched; only the status message changes. A complete draft
    /// appends exactly one row and rewrites the CSV.
    pub fn submit(&mut self) {
        let Some(row) = self.draft.complete() else {
            let missing = self.draft.missing_fields();
            self.status_message = format!("Submission ignored — missing: {}.", missing.join(", "));
            tracing::debug!(missing = ?missing, "Incomplete submission ignored");
            return;
        };

        tracing::info!(
            race = %row.racial_broad,
            continent = %row.continent,
            "Recording submission"
        );

        match self.dataset.submit(row, &self.data_path) {
            Ok(()) => {
                self.status_message =
                    format!("Submission recorded ({} total).", self.dataset.rows.len());
                self.draft.clear();
            }
            Err(e) => {
                // The row is kept in memory; only the rewrite failed.
                tracing::warn!(error = %e, "Could not persist submission");
                self.status_message = format!("Submission kept in memory, but saving failed: {e}");
                self.push_warning(e.to_string());
            }
        }
        self.apply_filters();
    }

    /// Replace the current table with one loaded from `path`.
    pub fn replace_dataset(&mut self, dataset: Dataset, path: PathBuf, warnings: Vec<String>) {
        self.status_message = format!(
            "Loaded {} submission(s) from '{}'.",
            dataset.rows.len(),
            path.display()
        );
        self.dataset = dataset;
        self.data_path = path;
        for w in warnings {
            self.push_warning(w);
        }
        self.apply_filters();
    }

    /// Append a non-fatal warning, bounded so the list cannot grow without
    /// limit over a long-lived session.
    pub fn push_warning(&mut self, warning: String) {
        if self.warnings.len() < constants::MAX_WARNINGS {
            self.warnings.push(warning);
        }
    }

    /// Summary statistics over the full (unfiltered) table.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::compute(&self.dataset.rows)
    }

    /// Apply a restored session snapshot (filter + theme).
    pub fn restore_session(&mut self, data: SessionData) {
        self.filter_state = data.filter.into_filter();
        self.dark_mode = data.dark_mode;
        self.apply_filters();
    }

    /// Persist the current session; failures are logged, never surfaced.
    pub fn save_session(&self) {
        let data = SessionData {
            version: session::SESSION_VERSION,
            saved_at: chrono::Utc::now(),
            data_file: Some(self.data_path.clone()),
            filter: PersistedFilter::from_filter(&self.filter_state),
            dark_mode: self.dark_mode,
        };
        if let Err(e) = session::save(&data, &self.session_path) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{BroadRace, Continent, Gender};
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        AppState::new(
            Dataset::default(),
            dir.path().join("submissions.csv"),
            dir.path().join("session.json"),
        )
    }

    fn fill_draft(state: &mut AppState) {
        state.draft = SubmissionDraft {
            age_input: "34".to_string(),
            income_input: "52000".to_string(),
            racial_broad: Some(BroadRace::Asian),
            racial_specific: Some("Chinese".to_string()),
            gender: Some(Gender::Female),
            continent: Some(Continent::Asia),
            country: Some("China".to_string()),
        };
    }

    #[test]
    fn test_incomplete_submission_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        fill_draft(&mut state);
        state.draft.gender = None;

        state.submit();

        assert!(state.dataset.rows.is_empty());
        assert!(!state.data_path.exists(), "no file should be written");
        assert!(state.status_message.contains("Gender"));
        // The draft is kept so the user can fix the missing field.
        assert_eq!(state.draft.age_input, "34");
    }

    #[test]
    fn test_complete_submission_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        fill_draft(&mut state);

        state.submit();

        assert_eq!(state.dataset.rows.len(), 1);
        assert_eq!(state.filtered_indices, vec![0]);
        assert!(state.data_path.exists());
        // The form resets after a successful submission.
        assert!(state.draft.age_input.is_empty());
        assert!(state.draft.country.is_none());
    }

    #[test]
    fn test_filters_narrow_the_chart_view() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        fill_draft(&mut state);
        state.submit();

        state.filter_state.racial_broad = Some(BroadRace::White);
        state.apply_filters();
        assert!(state.filtered_indices.is_empty());

        state.filter_state = FilterState::default();
        state.apply_filters();
        assert_eq!(state.filtered_indices, vec![0]);
    }

    #[test]
    fn test_session_round_trip_restores_filter_and_theme() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.filter_state.gender = Some(Gender::Other);
        state.dark_mode = false;
        state.save_session();

        let mut fresh = test_state(&dir);
        let data = session::load(&fresh.session_path).expect("session should load");
        fresh.restore_session(data);
        assert_eq!(fresh.filter_state.gender, Some(Gender::Other));
        assert!(!fresh.dark_mode);
    }
}
