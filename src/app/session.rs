// IncomeScope - app/session.rs
//
// Session persistence: save and restore the data-file path, chart filter
// state, and theme between application restarts.
//
// Design principles:
// - Session is saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are silently discarded (corrupt or incompatible sessions
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.
// - Submissions are NOT persisted here — they live in the CSV table and
//   are reloaded from disk at startup.

use crate::core::filter::FilterState;
use crate::core::model::{BroadRace, Continent, Gender};
use crate::util::constants::SESSION_FILE_NAME;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes fields
/// in a breaking way. Version mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

// =============================================================================
// On-disk data structures
// =============================================================================

/// Complete persistent session snapshot.
///
/// All fields are optional-friendly; deserialisation failures for individual
/// fields are handled by serde defaults so minor format additions are tolerated
/// without bumping the version.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version — must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// When this session was written.
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,

    /// Submissions CSV used in the last session (None = platform default).
    pub data_file: Option<PathBuf>,

    /// Chart filter state as it was on exit.
    #[serde(default)]
    pub filter: PersistedFilter,

    /// Dark (true) or light (false) theme.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

/// Serialisable snapshot of `FilterState`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedFilter {
    #[serde(default)]
    pub racial_broad: Option<BroadRace>,

    #[serde(default)]
    pub racial_specific: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub continent: Option<Continent>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub age_min: Option<u32>,

    #[serde(default)]
    pub age_max: Option<u32>,
}

impl PersistedFilter {
    /// Snapshot the runtime filter for persistence.
    pub fn from_filter(filter: &FilterState) -> Self {
        Self {
            racial_broad: filter.racial_broad,
            racial_specific: filter.racial_specific.clone(),
            gender: filter.gender,
            continent: filter.continent,
            country: filter.country.clone(),
            age_min: filter.age_min,
            age_max: filter.age_max,
        }
    }

    /// Rebuild the runtime filter from a persisted snapshot.
    pub fn into_filter(self) -> FilterState {
        FilterState {
            racial_broad: self.racial_broad,
            racial_specific: self.racial_specific,
            gender: self.gender,
            continent: self.continent,
            country: self.country,
            age_min: self.age_min,
            age_max: self.age_max,
        }
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed.  Returns a descriptive error
/// string suitable for a tracing warn! call; the caller decides whether to
/// surface it to the user (typically it is logged and ignored).
pub fn save(data: &SessionData, path: &Path) -> Result<(), String> {
    // Ensure the parent directory exists before writing.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!(
                "cannot create session directory '{}': {e}",
                parent.display()
            )
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialise session: {e}"))?;

    // Atomic write: write to a sibling temp file then rename.
    // A crash between write and rename loses the new session but never
    // corrupts the previous one (rename is atomic on all supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes())
        .map_err(|e| format!("failed to write session temp file '{}': {e}", tmp.display()))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        format!("failed to finalise session file '{}': {e}", path.display())
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch).  The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed — starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch — starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Session file loaded");
    Some(data)
}

// =============================================================================
// Unit tests
// =============================================================================
