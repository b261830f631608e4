// IncomeScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IncomeScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "IncomeScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Submission field bounds
// =============================================================================

/// Minimum accepted age (inclusive).
pub const MIN_AGE: u32 = 18;

/// Maximum accepted age (inclusive).
pub const MAX_AGE: u32 = 80;

/// Maximum accepted income in whole dollars.
pub const MAX_INCOME: u64 = 1_000_000_000;

/// Income entry step suggested by the form ($).
pub const INCOME_STEP: u64 = 1_000;

// =============================================================================
// Dataset limits
// =============================================================================

/// CSV header row for the submissions table. Column order is load-bearing:
/// the store both writes and reads records in exactly this order.
pub const CSV_HEADER: [&str; 7] = [
    "Age",
    "Income",
    "Racial_Broad",
    "Racial_Specific",
    "Gender",
    "Continent",
    "Country",
];

/// Maximum rows loaded from a submissions CSV in one go. A survey table
/// past this size is almost certainly the wrong file; loading stops with
/// a warning rather than exhausting memory.
pub const MAX_DATASET_ROWS: usize = 1_000_000;

/// Maximum number of malformed-row warnings accumulated during a single
/// CSV load. Further malformed rows are still skipped, just not reported
/// individually.
pub const MAX_LOAD_WARNINGS: usize = 100;

/// Maximum non-fatal warnings held in application state at once.
pub const MAX_WARNINGS: usize = 1_000;

/// Maximum number of rows included in a single JSON export.
pub const MAX_EXPORT_ROWS: usize = 5_000_000;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

/// Default submissions CSV file name (stored in the platform data directory
/// unless overridden on the CLI or in config.toml).
pub const DATA_FILE_NAME: &str = "submissions.csv";
