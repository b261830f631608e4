// IncomeScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Submissions CSV load and session restore
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use incomescope::app;

pub use incomescope::core;
pub use incomescope::platform;
pub use incomescope::ui;
pub use incomescope::util;

use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded icon PNG bytes (512x512 RGBA).
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            // Convert to RGBA8 regardless of the source colour space.
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => {
                    let rgba = img.into_rgba8();
                    egui::IconData {
                        rgba: rgba.into_raw(),
                        width: w,
                        height: h,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// IncomeScope - Income and demographics survey dashboard.
///
/// Collects demographic/income submissions through a cascading form and
/// visualises them as an Age vs. Income scatterplot, filterable by
/// demographic attributes.
#[derive(Parser, Debug)]
#[command(name = "IncomeScope", version, about)]
struct Cli {
    /// Submissions CSV to load (defaults to the platform data directory).
    path: Option<PathBuf>,

    /// Initial racial-category chart filter (e.g. "Asian").
    #[arg(short = 'f', long = "filter-race")]
    filter_race: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config.toml before logging so the
    // configured level can be honoured from the very first line.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "IncomeScope starting"
    );

    for warn in &config_warnings {
        tracing::warn!("{}", warn);
    }

    // Restore the previous session (filters and theme). A missing, corrupt,
    // or version-mismatched session file just means a fresh start.
    let session_path = app::session::session_path(&platform_paths.data_dir);
    let session = app::session::load(&session_path);

    // Data file precedence: CLI path > config.toml > previous session >
    // platform default.
    let data_path = cli
        .path
        .clone()
        .or_else(|| config.data_file.clone())
        .or_else(|| session.as_ref().and_then(|s| s.data_file.clone()))
        .unwrap_or_else(|| platform_paths.default_data_file());

    // Load the submissions table. A load failure is not fatal: the app
    // starts on an empty table and surfaces the error as a warning, so the
    // user can pick a different file from the menu.
    let (dataset, load_warnings) = match core::store::Dataset::load(&data_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::warn!(error = %e, path = %data_path.display(), "Could not load submissions");
            (
                core::store::Dataset::default(),
                vec![format!("Could not load '{}': {e}", data_path.display())],
            )
        }
    };

    tracing::info!(
        rows = dataset.rows.len(),
        path = %data_path.display(),
        "Ready to launch GUI"
    );

    // Create application state
    let mut state = app::state::AppState::new(dataset, data_path, session_path);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;
    state.debug_mode = cli.debug;
    for warn in config_warnings {
        state.push_warning(warn);
    }
    for warn in load_warnings {
        state.push_warning(warn);
    }
    if let Some(session) = session {
        state.restore_session(session);
    }

    // CLI filter overrides whatever the session restored.
    if let Some(ref label) = cli.filter_race {
        match core::model::BroadRace::from_label(label) {
            Some(race) => {
                state.filter_state.racial_broad = Some(race);
                state.apply_filters();
            }
            None => {
                let valid: Vec<_> = core::model::BroadRace::all()
                    .iter()
                    .map(|r| r.label())
                    .collect();
                tracing::warn!(value = %label, "Unknown --filter-race value; ignoring");
                state.push_warning(format!(
                    "Unknown --filter-race '{label}'. Valid values: {}.",
                    valid.join(", ")
                ));
            }
        }
    }

    // Launch the GUI. The window icon is loaded at runtime from the
    // embedded PNG asset on all platforms.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 500.0])
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::IncomeScopeApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch IncomeScope GUI: {e}");
        std::process::exit(1);
    }
}
