// IncomeScope - ui/theme.rs
//
// Colour scheme, per-race series colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::BroadRace;
use egui::Color32;

/// Series colour for a broad racial category.
pub fn race_colour(race: &BroadRace) -> Color32 {
    match race {
        BroadRace::White => Color32::from_rgb(96, 165, 250),      // Blue 400
        BroadRace::Black => Color32::from_rgb(52, 211, 153),      // Emerald 400
        BroadRace::Asian => Color32::from_rgb(251, 191, 36),      // Amber 400
        BroadRace::Latino => Color32::from_rgb(248, 113, 113),    // Red 400
        BroadRace::Indigenous => Color32::from_rgb(167, 139, 250), // Violet 400
        BroadRace::Other => Color32::from_rgb(45, 212, 191),      // Teal 400
    }
}

/// High-contrast foreground colour for chart labels.
pub fn chart_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(209, 213, 219) // Gray 300
    } else {
        Color32::from_rgb(31, 41, 55) // Gray 800
    }
}

/// Subdued colour for axis lines and gridlines.
pub fn chart_grid_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(55, 65, 81) // Gray 700
    } else {
        Color32::from_rgb(209, 213, 219) // Gray 300
    }
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const POINT_RADIUS: f32 = 4.0;
pub const CHART_MARGIN_LEFT: f32 = 72.0;
pub const CHART_MARGIN_BOTTOM: f32 = 36.0;
pub const CHART_MARGIN_TOP: f32 = 40.0;
pub const CHART_MARGIN_RIGHT: f32 = 16.0;
