// IncomeScope - core/filter.rs
//
// Composable filter engine for the chart view.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{BroadRace, Continent, Gender, Submission};

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Broad racial category to include. None = all.
    pub racial_broad: Option<BroadRace>,

    /// Specific racial identity to include. None = all.
    pub racial_specific: Option<String>,

    /// Gender to include. None = all.
    pub gender: Option<Gender>,

    /// Continent to include. None = all.
    pub continent: Option<Continent>,

    /// Country to include. None = all.
    pub country: Option<String>,

    /// Lower age bound (inclusive). None = no lower bound.
    pub age_min: Option<u32>,

    /// Upper age bound (inclusive). None = no upper bound.
    pub age_max: Option<u32>,
}

impl FilterState {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.racial_broad.is_none()
            && self.racial_specific.is_none()
            && self.gender.is_none()
            && self.continent.is_none()
            && self.country.is_none()
            && self.age_min.is_none()
            && self.age_max.is_none()
    }
}

/// Apply filters to a slice of rows, returning indices of matching rows.
///
/// Returns a Vec of indices into the original rows slice. This avoids
/// copying rows and lets the chart and export share one filtered view.
pub fn apply_filters(rows: &[Submission], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..rows.len()).collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches_all(row, filter))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single row matches all active filters.
fn matches_all(row: &Submission, filter: &FilterState) -> bool {
    if let Some(race) = filter.racial_broad {
        if row.racial_broad != race {
            return false;
        }
    }

    if let Some(ref specific) = filter.racial_specific {
        if &row.racial_specific != specific {
            return false;
        }
    }

    if let Some(gender) = filter.gender {
        if row.gender != gender {
            return false;
        }
    }

    if let Some(continent) = filter.continent {
        if row.continent != continent {
            return false;
        }
    }

    if let Some(ref country) = filter.country {
        if &row.country != country {
            return false;
        }
    }

    if let Some(min) = filter.age_min {
        if row.age < min {
            return false;
        }
    }
    if let Some(max) = filter.age_max {
        if row.age > max {
            return false;
        }
    }

    true
}
