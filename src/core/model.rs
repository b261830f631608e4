// IncomeScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (core depends on std + serde only).
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Broad racial category
// =============================================================================

/// The six fixed broad racial categories.
///
/// The specific identities available under each category live in
/// `core::taxonomy`. Labels are the exact strings stored in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BroadRace {
    White,
    Black,
    Asian,
    Latino,
    Indigenous,
    Other,
}

impl BroadRace {
    /// Returns all variants in display order.
    pub fn all() -> &'static [BroadRace] {
        &[
            BroadRace::White,
            BroadRace::Black,
            BroadRace::Asian,
            BroadRace::Latino,
            BroadRace::Indigenous,
            BroadRace::Other,
        ]
    }

    /// Human-readable label; also the stored CSV value.
    pub fn label(&self) -> &'static str {
        match self {
            BroadRace::White => "White",
            BroadRace::Black => "Black",
            BroadRace::Asian => "Asian",
            BroadRace::Latino => "Latino",
            BroadRace::Indigenous => "Indigenous",
            BroadRace::Other => "Other",
        }
    }

    /// Inverse of `label`. Returns `None` for an unrecognised string.
    pub fn from_label(s: &str) -> Option<BroadRace> {
        Self::all().iter().copied().find(|r| r.label() == s)
    }
}

impl std::fmt::Display for BroadRace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Gender
// =============================================================================

/// The three gender options offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    /// Human-readable label; also the stored CSV value.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Inverse of `label`. Returns `None` for an unrecognised string.
    pub fn from_label(s: &str) -> Option<Gender> {
        Self::all().iter().copied().find(|g| g.label() == s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Continent
// =============================================================================

/// The six continents used by the geographic cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Europe,
    Asia,
    Africa,
    Oceania,
}

impl Continent {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Continent] {
        &[
            Continent::NorthAmerica,
            Continent::SouthAmerica,
            Continent::Europe,
            Continent::Asia,
            Continent::Africa,
            Continent::Oceania,
        ]
    }

    /// Human-readable label; also the stored CSV value.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::Oceania => "Oceania",
        }
    }

    /// Inverse of `label`. Returns `None` for an unrecognised string.
    pub fn from_label(s: &str) -> Option<Continent> {
        Self::all().iter().copied().find(|c| c.label() == s)
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Submission
// =============================================================================

/// One completed survey submission — a row of the persistent table.
///
/// Rows are created only through `SubmissionDraft::complete`, are never
/// edited or deleted, and serialise with the exact CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Income")]
    pub income: u64,

    #[serde(rename = "Racial_Broad")]
    pub racial_broad: BroadRace,

    #[serde(rename = "Racial_Specific")]
    pub racial_specific: String,

    #[serde(rename = "Gender")]
    pub gender: Gender,

    #[serde(rename = "Continent")]
    pub continent: Continent,

    #[serde(rename = "Country")]
    pub country: String,
}

// =============================================================================
// Submission draft (form state)
// =============================================================================

/// The seven form fields as entered so far. Any of them may still be empty.
///
/// Age and Income are held as raw text (the form's edit buffers) and coerced
/// to numbers at submit time; unparseable or out-of-range text coerces to
/// "missing" rather than producing an error.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub age_input: String,
    pub income_input: String,
    pub racial_broad: Option<BroadRace>,
    pub racial_specific: Option<String>,
    pub gender: Option<Gender>,
    pub continent: Option<Continent>,
    pub country: Option<String>,
}

impl SubmissionDraft {
    /// Build a `Submission` if and only if all seven fields are present.
    ///
    /// Missing, non-numeric, or out-of-range Age/Income are treated the same
    /// way: the field counts as empty and the draft is incomplete.
    pub fn complete(&self) -> Option<Submission> {
        Some(Submission {
            age: parse_age(&self.age_input)?,
            income: parse_income(&self.income_input)?,
            racial_broad: self.racial_broad?,
            racial_specific: self.racial_specific.clone()?,
            gender: self.gender?,
            continent: self.continent?,
            country: self.country.clone()?,
        })
    }

    /// Reset every field to empty (after a successful submission).
    pub fn clear(&mut self) {
        *self = SubmissionDraft::default();
    }

    /// Names of the fields still missing, for the status-bar message.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if parse_age(&self.age_input).is_none() {
            missing.push("Age");
        }
        if parse_income(&self.income_input).is_none() {
            missing.push("Income");
        }
        if self.racial_broad.is_none() {
            missing.push("Broad racial identity");
        }
        if self.racial_specific.is_none() {
            missing.push("Specific racial identity");
        }
        if self.gender.is_none() {
            missing.push("Gender");
        }
        if self.continent.is_none() {
            missing.push("Continent");
        }
        if self.country.is_none() {
            missing.push("Country");
        }
        missing
    }
}

/// Coerce an age string to a value in the accepted range.
///
/// Empty, non-numeric, and out-of-range input all coerce to `None`
/// (a missing value), never to an error.
pub fn parse_age(input: &str) -> Option<u32> {
    let age: u32 = input.trim().parse().ok()?;
    (constants::MIN_AGE..=constants::MAX_AGE)
        .contains(&age)
        .then_some(age)
}

/// Coerce an income string to a non-negative value within the accepted cap.
///
/// Same coercion rules as `parse_age`.
pub fn parse_income(input: &str) -> Option<u64> {
    let income: u64 = input.trim().parse().ok()?;
    (income <= constants::MAX_INCOME).then_some(income)
}

// =============================================================================
// Dataset summary
// =============================================================================

/// Aggregate statistics over the loaded table, shown in the summary dialog.
#[derive(Debug, Clone, Default)]
pub struct DatasetSummary {
    /// Total rows in the table.
    pub total_rows: usize,

    /// Rows by broad racial category.
    pub rows_by_race: HashMap<BroadRace, usize>,

    /// Youngest and oldest respondent (None when the table is empty).
    pub age_range: Option<(u32, u32)>,

    /// Lowest and highest reported income.
    pub income_range: Option<(u64, u64)>,

    /// Mean reported income.
    pub mean_income: Option<f64>,
}

impl DatasetSummary {
    /// Compute summary statistics over `rows`.
    pub fn compute(rows: &[Submission]) -> Self {
        let mut summary = DatasetSummary {
            total_rows: rows.len(),
            ..Default::default()
        };

        let mut income_total: u128 = 0;
        for row in rows {
            *summary.rows_by_race.entry(row.racial_broad).or_insert(0) += 1;

            summary.age_range = Some(match summary.age_range {
                None => (row.age, row.age),
                Some((lo, hi)) => (lo.min(row.age), hi.max(row.age)),
            });
            summary.income_range = Some(match summary.income_range {
                None => (row.income, row.income),
                Some((lo, hi)) => (lo.min(row.income), hi.max(row.income)),
            });
            income_total += u128::from(row.income);
        }

        if !rows.is_empty() {
            summary.mean_income = Some(income_total as f64 / rows.len() as f64);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_coercion() {
        assert_eq!(parse_age("34"), Some(34));
        assert_eq!(parse_age(" 18 "), Some(18));
        assert_eq!(parse_age("80"), Some(80));
        // Out of range and non-numeric coerce to missing, never an error.
        assert_eq!(parse_age("17"), None);
        assert_eq!(parse_age("81"), None);
        assert_eq!(parse_age("-5"), None);
        assert_eq!(parse_age("forty"), None);
        assert_eq!(parse_age(""), None);
    }

    #[test]
    fn test_income_coercion() {
        assert_eq!(parse_income("0"), Some(0));
        assert_eq!(parse_income("52000"), Some(52_000));
        assert_eq!(parse_income("1000000000"), Some(1_000_000_000));
        assert_eq!(parse_income("1000000001"), None);
        assert_eq!(parse_income("-1"), None);
        assert_eq!(parse_income("lots"), None);
        assert_eq!(parse_income(""), None);
    }

    #[test]
    fn test_draft_incomplete_when_any_field_missing() {
        let mut draft = SubmissionDraft {
            age_input: "34".to_string(),
            income_input: "52000".to_string(),
            racial_broad: Some(BroadRace::Asian),
            racial_specific: Some("Chinese".to_string()),
            gender: Some(Gender::Female),
            continent: Some(Continent::Asia),
            country: Some("China".to_string()),
        };
        assert!(draft.complete().is_some());

        draft.country = None;
        assert!(draft.complete().is_none());
        assert_eq!(draft.missing_fields(), vec!["Country"]);
    }

    #[test]
    fn test_draft_complete_preserves_literal_values() {
        let draft = SubmissionDraft {
            age_input: "34".to_string(),
            income_input: "52000".to_string(),
            racial_broad: Some(BroadRace::Asian),
            racial_specific: Some("Chinese".to_string()),
            gender: Some(Gender::Female),
            continent: Some(Continent::Asia),
            country: Some("China".to_string()),
        };
        let row = draft.complete().unwrap();
        assert_eq!(row.age, 34);
        assert_eq!(row.income, 52_000);
        assert_eq!(row.racial_broad, BroadRace::Asian);
        assert_eq!(row.racial_specific, "Chinese");
        assert_eq!(row.gender, Gender::Female);
        assert_eq!(row.continent, Continent::Asia);
        assert_eq!(row.country, "China");
    }

    #[test]
    fn test_label_round_trip() {
        for race in BroadRace::all() {
            assert_eq!(BroadRace::from_label(race.label()), Some(*race));
        }
        for gender in Gender::all() {
            assert_eq!(Gender::from_label(gender.label()), Some(*gender));
        }
        for continent in Continent::all() {
            assert_eq!(Continent::from_label(continent.label()), Some(*continent));
        }
        assert_eq!(Continent::from_label("Atlantis"), None);
    }

    #[test]
    fn test_summary_statistics() {
        let rows = vec![
            Submission {
                age: 30,
                income: 40_000,
                racial_broad: BroadRace::Asian,
                racial_specific: "Chinese".to_string(),
                gender: Gender::Female,
                continent: Continent::Asia,
                country: "China".to_string(),
            },
            Submission {
                age: 50,
                income: 60_000,
                racial_broad: BroadRace::White,
                racial_specific: "Irish".to_string(),
                gender: Gender::Male,
                continent: Continent::Europe,
                country: "Ireland".to_string(),
            },
        ];
        let summary = DatasetSummary::compute(&rows);
        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.rows_by_race[&BroadRace::Asian], 1);
        assert_eq!(summary.age_range, Some((30, 50)));
        assert_eq!(summary.income_range, Some((40_000, 60_000)));
        assert_eq!(summary.mean_income, Some(50_000.0));

        let empty = DatasetSummary::compute(&[]);
        assert_eq!(empty.total_rows, 0);
        assert!(empty.age_range.is_none());
        assert!(empty.mean_income.is_none());
    }
}
