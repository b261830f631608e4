// IncomeScope - core/store.rs
//
// The CSV-backed submissions table.
//
// Lifecycle mirrors the survey form: the table is loaded from disk once at
// startup, rows are only ever appended, and the whole file is rewritten on
// each submission. Rows written by the form always satisfy the cascade
// invariants (country belongs to continent, specific belongs to broad race);
// loading trusts the file and does not re-validate them.

use crate::core::model::{BroadRace, Continent, Gender, Submission};
use crate::util::constants;
use crate::util::error::StoreError;
use std::path::Path;

/// The in-memory submissions table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in submission order.
    pub rows: Vec<Submission>,
}

impl Dataset {
    /// Load a dataset from `path`.
    ///
    /// A missing file is a normal first run and yields an empty table.
    /// Malformed rows (wrong arity, non-numeric Age/Income, unknown enum
    /// labels) are skipped; each produces a non-fatal warning, capped at
    /// `MAX_LOAD_WARNINGS`. A wrong header is a hard error — the file is
    /// almost certainly not a submissions table and must not be rewritten.
    pub fn load(path: &Path) -> Result<(Dataset, Vec<String>), StoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No submissions file yet; starting empty");
            return Ok((Dataset::default(), Vec::new()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| map_csv_error(path, e))?;

        let headers = reader.headers().map_err(|e| map_csv_error(path, e))?;
        if !headers.iter().eq(constants::CSV_HEADER.iter().copied()) {
            return Err(StoreError::BadHeader {
                path: path.to_path_buf(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut rows = Vec::new();
        let mut warnings = Vec::new();
        let mut skipped = 0usize;

        for (i, record) in reader.records().enumerate() {
            // Header is line 1; the first record is line 2.
            let line = i + 2;
            let record = record.map_err(|e| map_csv_error(path, e))?;

            if rows.len() >= constants::MAX_DATASET_ROWS {
                return Err(StoreError::TooManyRows {
                    path: path.to_path_buf(),
                    max: constants::MAX_DATASET_ROWS,
                });
            }

            match parse_record(&record) {
                Ok(row) => rows.push(row),
                Err(reason) => {
                    skipped += 1;
                    if warnings.len() < constants::MAX_LOAD_WARNINGS {
                        warnings.push(format!(
                            "'{}' line {line}: {reason} — row skipped",
                            path.display()
                        ));
                    }
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(
                path = %path.display(),
                skipped,
                loaded = rows.len(),
                "Skipped malformed rows while loading submissions"
            );
        } else {
            tracing::info!(path = %path.display(), rows = rows.len(), "Submissions loaded");
        }

        Ok((Dataset { rows }, warnings))
    }

    /// Rewrite the whole table to `path`: header plus one record per row.
    ///
    /// This is a plain full rewrite, the same strategy the form has always
    /// used. Parent directories are created on first save.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(path).map_err(|e| map_csv_error(path, e))?;

        writer
            .write_record(constants::CSV_HEADER)
            .map_err(|e| map_csv_error(path, e))?;

        for row in &self.rows {
            writer
                .write_record([
                    row.age.to_string().as_str(),
                    row.income.to_string().as_str(),
                    row.racial_broad.label(),
                    &row.racial_specific,
                    row.gender.label(),
                    row.continent.label(),
                    &row.country,
                ])
                .map_err(|e| map_csv_error(path, e))?;
        }

        writer.flush().map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), rows = self.rows.len(), "Submissions saved");
        Ok(())
    }

    /// Append one submitted row and persist the table.
    ///
    /// The row stays in memory even if the rewrite fails, so a transient
    /// disk error does not silently discard a submission; the caller
    /// surfaces the error and may retry on the next submission.
    pub fn submit(&mut self, row: Submission, path: &Path) -> Result<(), StoreError> {
        self.rows.push(row);
        self.save(path)
    }
}

/// Parse one CSV record into a `Submission`, or explain why it is malformed.
fn parse_record(record: &csv::StringRecord) -> Result<Submission, String> {
    if record.len() != constants::CSV_HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            constants::CSV_HEADER.len(),
            record.len()
        ));
    }

    let age: u32 = record[0]
        .trim()
        .parse()
        .map_err(|_| format!("non-numeric Age '{}'", &record[0]))?;
    let income: u64 = record[1]
        .trim()
        .parse()
        .map_err(|_| format!("non-numeric Income '{}'", &record[1]))?;
    let racial_broad = BroadRace::from_label(&record[2])
        .ok_or_else(|| format!("unknown Racial_Broad '{}'", &record[2]))?;
    let gender =
        Gender::from_label(&record[4]).ok_or_else(|| format!("unknown Gender '{}'", &record[4]))?;
    let continent = Continent::from_label(&record[5])
        .ok_or_else(|| format!("unknown Continent '{}'", &record[5]))?;

    Ok(Submission {
        age,
        income,
        racial_broad,
        racial_specific: record[3].to_string(),
        gender,
        continent,
        country: record[6].to_string(),
    })
}

fn map_csv_error(path: &Path, e: csv::Error) -> StoreError {
    StoreError::Csv {
        path: path.to_path_buf(),
        source: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_row() -> Submission {
        Submission {
            age: 34,
            income: 52_000,
            racial_broad: BroadRace::Asian,
            racial_specific: "Chinese".to_string(),
            gender: Gender::Female,
            continent: Continent::Asia,
            country: "China".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let (dataset, warnings) = Dataset::load(&dir.path().join("none.csv")).unwrap();
        assert!(dataset.rows.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.csv");

        let dataset = Dataset {
            rows: vec![sample_row()],
        };
        dataset.save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(
            "Age,Income,Racial_Broad,Racial_Specific,Gender,Continent,Country\n"
        ));
        assert!(written.contains("34,52000,Asian,Chinese,Female,Asia,China"));

        let (loaded, warnings) = Dataset::load(&path).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(loaded.rows, dataset.rows);
    }

    #[test]
    fn test_submit_appends_exactly_one_row_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.csv");

        let mut dataset = Dataset::default();
        dataset.submit(sample_row(), &path).unwrap();
        assert_eq!(dataset.rows.len(), 1);

        let (reloaded, _) = Dataset::load(&path).unwrap();
        assert_eq!(reloaded.rows.len(), 1);
        assert_eq!(reloaded.rows[0], sample_row());
    }

    #[test]
    fn test_malformed_rows_are_skipped_with_warnings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.csv");
        std::fs::write(
            &path,
            "Age,Income,Racial_Broad,Racial_Specific,Gender,Continent,Country\n\
             34,52000,Asian,Chinese,Female,Asia,China\n\
             forty,52000,Asian,Chinese,Female,Asia,China\n\
             34,52000,Martian,Chinese,Female,Asia,China\n\
             29,48000,White,Irish,Male,Europe,Ireland\n",
        )
        .unwrap();

        let (dataset, warnings) = Dataset::load(&path).unwrap();
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("non-numeric Age"));
        assert!(warnings[1].contains("unknown Racial_Broad"));
    }

    #[test]
    fn test_wrong_header_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.csv");
        std::fs::write(&path, "timestamp,severity,message\n1,2,3\n").unwrap();

        let result = Dataset::load(&path);
        assert!(
            matches!(result, Err(StoreError::BadHeader { .. })),
            "expected BadHeader, got {result:?}"
        );
    }

    #[test]
    fn test_quoted_fields_survive_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.csv");

        let mut row = sample_row();
        row.racial_broad = BroadRace::Indigenous;
        row.racial_specific = "First Nations (Canada)".to_string();
        row.continent = Continent::NorthAmerica;
        row.country = "Saint Vincent and the Grenadines".to_string();

        let dataset = Dataset {
            rows: vec![row.clone()],
        };
        dataset.save(&path).unwrap();
        let (loaded, _) = Dataset::load(&path).unwrap();
        assert_eq!(loaded.rows[0], row);
    }
}
