// IncomeScope - core/export.rs
//
// JSON export of the currently filtered rows.
// Core layer: writes to any Write trait object. The submissions CSV itself
// is owned by core::store; this is the share-a-snapshot path.

use crate::core::model::Submission;
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export `rows` as a pretty-printed JSON array of objects keyed by the
/// CSV column names. Returns the number of rows written.
pub fn export_json<W: Write>(
    rows: &[Submission],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    if rows.len() > constants::MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count: rows.len(),
            max: constants::MAX_EXPORT_ROWS,
        });
    }

    serde_json::to_writer_pretty(writer, rows).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{BroadRace, Continent, Gender};
    use std::path::PathBuf;

    #[test]
    fn test_json_export_uses_column_names() {
        let rows = vec![Submission {
            age: 34,
            income: 52_000,
            racial_broad: BroadRace::Asian,
            racial_specific: "Chinese".to_string(),
            gender: Gender::Female,
            continent: Continent::Asia,
            country: "China".to_string(),
        }];
        let mut buf = Vec::new();
        let count = export_json(&rows, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"Age\": 34"));
        assert!(output.contains("\"Racial_Broad\": \"Asian\""));
        assert!(output.contains("\"Country\": \"China\""));
    }

    #[test]
    fn test_json_export_empty_is_empty_array() {
        let mut buf = Vec::new();
        let count = export_json(&[], &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "[]");
    }
}
