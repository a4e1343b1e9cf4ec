// ============================================================
// ROW MAPPER
// ============================================================
// Pair every cell of a data row with the canonical field assigned to
// its column, producing one MappedLeadRecord per row

use super::field_classifier::FieldClassifier;
use crate::domain::import::{CanonicalField, MappedLeadRecord, ParsedSheet};

/// Maps sheet rows into canonical lead records. Columns are
/// classified once from the header row; unrecognized columns and
/// empty cells are skipped.
pub struct RowMapper {
    classifier: &'static FieldClassifier,
}

impl RowMapper {
    pub fn new() -> Self {
        Self {
            classifier: FieldClassifier::shared(),
        }
    }

    /// Classify each header column. `None` marks a column that no
    /// synonym recognized; its cells are dropped from the mapping.
    pub fn map_columns(&self, headers: &[String]) -> Vec<Option<CanonicalField>> {
        headers
            .iter()
            .map(|header| self.classifier.classify(header))
            .collect()
    }

    /// Map every data row of a parsed sheet. Blank rows are skipped;
    /// everything else becomes a record, even when no column carried
    /// a value, so the validator can count it.
    pub fn map_sheet(&self, sheet: &ParsedSheet) -> Vec<MappedLeadRecord> {
        let columns = self.map_columns(&sheet.headers);

        sheet
            .rows
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| {
                let mut record = MappedLeadRecord::new(row.number);
                for (cell, column) in row.cells.iter().zip(columns.iter()) {
                    let field = match column {
                        Some(field) => *field,
                        None => continue,
                    };
                    let value = cell.trim();
                    if value.is_empty() {
                        continue;
                    }
                    record.insert_first(field, value.to_string());
                }
                record
            })
            .collect()
    }
}

impl Default for RowMapper {
    fn default() -> Self {
        Self::new()
    }
}
