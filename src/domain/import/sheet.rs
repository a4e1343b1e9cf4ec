// ============================================================
// PARSED SHEET TYPES
// ============================================================
// A spreadsheet reduced to one header row plus string data rows,
// independent of whether it came from CSV or Excel

use serde::{Deserialize, Serialize};

/// One data row. `number` is the 1-indexed position in the original
/// file (header included, so the first data row is 2) and survives
/// empty-row skipping, keeping rejection reports addressable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRow {
    pub number: usize,
    pub cells: Vec<String>,
}

impl SheetRow {
    pub fn new(number: usize, cells: Vec<String>) -> Self {
        Self { number, cells }
    }

    /// A row with only empty/whitespace cells is not a data row.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.trim().is_empty())
    }
}

/// Header row plus data rows, as captured from the uploaded file.
/// Headers are never mutated after capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl ParsedSheet {
    pub fn new(headers: Vec<String>, rows: Vec<SheetRow>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_row_detection() {
        assert!(SheetRow::new(2, vec!["".into(), "   ".into()]).is_blank());
        assert!(!SheetRow::new(2, vec!["".into(), "x".into()]).is_blank());
    }
}
