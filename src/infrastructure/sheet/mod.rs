// ============================================================
// SHEET INFRASTRUCTURE LAYER
// ============================================================
// File-format plumbing: CSV and Excel uploads reduced to the common
// ParsedSheet shape the mapping pipeline consumes

mod csv_parser;
mod excel_parser;

pub use csv_parser::CsvParser;
pub use excel_parser::ExcelParser;

use crate::domain::error::AppError;
use crate::domain::import::ParsedSheet;

/// Parse an uploaded file by extension: `.csv`, `.xls`, or `.xlsx`
/// (unknown extensions are treated as `.xlsx`, the common export
/// format).
pub fn parse_upload(file_name: &str, bytes: &[u8]) -> Result<ParsedSheet, AppError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" => CsvParser::parse_bytes_auto_detect(bytes),
        "xls" => ExcelParser::parse_xls_bytes(bytes),
        _ => ExcelParser::parse_xlsx_bytes(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_dispatch_by_extension() {
        let sheet = parse_upload("leads.CSV", b"Nombre,Tel\nAna,111").unwrap();
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_xlsx() {
        let result = parse_upload("leads.bin", b"not a workbook");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
