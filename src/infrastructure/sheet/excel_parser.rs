// ============================================================
// EXCEL PARSER
// ============================================================
// Reduce an uploaded .xlsx/.xls workbook to its first worksheet:
// one header row plus stringified data rows

use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};

use crate::domain::error::AppError;
use crate::domain::import::{ParsedSheet, SheetRow};

pub struct ExcelParser;

impl ExcelParser {
    /// Parse uploaded `.xlsx` bytes.
    pub fn parse_xlsx_bytes(bytes: &[u8]) -> Result<ParsedSheet, AppError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;
        let range = first_worksheet_range(&mut workbook)?;
        range_to_sheet(&range)
    }

    /// Parse uploaded legacy `.xls` bytes.
    pub fn parse_xls_bytes(bytes: &[u8]) -> Result<ParsedSheet, AppError> {
        let mut workbook: Xls<_> = Xls::new(Cursor::new(bytes))
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;
        let range = first_worksheet_range(&mut workbook)?;
        range_to_sheet(&range)
    }
}

fn first_worksheet_range<RS, R>(workbook: &mut R) -> Result<Range<Data>, AppError>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
        .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))
}

/// Convert the used cell range into headers plus numbered data rows.
/// The first row of the range is the header row; data rows keep their
/// 1-indexed file position even when blank rows are interleaved.
fn range_to_sheet(range: &Range<Data>) -> Result<ParsedSheet, AppError> {
    let mut rows_iter = range.rows();

    let headers = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_string).collect::<Vec<_>>(),
        None => return Err(AppError::ParseError("Worksheet is empty".to_string())),
    };

    let rows = rows_iter
        .enumerate()
        .map(|(index, row)| SheetRow::new(index + 2, row.iter().map(cell_to_string).collect()))
        .collect();

    Ok(ParsedSheet::new(headers, rows))
}

fn cell_to_string(cell: &Data) -> String {
    cell.as_string()
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}", cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_from(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let max_row = cells.iter().map(|(r, _, _)| *r).max().unwrap_or(0);
        let max_col = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
        let mut range = Range::new((0, 0), (max_row, max_col));
        for (row, col, value) in cells {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    #[test]
    fn test_range_to_sheet_splits_header_and_rows() {
        let range = range_from(&[
            (0, 0, Data::String("Nombre Completo".into())),
            (0, 1, Data::String("Teléfono".into())),
            (1, 0, Data::String("Juan Pérez".into())),
            (1, 1, Data::String("9981234567".into())),
        ]);

        let sheet = range_to_sheet(&range).unwrap();
        assert_eq!(sheet.headers, vec!["Nombre Completo", "Teléfono"]);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].number, 2);
        assert_eq!(sheet.rows[0].cells, vec!["Juan Pérez", "9981234567"]);
    }

    #[test]
    fn test_numeric_cells_are_stringified() {
        let range = range_from(&[
            (0, 0, Data::String("Teléfono".into())),
            (1, 0, Data::Float(9981234567.0)),
            (2, 0, Data::Int(42)),
        ]);

        let sheet = range_to_sheet(&range).unwrap();
        assert_eq!(sheet.rows[0].cells[0], "9981234567");
        assert_eq!(sheet.rows[1].cells[0], "42");
    }

    #[test]
    fn test_corrupt_bytes_are_a_parse_error() {
        let result = ExcelParser::parse_xlsx_bytes(b"definitely not a zip");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }
}
