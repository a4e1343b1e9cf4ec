// ============================================================
// CSV PARSER
// ============================================================
// Parse uploaded CSV bytes with delimiter and encoding detection

use csv::{ReaderBuilder, Trim};

use crate::domain::error::AppError;
use crate::domain::import::{ParsedSheet, SheetRow};

/// CSV parser for uploaded files.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse uploaded bytes with automatic delimiter detection.
    pub fn parse_bytes_auto_detect(bytes: &[u8]) -> Result<ParsedSheet, AppError> {
        let content = decode_with_fallback(bytes);
        let delimiter = Self::detect_delimiter(&content);
        Self::default().with_delimiter(delimiter).parse_content(&content)
    }

    /// Parse CSV content from a string. The first record is the
    /// header row; data rows are numbered from 2 in file order.
    pub fn parse_content(&self, content: &str) -> Result<ParsedSheet, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let number = index + 2;
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", number, e))
            })?;
            rows.push(SheetRow::new(
                number,
                record.iter().map(|cell| cell.to_string()).collect(),
            ));
        }

        Ok(ParsedSheet::new(headers, rows))
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe).
    /// Scores each candidate by per-line frequency and consistency
    /// over the first sample lines.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.chars().filter(|&c| c as u8 == delimiter).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Decode uploaded bytes: UTF-8 first, then windows-1252 (the usual
/// encoding of Excel-exported CSVs from office machines).
fn decode_with_fallback(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        // Excel exports prepend a BOM; it would corrupt the first header.
        Ok(content) => content.strip_prefix('\u{feff}').unwrap_or(content).to_string(),
        Err(_) => {
            let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "Nombre,Teléfono\nAna,111\nLuis,222";
        let sheet = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(sheet.headers, vec!["Nombre", "Teléfono"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].number, 2);
        assert_eq!(sheet.rows[0].cells, vec!["Ana", "111"]);
        assert_eq!(sheet.rows[1].number, 3);
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvParser::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvParser::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvParser::detect_delimiter("a|b|c\nd|e|f"), b'|');
    }

    #[test]
    fn test_auto_detect_semicolon_file() {
        let bytes = "Nombre;Tel\nAna;111".as_bytes();
        let sheet = CsvParser::parse_bytes_auto_detect(bytes).unwrap();
        assert_eq!(sheet.headers, vec!["Nombre", "Tel"]);
        assert_eq!(sheet.rows[0].cells, vec!["Ana", "111"]);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let bytes = b"\xEF\xBB\xBFNombre,Tel\nAna,111";
        let sheet = CsvParser::parse_bytes_auto_detect(bytes).unwrap();
        assert_eq!(sheet.headers[0], "Nombre");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "Pérez" encoded as windows-1252: 0xE9 for é
        let bytes = b"Nombre,Tel\nP\xE9rez,111";
        let sheet = CsvParser::parse_bytes_auto_detect(bytes).unwrap();
        assert_eq!(sheet.rows[0].cells[0], "Pérez");
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let sheet = CsvParser::new().parse_content("Nombre,Tel\n").unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet.headers.len(), 2);
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let content = "a,b,c\n1,2\n1,2,3,4";
        let sheet = CsvParser::new().parse_content(content).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].cells.len(), 2);
        assert_eq!(sheet.rows[1].cells.len(), 4);
    }
}
