// ============================================================
// RESULT AGGREGATOR
// ============================================================
// Display adapter over the server's import result: full counts plus
// bounded error/warning lists for the UI. No business logic here.

use serde::{Deserialize, Serialize};

use crate::domain::import::{ErrorDetail, ImportResult, WarningDetail};

/// How many error/warning entries are shown in full detail.
pub const DETAIL_CAP: usize = 10;

/// User-facing view of one completed import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub duplicates: usize,
    pub error_count: usize,
    pub warning_count: usize,

    /// At most [`DETAIL_CAP`] entries each; the remainder is only
    /// counted, not listed.
    pub errors: Vec<ErrorDetail>,
    pub warnings: Vec<WarningDetail>,
    pub truncated_errors: usize,
    pub truncated_warnings: usize,
}

impl ImportReport {
    pub fn from_result(result: &ImportResult) -> Self {
        let error_count = result.errors.len();
        let warning_count = result.warnings.len();

        Self {
            imported: result.imported,
            duplicates: result.duplicates,
            error_count,
            warning_count,
            errors: result.errors.iter().take(DETAIL_CAP).cloned().collect(),
            warnings: result.warnings.iter().take(DETAIL_CAP).cloned().collect(),
            truncated_errors: error_count.saturating_sub(DETAIL_CAP),
            truncated_warnings: warning_count.saturating_sub(DETAIL_CAP),
        }
    }

    /// One-line summary for logs and the UI banner.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} imported, {} duplicates, {} errors, {} warnings",
            self.imported, self.duplicates, self.error_count, self.warning_count
        );
        if self.truncated_errors > 0 {
            line.push_str(&format!(" (and {} more errors not shown)", self.truncated_errors));
        }
        if self.truncated_warnings > 0 {
            line.push_str(&format!(
                " (and {} more warnings not shown)",
                self.truncated_warnings
            ));
        }
        line
    }
}

impl From<&ImportResult> for ImportReport {
    fn from(result: &ImportResult) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(errors: usize, warnings: usize) -> ImportResult {
        ImportResult {
            imported: 3,
            duplicates: 1,
            errors: (0..errors)
                .map(|i| ErrorDetail {
                    row: i + 2,
                    error: format!("error {}", i),
                })
                .collect(),
            warnings: (0..warnings)
                .map(|i| WarningDetail {
                    row: i + 2,
                    name: format!("lead {}", i),
                    warning: format!("warning {}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_counts_pass_through() {
        let report = ImportReport::from_result(&result_with(0, 0));
        assert_eq!(report.imported, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.error_count, 0);
        assert_eq!(report.warning_count, 0);
        assert_eq!(report.summary(), "3 imported, 1 duplicates, 0 errors, 0 warnings");
    }

    #[test]
    fn test_detail_lists_are_capped() {
        let report = ImportReport::from_result(&result_with(14, 11));

        assert_eq!(report.errors.len(), DETAIL_CAP);
        assert_eq!(report.warnings.len(), DETAIL_CAP);
        assert_eq!(report.error_count, 14);
        assert_eq!(report.warning_count, 11);
        assert_eq!(report.truncated_errors, 4);
        assert_eq!(report.truncated_warnings, 1);
        assert!(report.summary().contains("and 4 more errors"));
        assert!(report.summary().contains("and 1 more warnings"));
    }

    #[test]
    fn test_under_cap_is_not_truncated() {
        let report = ImportReport::from_result(&result_with(2, 0));
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.truncated_errors, 0);
        assert!(!report.summary().contains("more"));
    }
}
