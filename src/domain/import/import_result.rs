// ============================================================
// IMPORT RESULT TYPES
// ============================================================
// Response shape owned by the external import endpoint. This side
// only deserializes and displays it.

use serde::{Deserialize, Serialize};

/// Per-row failure reported by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub row: usize,
    pub error: String,
}

/// Per-row warning reported by the server (e.g. a lead imported with
/// an unparseable registration date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningDetail {
    pub row: usize,
    pub name: String,
    pub warning: String,
}

/// Outcome of one batch submission, as returned by
/// `POST /api/external-leads/import`. Duplicate detection (same
/// name + phone inside a 3-month window) is the server's policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub imported: usize,
    pub duplicates: usize,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde(default)]
    pub warnings: Vec<WarningDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_default_when_absent() {
        let json = r#"{"imported":5,"duplicates":2,"errors":[]}"#;
        let result: ImportResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.imported, 5);
        assert_eq!(result.duplicates, 2);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }
}
