// ============================================================
// IMPORT SESSION
// ============================================================
// State container for the upload → preview → importing → complete
// workflow. Transition rules live in the lead-import use case; this
// type only holds the data each stage is allowed to carry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ImportResult, InvalidRowReport, MappedLeadRecord};

/// Workflow stage. Modeled as an explicit enum rather than boolean
/// flags so "one outstanding submission" and "failure returns to
/// preview" are enforced structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStage {
    Upload,
    Preview,
    Importing,
    Complete,
}

impl std::fmt::Display for ImportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportStage::Upload => write!(f, "upload"),
            ImportStage::Preview => write!(f, "preview"),
            ImportStage::Importing => write!(f, "importing"),
            ImportStage::Complete => write!(f, "complete"),
        }
    }
}

/// One import workflow instance. The whole service holds a single
/// session at a time, guarded by an async mutex in the HTTP state.
#[derive(Debug)]
pub struct ImportSession {
    pub id: Uuid,
    pub stage: ImportStage,

    /// Name of the staged file, kept for reporting.
    pub file_name: Option<String>,

    /// Every mapped data row, in file order. The valid/invalid
    /// partitions below always cover this list exactly.
    pub records: Vec<MappedLeadRecord>,

    pub valid: Vec<MappedLeadRecord>,
    pub invalid: Vec<InvalidRowReport>,

    /// Raw server response, present only once `stage == Complete`.
    pub result: Option<ImportResult>,
}

impl ImportSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: ImportStage::Upload,
            file_name: None,
            records: Vec::new(),
            valid: Vec::new(),
            invalid: Vec::new(),
            result: None,
        }
    }

    /// Drop all staged data and return to the upload stage under a
    /// fresh session id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new()
    }
}
