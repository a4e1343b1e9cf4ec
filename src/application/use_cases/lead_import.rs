// ============================================================
// LEAD IMPORT USE CASE
// ============================================================
// Drives the upload → preview → importing → complete workflow:
// parse the uploaded sheet, map and validate rows, stage a preview,
// and submit the valid set to the external import endpoint.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::result_aggregator::ImportReport;
use super::row_mapper::RowMapper;
use super::row_validator;
use crate::domain::error::{AppError, Result};
use crate::domain::import::{ImportSession, ImportStage, InvalidRowReport, MappedLeadRecord};
use crate::infrastructure::import_client::ImportGateway;
use crate::infrastructure::sheet::parse_upload;

/// What the UI sees after staging a file: the partition counts, the
/// rejections, and a bounded slice of the valid rows. The full valid
/// set stays in the session and is what confirm submits.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSummary {
    pub session_id: Uuid,
    pub stage: ImportStage,
    pub file_name: String,
    pub total_rows: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub invalid: Vec<InvalidRowReport>,
    pub preview: Vec<MappedLeadRecord>,
}

pub struct LeadImportUseCase {
    gateway: Arc<dyn ImportGateway>,
    mapper: RowMapper,
    preview_rows: usize,
}

impl LeadImportUseCase {
    pub fn new(gateway: Arc<dyn ImportGateway>, preview_rows: usize) -> Self {
        Self {
            gateway,
            mapper: RowMapper::new(),
            preview_rows,
        }
    }

    /// Parse and stage an uploaded file. On success the session moves
    /// to `Preview`; on any refusal (unreadable file, no data rows,
    /// nothing importable) it returns to a clean `Upload` so nothing
    /// half-staged survives.
    pub fn stage_file(
        &self,
        session: &mut ImportSession,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<PreviewSummary> {
        if session.stage == ImportStage::Importing {
            return Err(AppError::StateError(
                "an import is in progress; wait for it to finish".to_string(),
            ));
        }

        let sheet = match parse_upload(file_name, bytes) {
            Ok(sheet) => sheet,
            Err(e) => {
                session.reset();
                return Err(e);
            }
        };

        let records = self.mapper.map_sheet(&sheet);
        if records.is_empty() {
            session.reset();
            warn!(file = file_name, "rejected upload: no data rows");
            return Err(AppError::ValidationError(
                "file contains no data rows".to_string(),
            ));
        }

        let total_rows = records.len();
        let (valid, invalid) = row_validator::partition(records.clone());

        if valid.is_empty() {
            session.reset();
            warn!(
                file = file_name,
                rejected = invalid.len(),
                "rejected upload: no importable rows"
            );
            // Keep the refusal explainable row by row.
            let detail: Vec<String> = invalid
                .iter()
                .take(5)
                .map(|r| format!("row {}: {}", r.row, r.reason))
                .collect();
            return Err(AppError::ValidationError(format!(
                "no importable rows ({} rejected): {}",
                invalid.len(),
                detail.join("; ")
            )));
        }

        info!(
            file = file_name,
            total = total_rows,
            valid = valid.len(),
            invalid = invalid.len(),
            "staged import preview"
        );

        session.reset();
        session.stage = ImportStage::Preview;
        session.file_name = Some(file_name.to_string());
        session.records = records;
        session.valid = valid;
        session.invalid = invalid;

        Ok(self.summarize(session))
    }

    /// Current preview. Only meaningful once a file is staged.
    pub fn preview(&self, session: &ImportSession) -> Result<PreviewSummary> {
        match session.stage {
            ImportStage::Upload => Err(AppError::StateError(
                "no file has been staged".to_string(),
            )),
            _ => Ok(self.summarize(session)),
        }
    }

    /// Submit the staged valid set. The session sits in `Importing`
    /// for the duration of the call; a server failure puts it back in
    /// `Preview` with the same valid rows so the user can retry
    /// without re-uploading.
    pub async fn confirm(&self, session: &mut ImportSession) -> Result<ImportReport> {
        match session.stage {
            ImportStage::Preview => {}
            ImportStage::Importing => {
                return Err(AppError::StateError(
                    "an import is already in progress".to_string(),
                ));
            }
            _ => {
                return Err(AppError::StateError(
                    "no staged preview to confirm".to_string(),
                ));
            }
        }

        session.stage = ImportStage::Importing;
        info!(leads = session.valid.len(), "submitting import batch");

        match self.gateway.submit(&session.valid).await {
            Ok(result) => {
                let report = ImportReport::from_result(&result);
                info!("import complete: {}", report.summary());
                session.result = Some(result);
                session.stage = ImportStage::Complete;
                Ok(report)
            }
            Err(e) => {
                // Valid rows stay staged; only the stage reverts.
                warn!("import submission failed: {}", e);
                session.stage = ImportStage::Preview;
                Err(e)
            }
        }
    }

    /// Report for a completed import.
    pub fn report(&self, session: &ImportSession) -> Result<ImportReport> {
        session
            .result
            .as_ref()
            .map(ImportReport::from_result)
            .ok_or_else(|| AppError::StateError("no completed import".to_string()))
    }

    fn summarize(&self, session: &ImportSession) -> PreviewSummary {
        PreviewSummary {
            session_id: session.id,
            stage: session.stage,
            file_name: session.file_name.clone().unwrap_or_default(),
            total_rows: session.records.len(),
            valid_count: session.valid.len(),
            invalid_count: session.invalid.len(),
            invalid: session.invalid.clone(),
            preview: session.valid.iter().take(self.preview_rows).cloned().collect(),
        }
    }
}
