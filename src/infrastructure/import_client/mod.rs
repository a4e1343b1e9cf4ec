// ============================================================
// IMPORT ENDPOINT CLIENT
// ============================================================
// Client side of the external lead-persistence endpoint. The
// endpoint owns deduplication and storage; this side only submits
// batches and decodes the result shape.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::domain::error::{AppError, Result};
use crate::domain::import::{ImportResult, MappedLeadRecord};

/// Seam between the import workflow and the external endpoint, so
/// the state machine is testable without a network.
#[async_trait]
pub trait ImportGateway: Send + Sync {
    async fn submit(&self, leads: &[MappedLeadRecord]) -> Result<ImportResult>;
}

/// reqwest-backed gateway for `POST {base}/api/external-leads/import`.
pub struct HttpImportClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpImportClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ImportGateway for HttpImportClient {
    async fn submit(&self, leads: &[MappedLeadRecord]) -> Result<ImportResult> {
        let url = format!("{}/api/external-leads/import", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "leads": leads }))
            .send()
            .await
            .map_err(|e| AppError::TransportError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::TransportError(format!(
                "Import endpoint error ({}): {}",
                status, text
            )));
        }

        response
            .json::<ImportResult>()
            .await
            .map_err(|e| AppError::TransportError(format!("Failed to parse response: {}", e)))
    }
}
