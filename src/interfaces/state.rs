use std::sync::Arc;

use tokio::sync::Mutex as AsyncMutex;

use crate::application::LeadImportUseCase;
use crate::domain::import::ImportSession;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::import_client::{HttpImportClient, ImportGateway};

/// Shared service state: the import workflow plus the single session
/// it operates on. Every handler locks the session for the duration
/// of its operation, so at most one submission is ever outstanding.
pub struct AppState {
    pub lead_import: LeadImportUseCase,
    pub session: AsyncMutex<ImportSession>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> crate::domain::error::Result<Self> {
        let gateway: Arc<dyn ImportGateway> = Arc::new(HttpImportClient::new(
            &config.import.endpoint_base_url,
            config.import.request_timeout_secs,
        )?);

        Ok(Self {
            lead_import: LeadImportUseCase::new(gateway, config.import.preview_rows),
            session: AsyncMutex::new(ImportSession::new()),
        })
    }
}
