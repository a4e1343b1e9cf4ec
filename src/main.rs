use std::sync::{Arc, Mutex};

use tracing::info;

use lead_importer::infrastructure::config::AppConfig;
use lead_importer::interfaces::http::start_server;
use lead_importer::interfaces::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    let state = Arc::new(
        AppState::from_config(&config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let logs = Arc::new(Mutex::new(Vec::new()));

    info!(
        host = %config.server.host,
        port = config.server.port,
        endpoint = %config.import.endpoint_base_url,
        "starting lead import service"
    );

    start_server(state, logs, &config.server.host, config.server.port)?.await
}
