use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::domain::error::AppError;
use crate::interfaces::state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub app: Arc<AppState>,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

#[derive(Deserialize)]
pub struct UploadQuery {
    /// Original file name; the extension picks the parser.
    pub name: String,
}

fn error_response(e: &AppError) -> HttpResponse {
    match e {
        AppError::ValidationError(_) | AppError::ParseError(_) => {
            HttpResponse::BadRequest().body(e.to_string())
        }
        AppError::StateError(_) => HttpResponse::Conflict().body(e.to_string()),
        AppError::TransportError(_) => HttpResponse::BadGateway().body(e.to_string()),
        _ => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

#[post("/leads/import/file")]
async fn upload_file(
    data: web::Data<HttpState>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "Import",
        &format!("Staging upload: {} ({} bytes)", query.name, body.len()),
    );

    let mut session = data.app.session.lock().await;
    match data.app.lead_import.stage_file(&mut session, &query.name, &body) {
        Ok(summary) => {
            add_log(
                &data.logs,
                "INFO",
                "Import",
                &format!(
                    "Preview ready: {} valid, {} rejected of {} rows",
                    summary.valid_count, summary.invalid_count, summary.total_rows
                ),
            );
            HttpResponse::Ok().json(summary)
        }
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Import",
                &format!("Upload rejected: {}", e),
            );
            error_response(&e)
        }
    }
}

#[get("/leads/import/preview")]
async fn get_preview(data: web::Data<HttpState>) -> impl Responder {
    let session = data.app.session.lock().await;
    match data.app.lead_import.preview(&session) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => error_response(&e),
    }
}

#[post("/leads/import/confirm")]
async fn confirm_import(data: web::Data<HttpState>) -> impl Responder {
    // Holding the session lock across the submission is what makes a
    // second confirm wait rather than race; it then fails the stage
    // guard instead of double-submitting.
    let mut session = data.app.session.lock().await;
    match data.app.lead_import.confirm(&mut session).await {
        Ok(report) => {
            add_log(
                &data.logs,
                "INFO",
                "Import",
                &format!("Import finished: {}", report.summary()),
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Import",
                &format!("Import failed: {}", e),
            );
            error_response(&e)
        }
    }
}

#[post("/leads/import/reset")]
async fn reset_session(data: web::Data<HttpState>) -> impl Responder {
    let mut session = data.app.session.lock().await;
    if session.stage == crate::domain::import::ImportStage::Importing {
        return error_response(&AppError::StateError(
            "an import is in progress".to_string(),
        ));
    }
    session.reset();
    add_log(&data.logs, "INFO", "Import", "Session reset");
    HttpResponse::Ok().json(serde_json::json!({ "stage": "upload" }))
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap().clone();
    HttpResponse::Ok().json(logs)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(
    app: Arc<AppState>,
    logs: Arc<Mutex<Vec<LogEntry>>>,
    host: &str,
    port: u16,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { app, logs });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // The admin UI is served from another origin

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(upload_file)
                .service(get_preview)
                .service(confirm_import)
                .service(reset_session)
                .service(get_logs)
                .service(health),
        )
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ring_is_bounded() {
        let logs = Mutex::new(Vec::new());
        for i in 0..150 {
            add_log(&logs, "INFO", "Test", &format!("entry {}", i));
        }

        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), 100);
        assert_eq!(logs[0].message, "entry 50");
        assert_eq!(logs[99].message, "entry 149");
    }
}
