pub mod config;
pub mod import_client;
pub mod sheet;
