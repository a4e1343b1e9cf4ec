pub mod error;

// Lead import pipeline types
pub mod import;
