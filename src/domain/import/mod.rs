// ============================================================
// LEAD IMPORT DOMAIN LAYER
// ============================================================
// Core types and invariants for the bulk lead-import pipeline
// No I/O, no async, no external service knowledge

mod canonical_field;
mod import_result;
mod mapped_record;
mod session;
mod sheet;

pub use canonical_field::CanonicalField;
pub use import_result::{ErrorDetail, ImportResult, WarningDetail};
pub use mapped_record::{InvalidRowReport, MappedLeadRecord, RejectReason};
pub use session::{ImportSession, ImportStage};
pub use sheet::{ParsedSheet, SheetRow};
