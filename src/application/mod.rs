pub mod use_cases;

pub use use_cases::field_classifier::FieldClassifier;
pub use use_cases::lead_import::{LeadImportUseCase, PreviewSummary};
pub use use_cases::result_aggregator::ImportReport;
pub use use_cases::row_mapper::RowMapper;
