pub mod field_classifier;
pub mod header_normalizer;
pub mod lead_import;
pub mod result_aggregator;
pub mod row_mapper;
pub mod row_validator;
