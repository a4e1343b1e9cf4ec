// ============================================================
// MAPPED LEAD RECORD
// ============================================================
// One spreadsheet data row keyed by canonical fields, plus the
// rejection types produced when a row cannot be imported

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::CanonicalField;

/// A data row after column mapping. Created once per row and
/// immutable afterwards: it is either promoted into the valid set or
/// demoted into an [`InvalidRowReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedLeadRecord {
    /// 1-indexed source row, header-adjusted (first data row is 2).
    /// Used for every user-facing rejection and server error report.
    pub source_row: usize,

    /// Raw trimmed cell values keyed by canonical field. Only fields
    /// for which a non-empty cell was found are present.
    pub values: BTreeMap<CanonicalField, String>,
}

impl MappedLeadRecord {
    pub fn new(source_row: usize) -> Self {
        Self {
            source_row,
            values: BTreeMap::new(),
        }
    }

    /// Record a value for a field. The first (leftmost) column wins:
    /// a later column classified to the same field never overwrites.
    pub fn insert_first(&mut self, field: CanonicalField, value: String) {
        self.values.entry(field).or_insert(value);
    }

    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.values.get(&field).map(|v| v.as_str())
    }

    pub fn has(&self, field: CanonicalField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// The import endpoint expects a flat object per lead: `row` plus one
// snake_case key per populated canonical field.
impl Serialize for MappedLeadRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("row", &self.source_row)?;
        for (field, value) in &self.values {
            map.serialize_entry(field.wire_key(), value)?;
        }
        map.end()
    }
}

/// Why a row was excluded from the import batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    #[serde(rename = "missing name and phone")]
    MissingNameAndPhone,
    #[serde(rename = "missing phone number")]
    MissingPhone,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingNameAndPhone => "missing name and phone",
            RejectReason::MissingPhone => "missing phone number",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rejection surfaced to the user. Never transmitted to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRowReport {
    pub row: usize,
    pub reason: RejectReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_wins() {
        let mut record = MappedLeadRecord::new(2);
        record.insert_first(CanonicalField::Phone, "111".to_string());
        record.insert_first(CanonicalField::Phone, "222".to_string());

        assert_eq!(record.get(CanonicalField::Phone), Some("111"));
    }

    #[test]
    fn test_wire_shape_is_flat() {
        let mut record = MappedLeadRecord::new(4);
        record.insert_first(CanonicalField::FullName, "Juan Pérez".to_string());
        record.insert_first(CanonicalField::Phone, "9981234567".to_string());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["row"], 4);
        assert_eq!(json["full_name"], "Juan Pérez");
        assert_eq!(json["phone"], "9981234567");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_reject_reason_strings() {
        assert_eq!(
            RejectReason::MissingNameAndPhone.to_string(),
            "missing name and phone"
        );
        assert_eq!(RejectReason::MissingPhone.to_string(), "missing phone number");

        let report = InvalidRowReport {
            row: 7,
            reason: RejectReason::MissingPhone,
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["reason"], "missing phone number");
    }
}
