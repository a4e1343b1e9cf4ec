// ============================================================
// ROW VALIDATOR
// ============================================================
// Minimum-completeness check for a mapped row. Pure predicate, no
// I/O, so it can be exercised directly against synthetic records.

use crate::domain::import::{CanonicalField, InvalidRowReport, MappedLeadRecord, RejectReason};

/// A row is importable iff it carries some identity (full name,
/// first name, or phone) AND a phone number.
pub fn validate(record: &MappedLeadRecord) -> Result<(), RejectReason> {
    let has_name = record.has(CanonicalField::FullName) || record.has(CanonicalField::FirstName);
    let has_phone = record.has(CanonicalField::Phone);

    if !has_name && !has_phone {
        return Err(RejectReason::MissingNameAndPhone);
    }
    if !has_phone {
        return Err(RejectReason::MissingPhone);
    }
    Ok(())
}

/// Split mapped records into the valid set and the rejection reports.
/// Rows are classified independently; a rejection never aborts the
/// batch, and every record lands in exactly one of the two outputs.
pub fn partition(
    records: Vec<MappedLeadRecord>,
) -> (Vec<MappedLeadRecord>, Vec<InvalidRowReport>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for record in records {
        match validate(&record) {
            Ok(()) => valid.push(record),
            Err(reason) => invalid.push(InvalidRowReport {
                row: record.source_row,
                reason,
            }),
        }
    }

    (valid, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, fields: &[(CanonicalField, &str)]) -> MappedLeadRecord {
        let mut record = MappedLeadRecord::new(row);
        for (field, value) in fields {
            record.insert_first(*field, value.to_string());
        }
        record
    }

    #[test]
    fn test_name_and_phone_is_valid() {
        let r = record(2, &[(CanonicalField::FullName, "Juan"), (CanonicalField::Phone, "111")]);
        assert!(validate(&r).is_ok());

        let r = record(2, &[(CanonicalField::FirstName, "Ana"), (CanonicalField::Phone, "111")]);
        assert!(validate(&r).is_ok());
    }

    #[test]
    fn test_phone_alone_is_valid() {
        let r = record(2, &[(CanonicalField::Phone, "9981234567")]);
        assert!(validate(&r).is_ok());
    }

    #[test]
    fn test_neither_name_nor_phone() {
        let r = record(3, &[(CanonicalField::Email, "ana@example.com")]);
        assert_eq!(validate(&r), Err(RejectReason::MissingNameAndPhone));

        let empty = record(4, &[]);
        assert_eq!(validate(&empty), Err(RejectReason::MissingNameAndPhone));
    }

    #[test]
    fn test_name_without_phone() {
        let r = record(5, &[(CanonicalField::FullName, "Juan Pérez")]);
        assert_eq!(validate(&r), Err(RejectReason::MissingPhone));

        // Last name alone is not identity for this check.
        let r = record(6, &[(CanonicalField::LastName, "Pérez")]);
        assert_eq!(validate(&r), Err(RejectReason::MissingNameAndPhone));
    }

    #[test]
    fn test_partition_covers_every_record() {
        let records = vec![
            record(2, &[(CanonicalField::FullName, "A"), (CanonicalField::Phone, "1")]),
            record(3, &[(CanonicalField::FullName, "B")]),
            record(4, &[(CanonicalField::Notes, "hola")]),
            record(5, &[(CanonicalField::Phone, "2")]),
        ];
        let total = records.len();

        let (valid, invalid) = partition(records);
        assert_eq!(valid.len() + invalid.len(), total);
        assert_eq!(valid.len(), 2);
        assert_eq!(invalid[0].row, 3);
        assert_eq!(invalid[0].reason, RejectReason::MissingPhone);
        assert_eq!(invalid[1].row, 4);
        assert_eq!(invalid[1].reason, RejectReason::MissingNameAndPhone);
    }
}
