// ============================================================
// CANONICAL FIELD ENUM
// ============================================================
// Closed set of lead attributes an import column can map to

use serde::{Deserialize, Serialize};

/// Target attribute of a lead record. Every recognized spreadsheet
/// column maps to exactly one of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CanonicalField {
    RegistrationDate,
    FullName,
    FirstName,
    LastName,
    Phone,
    ContractDuration,
    MoveInDateText,
    HasPetsText,
    BudgetText,
    BedroomsText,
    DesiredProperty,
    PreferredNeighborhood,
    PrimarySellerName,
    SecondarySellerName,
    Notes,
    Status,
    Email,
}

impl CanonicalField {
    /// Key used when a lead record is sent to the import endpoint.
    pub fn wire_key(&self) -> &'static str {
        match self {
            CanonicalField::RegistrationDate => "registration_date",
            CanonicalField::FullName => "full_name",
            CanonicalField::FirstName => "first_name",
            CanonicalField::LastName => "last_name",
            CanonicalField::Phone => "phone",
            CanonicalField::ContractDuration => "contract_duration",
            CanonicalField::MoveInDateText => "move_in_date",
            CanonicalField::HasPetsText => "has_pets",
            CanonicalField::BudgetText => "budget",
            CanonicalField::BedroomsText => "bedrooms",
            CanonicalField::DesiredProperty => "desired_property",
            CanonicalField::PreferredNeighborhood => "preferred_neighborhood",
            CanonicalField::PrimarySellerName => "primary_seller",
            CanonicalField::SecondarySellerName => "secondary_seller",
            CanonicalField::Notes => "notes",
            CanonicalField::Status => "status",
            CanonicalField::Email => "email",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_key())
    }
}
