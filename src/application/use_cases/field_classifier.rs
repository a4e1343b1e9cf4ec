// ============================================================
// FIELD CLASSIFIER
// ============================================================
// Map a raw spreadsheet header to a canonical lead field using an
// ordered table of multilingual synonym patterns. First entry in
// table order wins; historical import files must keep classifying
// identically, so this is deliberately NOT longest-match.

use once_cell::sync::Lazy;

use super::header_normalizer::normalize;
use crate::domain::import::CanonicalField;

/// A synonym for one canonical field.
#[derive(Debug, Clone, Copy)]
enum Synonym {
    /// Matches when the normalized header equals the pattern.
    Exact(&'static str),
    /// Matches when the normalized header contains the pattern.
    Contains(&'static str),
}

use Synonym::{Contains, Exact};

/// Ordered synonym table. Headers are matched top to bottom, so the
/// relative order of overlapping entries matters: FullName must come
/// before FirstName, and the bare "nombre" synonym is exact so
/// decorated name headers never collapse into FirstName.
static PATTERN_TABLE: &[(CanonicalField, &[Synonym])] = &[
    (
        CanonicalField::RegistrationDate,
        &[
            Contains("fecha registro"),
            Contains("fecha de registro"),
            Contains("registration date"),
            Contains("date registered"),
            Contains("fecha"),
        ],
    ),
    (
        CanonicalField::FullName,
        &[
            Contains("nombre completo"),
            Contains("full name"),
            Contains("nombre y apellido"),
        ],
    ),
    (
        CanonicalField::FirstName,
        &[
            Exact("nombre"),
            Contains("first name"),
            Contains("primer nombre"),
        ],
    ),
    (
        CanonicalField::LastName,
        &[
            Contains("apellido"),
            Contains("last name"),
            Contains("apellidos"),
        ],
    ),
    (
        CanonicalField::Phone,
        &[
            Contains("telefono"),
            Contains("celular"),
            Contains("phone"),
            Contains("tel"),
            Contains("movil"),
            Contains("cel"),
        ],
    ),
    (
        CanonicalField::ContractDuration,
        &[
            Contains("duracion"),
            Contains("contrato"),
            Contains("contract duration"),
            Contains("meses"),
        ],
    ),
    (
        CanonicalField::MoveInDateText,
        &[
            Contains("entrada"),
            Contains("check in"),
            Contains("move in"),
            Contains("mudanza"),
            Contains("ingreso"),
        ],
    ),
    (
        CanonicalField::HasPetsText,
        &[Contains("mascota"), Contains("pet"), Contains("animales")],
    ),
    (
        CanonicalField::BudgetText,
        &[
            Contains("presupuesto"),
            Contains("budget"),
            Contains("renta mensual"),
            Contains("costo"),
            Contains("precio"),
        ],
    ),
    (
        CanonicalField::BedroomsText,
        &[
            Contains("recamara"),
            Contains("habitacion"),
            Contains("bedroom"),
            Contains("cuarto"),
            Contains("dormitorio"),
        ],
    ),
    (
        CanonicalField::DesiredProperty,
        &[
            Contains("propiedad"),
            Contains("departamento especifico"),
            Contains("unidad"),
            Contains("desired property"),
            Contains("specific"),
        ],
    ),
    (
        CanonicalField::PreferredNeighborhood,
        &[
            Contains("zona"),
            Contains("colonia"),
            Contains("area"),
            Contains("neighborhood"),
            Contains("barrio"),
            Contains("ubicacion"),
        ],
    ),
    (
        CanonicalField::PrimarySellerName,
        &[
            Contains("vendedor principal"),
            Contains("asesor principal"),
            Contains("seller"),
            Contains("vendedor"),
        ],
    ),
    (
        CanonicalField::SecondarySellerName,
        &[
            Contains("vendedor secundario"),
            Contains("asistente"),
            Contains("segundo vendedor"),
            Contains("assistant"),
        ],
    ),
    (
        CanonicalField::Notes,
        &[
            Contains("nota"),
            Contains("comentario"),
            Contains("observacion"),
            Contains("notes"),
            Contains("comment"),
        ],
    ),
    (
        CanonicalField::Status,
        &[Contains("estado"), Contains("status"), Contains("estatus")],
    ),
    (
        CanonicalField::Email,
        &[Contains("email"), Contains("correo"), Contains("e-mail")],
    ),
];

#[derive(Debug, Clone)]
struct CompiledSynonym {
    text: String,
    exact: bool,
}

/// Header-to-field classifier over the ordered synonym table.
pub struct FieldClassifier {
    entries: Vec<(CanonicalField, Vec<CompiledSynonym>)>,
}

static SHARED: Lazy<FieldClassifier> = Lazy::new(FieldClassifier::new);

impl FieldClassifier {
    /// Build a classifier with every synonym passed through the
    /// header normalizer, so patterns and headers compare in the
    /// same folded form.
    pub fn new() -> Self {
        let entries = PATTERN_TABLE
            .iter()
            .map(|(field, synonyms)| {
                let compiled = synonyms
                    .iter()
                    .map(|synonym| match synonym {
                        Exact(text) => CompiledSynonym {
                            text: normalize(text),
                            exact: true,
                        },
                        Contains(text) => CompiledSynonym {
                            text: normalize(text),
                            exact: false,
                        },
                    })
                    .collect();
                (*field, compiled)
            })
            .collect();

        Self { entries }
    }

    /// Shared classifier instance; the table is static so one compiled
    /// copy serves the whole process.
    pub fn shared() -> &'static FieldClassifier {
        &SHARED
    }

    /// Classify a raw header. `None` means the column is unrecognized
    /// and will be dropped from the mapping (not fatal).
    pub fn classify(&self, raw_header: &str) -> Option<CanonicalField> {
        let header = normalize(raw_header);
        if header.is_empty() {
            return None;
        }

        for (field, synonyms) in &self.entries {
            let matched = synonyms.iter().any(|synonym| {
                if synonym.exact {
                    header == synonym.text
                } else {
                    header.contains(&synonym.text)
                }
            });
            if matched {
                return Some(*field);
            }
        }

        None
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}
