// ============================================================
// HEADER NORMALIZER
// ============================================================
// Fold a raw spreadsheet header into a canonical matching form:
// NFD decomposition, combining marks stripped, lowercase, trimmed,
// internal whitespace collapsed. Idempotent.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a header (or synonym pattern) for classification.
///
/// "  Teléfono   Móvil " → "telefono movil"
pub fn normalize(header: &str) -> String {
    let folded: String = header
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize("Teléfono"), "telefono");
        assert_eq!(normalize("Dirección"), "direccion");
        assert_eq!(normalize("Núméro"), normalize("numero"));
    }

    #[test]
    fn test_case_and_whitespace_folding() {
        assert_eq!(normalize("  Fecha   DE  Registro  "), "fecha de registro");
        assert_eq!(normalize("NOMBRE\tCOMPLETO"), "nombre completo");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("  Número de Teléfono ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
