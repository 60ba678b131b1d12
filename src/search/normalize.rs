use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison form: trimmed, lowercased, accents stripped.
///
/// Accent stripping is NFD decomposition with the combining marks dropped,
/// so "Açúcar" and "acucar" compare equal.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Açúcar"), "acucar");
        assert_eq!(normalize("Gênero"), "genero");
        assert_eq!(normalize("São João"), "sao joao");
    }

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  MPB  "), "mpb");
        assert_eq!(normalize("\tRoberto Carlos\n"), "roberto carlos");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn keeps_cedilla_base_letter() {
        assert_eq!(normalize("ç"), "c");
    }
}
