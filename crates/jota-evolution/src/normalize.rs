//! Text normalization for keyword matching.
//!
//! Every comparison in the routing pipeline runs over this normal form:
//! NFD decomposition, combining-mark removal, lowercase, trim. Skipping it
//! anywhere silently kills recall for accented Portuguese input.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize text for matching: NFD fold, strip combining marks (diacritics),
/// lowercase, trim.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Split normalized text into word tokens (alphanumeric runs).
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(normalize("PRÓVA"), "prova");
        assert_eq!(normalize("prôva"), "prova");
        assert_eq!(normalize("Caça-Palavras"), "caca-palavras");
        assert_eq!(normalize("  Sequência Didática  "), "sequencia didatica");
    }

    #[test]
    fn same_normal_form_for_accent_variants() {
        assert_eq!(normalize("crie uma prova"), normalize("crie uma PRÓVA"));
    }

    #[test]
    fn tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("Crie um caça-palavras sobre o sistema solar!"),
            vec!["crie", "um", "caca", "palavras", "sobre", "o", "sistema", "solar"]
        );
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("🎉🎉").is_empty());
    }
}
