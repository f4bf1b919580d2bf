//! Synthesis heuristics: name, keywords, sections, icon, color, id.
//!
//! All functions take text already passed through [`crate::normalize`], all
//! have defaults, and all are pinned by literal-input tests below. The only
//! non-deterministic output is [`pick_color`], which rotates a fixed palette
//! on a time-derived index (cosmetic only).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::tokenize;

/// Fallback when no name pattern matches the request.
pub const DEFAULT_NAME: &str = "Atividade Personalizada";

/// Upper bound on the synthesized keyword list.
pub const MAX_KEYWORDS: usize = 12;

/// Upper bound on two-word bigrams appended to the keyword list.
pub const MAX_BIGRAMS: usize = 4;

/// Creation-intent verbs, already in normal form (diacritics stripped).
static CREATION_INTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(crie|criar|gere|gerar|monte|montar|faca|fazer|elabore|elaborar|desenvolva|desenvolver|prepare|preparar|preciso|quero|gostaria)\b",
    )
    .expect("creation-intent regex")
});

/// Ordered name-extraction patterns: the noun phrase after a creation verb,
/// cut at the first connective ("sobre", "de", "para", ...).
static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // article alternation is longest-first so "uma" is not split as "um"+"a"
        Regex::new(
            r"(?:crie|criar|gere|gerar|monte|montar|faca|fazer|elabore|elaborar|desenvolva|desenvolver|prepare|preparar)\s+(?:umas|uns|uma|um)?\s*([a-z0-9][a-z0-9 \-]{2,48}?)(?:\s+(?:sobre|de|do|da|dos|das|para|com|em|no|na)\b|\s*$)",
        )
        .expect("name pattern 1"),
        Regex::new(
            r"(?:preciso|quero|gostaria)\s+(?:de\s+)?(?:umas|uns|uma|um)?\s*([a-z0-9][a-z0-9 \-]{2,48}?)(?:\s+(?:sobre|de|do|da|dos|das|para|com|em|no|na)\b|\s*$)",
        )
        .expect("name pattern 2"),
    ]
});

/// Portuguese stop words dropped during keyword extraction. Creation verbs
/// are included so "crie"/"quero" never become keywords of the new template.
const STOPWORDS: &[&str] = &[
    "a", "o", "as", "os", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "em", "no",
    "na", "nos", "nas", "para", "por", "com", "sem", "sobre", "entre", "que", "e", "ou", "ao",
    "aos", "se", "me", "meu", "minha", "seu", "sua", "este", "esta", "isso", "favor", "please",
    "crie", "criar", "gere", "gerar", "monte", "montar", "faca", "fazer", "elabore", "elaborar",
    "desenvolva", "desenvolver", "prepare", "preparar", "preciso", "quero", "gostaria",
];

/// Fixed section skeletons keyed by domain-signal substrings; first row that
/// matches wins. The last row is the generic default.
const SECTION_RULES: &[(&[&str], &[&str])] = &[
    (
        &["debate", "discussao", "argumentacao"],
        &[
            "Tema do Debate",
            "Regras e Formato",
            "Argumentos a Favor",
            "Argumentos Contra",
            "Guia do Mediador",
            "Avaliação",
        ],
    ),
    (
        &["experimento", "laboratorio", "experiencia cientifica"],
        &[
            "Objetivo do Experimento",
            "Materiais e Segurança",
            "Procedimento Passo a Passo",
            "Registro de Observações",
            "Análise e Conclusão",
        ],
    ),
    (
        &["jogo", "brincadeira", "gincana", "torneio"],
        &[
            "Regras do Jogo",
            "Materiais Necessários",
            "Rodadas",
            "Pontuação",
            "Gabarito",
        ],
    ),
    (
        &["prova", "avaliacao", "teste", "exame"],
        &[
            "Instruções ao Aluno",
            "Questões Objetivas",
            "Questões Dissertativas",
            "Gabarito",
            "Critérios de Correção",
        ],
    ),
    (
        &["projeto", "pesquisa"],
        &[
            "O Desafio",
            "Etapas do Projeto",
            "Recursos Necessários",
            "Produto Final",
            "Avaliação",
        ],
    ),
];

/// Generic five-section skeleton used when no domain signal matches.
pub const DEFAULT_SECTIONS: &[&str] = &[
    "Introdução",
    "Desenvolvimento",
    "Atividades",
    "Fechamento",
    "Avaliação",
];

/// Ordered keyword → emoji table; first match wins.
const ICON_RULES: &[(&str, &str)] = &[
    ("jogo", "🎮"),
    ("debate", "🎙️"),
    ("experimento", "🧪"),
    ("laboratorio", "🧪"),
    ("prova", "📝"),
    ("avaliacao", "📝"),
    ("leitura", "📖"),
    ("texto", "✍️"),
    ("musica", "🎵"),
    ("arte", "🎨"),
    ("matematica", "🔢"),
    ("ciencia", "🔬"),
    ("historia", "🏛️"),
    ("mapa", "🗺️"),
    ("projeto", "🚀"),
];

const DEFAULT_ICON: &str = "📄";

/// Fixed rotating palette; the pick is time-indexed and cosmetic only.
const COLOR_PALETTE: &[&str] = &[
    "#7C3AED", "#DC2626", "#059669", "#0369A1", "#DB2777", "#0891B2", "#D97706", "#4338CA",
];

/// Does the normalized text read as a creation request ("crie", "quero", ...)?
pub fn is_creation_request(normalized: &str) -> bool {
    CREATION_INTENT.is_match(normalized)
}

/// Extract a human-readable name from the normalized request, or `None` when
/// no pattern applies (callers fall back to [`DEFAULT_NAME`]).
pub fn extract_name(normalized: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(normalized) {
            let raw = caps.get(1)?.as_str().trim();
            if raw.is_empty() {
                continue;
            }
            return Some(title_case(raw));
        }
    }
    None
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword extraction: tokenize, drop stop words and tokens of length <= 3,
/// dedupe preserving order, append up to [`MAX_BIGRAMS`] adjacent bigrams,
/// cap the whole list at [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let content: Vec<&String> = tokens
        .iter()
        .filter(|t| t.len() > 3 && !STOPWORDS.contains(&t.as_str()))
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for token in &content {
        if !keywords.iter().any(|k| k == *token) {
            keywords.push((*token).clone());
        }
    }

    let mut bigrams = 0;
    for pair in content.windows(2) {
        if bigrams >= MAX_BIGRAMS {
            break;
        }
        let bigram = format!("{} {}", pair[0], pair[1]);
        if !keywords.contains(&bigram) {
            keywords.push(bigram);
            bigrams += 1;
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Infer the expected-section skeleton from domain signals in the normalized
/// request; generic skeleton when nothing matches.
pub fn infer_sections(normalized: &str) -> Vec<String> {
    for (signals, sections) in SECTION_RULES {
        if signals.iter().any(|s| normalized.contains(s)) {
            return sections.iter().map(|s| s.to_string()).collect();
        }
    }
    DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect()
}

/// First matching icon from the ordered table, or the generic document icon.
pub fn pick_icon(normalized: &str) -> &'static str {
    ICON_RULES
        .iter()
        .find(|(signal, _)| normalized.contains(signal))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Rotating palette pick keyed by current time. Not deterministic across
/// calls; cosmetic only.
pub fn pick_color() -> &'static str {
    let index = chrono::Utc::now().timestamp_millis().unsigned_abs() as usize % COLOR_PALETTE.len();
    COLOR_PALETTE[index]
}

/// Slug for id construction: normalized, non-alphanumerics collapsed to `_`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_was_sep = true;
    for c in crate::normalize::normalize(name).chars() {
        if c.is_alphanumeric() {
            slug.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }
    slug.trim_end_matches('_').to_string()
}

/// Base-36 rendering of a timestamp, used as the unique id suffix.
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ascii")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn creation_intent_on_common_verbs() {
        assert!(is_creation_request(&normalize("Crie uma prova sobre frações")));
        assert!(is_creation_request(&normalize("preciso de um roteiro de campo")));
        assert!(is_creation_request(&normalize("quero um caça-palavras")));
        assert!(!is_creation_request(&normalize("bom dia, tudo bem?")));
        assert!(!is_creation_request(&normalize("qual a capital da França?")));
    }

    #[test]
    fn name_from_creation_verb() {
        assert_eq!(
            extract_name(&normalize("crie uma prova sobre frações")),
            Some("Prova".to_string())
        );
        assert_eq!(
            extract_name(&normalize("monte um roteiro de campo para o 6º ano")),
            Some("Roteiro".to_string())
        );
        assert_eq!(
            extract_name(&normalize("preciso de uma ficha avaliativa sobre biomas")),
            Some("Ficha Avaliativa".to_string())
        );
    }

    #[test]
    fn name_fallback_when_no_pattern() {
        assert_eq!(extract_name(&normalize("caça-palavras legal")), None);
    }

    #[test]
    fn keywords_filter_stopwords_and_short_tokens() {
        let kws = extract_keywords("crie uma prova sobre o ciclo da agua");
        assert!(kws.contains(&"prova".to_string()));
        assert!(kws.contains(&"ciclo".to_string()));
        assert!(kws.contains(&"agua".to_string()));
        assert!(!kws.iter().any(|k| k == "crie" || k == "uma" || k == "o"));
    }

    #[test]
    fn keywords_include_adjacent_bigrams() {
        let kws = extract_keywords("monte um roteiro turistico cultural");
        assert!(kws.contains(&"roteiro turistico".to_string()));
        assert!(kws.contains(&"turistico cultural".to_string()));
    }

    #[test]
    fn keywords_capped() {
        let long = "alfa bravo charlie delta echo foxtrot golfe hotel india juliet kilo lima mike novembro oscar";
        assert!(extract_keywords(long).len() <= MAX_KEYWORDS);
    }

    #[test]
    fn sections_for_debate_signal() {
        let sections = infer_sections(&normalize("monte um debate sobre redes sociais"));
        assert_eq!(sections[0], "Tema do Debate");
        assert!(sections.contains(&"Guia do Mediador".to_string()));
    }

    #[test]
    fn sections_for_lab_signal() {
        let sections = infer_sections(&normalize("roteiro de laboratório sobre densidade"));
        assert_eq!(sections[0], "Objetivo do Experimento");
    }

    #[test]
    fn sections_default_when_no_signal() {
        let sections = infer_sections(&normalize("crie uma coletânea de poemas"));
        assert_eq!(
            sections,
            DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn icon_first_match_wins() {
        assert_eq!(pick_icon("jogo de prova"), "🎮");
        assert_eq!(pick_icon("prova bimestral"), "📝");
        assert_eq!(pick_icon("coletanea de poemas"), "📄");
    }

    #[test]
    fn slug_and_base36() {
        assert_eq!(slugify("Prova de Campo!"), "prova_de_campo");
        assert_eq!(slugify("Caça-Palavras"), "caca_palavras");
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
