//! In-memory index over the static catalog.
//!
//! Built once at startup from the catalog's const data. Keyword lookups run
//! over normalized text; longer keyword matches score higher, and score ties
//! resolve to catalog declaration order.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{all_categories, Category, TemplateDefinition};
use crate::normalize::normalize;

/// Read-only registry over the catalog, with an id map and a flat keyword
/// index in declaration order.
pub struct TemplateRegistry {
    categories: &'static [&'static Category],
    by_id: HashMap<&'static str, &'static TemplateDefinition>,
    keyword_index: Vec<(String, &'static TemplateDefinition)>,
}

/// Registry counters for diagnostics endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub categories: usize,
    pub templates: usize,
    pub keywords: usize,
}

impl TemplateRegistry {
    /// Build the registry over the full catalog.
    pub fn new() -> Self {
        Self::from_categories(all_categories())
    }

    /// Build over an explicit category slice. Duplicate template ids are a
    /// catalog authoring bug; in that case the last declaration wins.
    pub fn from_categories(categories: &'static [&'static Category]) -> Self {
        let mut by_id = HashMap::new();
        let mut keyword_index = Vec::new();

        for category in categories {
            for template in category.templates {
                let previous = by_id.insert(template.id, template);
                debug_assert!(previous.is_none(), "duplicate template id: {}", template.id);
                for keyword in template.keywords {
                    keyword_index.push((normalize(keyword), template));
                }
            }
        }

        debug!(
            categories = categories.len(),
            templates = by_id.len(),
            keywords = keyword_index.len(),
            "registro de templates construído"
        );

        TemplateRegistry {
            categories,
            by_id,
            keyword_index,
        }
    }

    pub fn categories(&self) -> &'static [&'static Category] {
        self.categories
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'static TemplateDefinition> {
        self.by_id.get(id).copied()
    }

    /// First template (in declaration order) with a keyword contained in the
    /// needle, after normalization. Exact keyword equality is checked first
    /// across the whole index so "prova" finds the template whose keyword is
    /// exactly "prova" even if a longer keyword elsewhere also matches.
    pub fn get_by_keyword(&self, needle: &str) -> Option<&'static TemplateDefinition> {
        let needle = normalize(needle);
        if needle.is_empty() {
            return None;
        }

        if let Some(&(_, template)) = self.keyword_index.iter().find(|(kw, _)| *kw == needle) {
            return Some(template);
        }
        self.keyword_index
            .iter()
            .find(|(kw, _)| needle.contains(kw.as_str()))
            .map(|(_, template)| *template)
    }

    /// Score every template against free text: each keyword contained in the
    /// normalized text contributes its character length, and a template's
    /// score is its best keyword match. Results are sorted by score
    /// descending; ties keep declaration order (the sort is stable).
    pub fn search_by_text(&self, text: &str) -> Vec<(&'static TemplateDefinition, usize)> {
        let text = normalize(text);
        if text.is_empty() {
            return Vec::new();
        }

        let mut order: Vec<&'static str> = Vec::new();
        let mut best: HashMap<&'static str, (&'static TemplateDefinition, usize)> = HashMap::new();

        for (keyword, template) in &self.keyword_index {
            if keyword.is_empty() || !text.contains(keyword.as_str()) {
                continue;
            }
            let score = keyword.chars().count();
            match best.get_mut(template.id) {
                Some(entry) => {
                    if score > entry.1 {
                        entry.1 = score;
                    }
                }
                None => {
                    order.push(template.id);
                    best.insert(template.id, (*template, score));
                }
            }
        }

        let mut results: Vec<(&'static TemplateDefinition, usize)> = order
            .into_iter()
            .map(|id| best[id])
            .collect();
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            categories: self.categories.len(),
            templates: self.by_id.len(),
            keywords: self.keyword_index.len(),
        }
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let registry = TemplateRegistry::new();
        let tpl = registry.get_by_id("caca_palavras").unwrap();
        assert_eq!(tpl.name, "Caça-Palavras");
        assert!(registry.get_by_id("nao_existe").is_none());
    }

    #[test]
    fn keyword_lookup_is_diacritic_insensitive() {
        let registry = TemplateRegistry::new();
        let a = registry.get_by_keyword("caça-palavras").unwrap();
        let b = registry.get_by_keyword("CACA-PALAVRAS").unwrap();
        assert_eq!(a.id, "caca_palavras");
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn keyword_lookup_rejects_empty_needle() {
        let registry = TemplateRegistry::new();
        assert!(registry.get_by_keyword("").is_none());
        assert!(registry.get_by_keyword("   ").is_none());
    }

    #[test]
    fn search_scores_longer_keywords_higher() {
        let registry = TemplateRegistry::new();
        let results = registry.search_by_text("quero uma prova bimestral de matemática");
        assert!(!results.is_empty());
        let (top, top_score) = results[0];
        assert_eq!(top.id, "prova_personalizada");
        // "prova bimestral" outranks plain "prova"
        assert_eq!(top_score, "prova bimestral".chars().count());
    }

    #[test]
    fn search_dedupes_templates_keeping_best_score() {
        let registry = TemplateRegistry::new();
        // "prova" and "avaliacao" both belong to prova_personalizada
        let results = registry.search_by_text("prova de avaliação");
        let hits: Vec<_> = results.iter().filter(|(t, _)| t.id == "prova_personalizada").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1, "avaliacao".chars().count());
    }

    #[test]
    fn search_empty_text_is_empty() {
        let registry = TemplateRegistry::new();
        assert!(registry.search_by_text("").is_empty());
        assert!(registry.search_by_text("  \t ").is_empty());
    }

    #[test]
    fn search_score_monotonic_in_keyword_length() {
        let registry = TemplateRegistry::new();
        let short = registry.search_by_text("prova")[0].1;
        let long = registry.search_by_text("prova bimestral")[0].1;
        assert!(long > short);
    }

    #[test]
    fn stats_counts_catalog() {
        let registry = TemplateRegistry::new();
        let stats = registry.stats();
        assert_eq!(stats.categories, 8);
        assert!(stats.templates >= 35);
        assert!(stats.keywords > stats.templates);
    }
}
