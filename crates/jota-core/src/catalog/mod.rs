//! Static template catalog: const data compiled into the binary.
//!
//! Each category lives in its own module and declares a [`Category`] with a
//! slice of [`TemplateDefinition`]s. The order of [`CATEGORIES`] and of the
//! templates inside each category is normative: keyword-score ties in the
//! registry resolve to whichever template was declared first.

mod avaliacoes;
mod comunicacao;
mod diferenciacao;
mod engajamento;
mod escrita_producao;
mod jogos_educativos;
mod organizadores;
mod planejamento;

use serde::Serialize;

/// Catalog category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Avaliacoes,
    JogosEducativos,
    Organizadores,
    EscritaProducao,
    Planejamento,
    Engajamento,
    Comunicacao,
    Diferenciacao,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Avaliacoes => "avaliacoes",
            CategoryId::JogosEducativos => "jogos_educativos",
            CategoryId::Organizadores => "organizadores",
            CategoryId::EscritaProducao => "escrita_producao",
            CategoryId::Planejamento => "planejamento",
            CategoryId::Engajamento => "engajamento",
            CategoryId::Comunicacao => "comunicacao",
            CategoryId::Diferenciacao => "diferenciacao",
        }
    }
}

/// One catalog template. All fields are `'static`: the catalog is data, not
/// state. The `prompt_template` body carries `{solicitacao}` and `{contexto}`
/// placeholders filled in at routing time.
#[derive(Debug, Serialize)]
pub struct TemplateDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CategoryId,
    pub icon: &'static str,
    pub color: &'static str,
    pub keywords: &'static [&'static str],
    pub expected_sections: &'static [&'static str],
    pub usage_example: &'static str,
    pub prompt_template: &'static str,
}

/// A catalog category with its display metadata and templates.
#[derive(Debug, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub templates: &'static [TemplateDefinition],
}

/// Declaration order is normative for tie-breaking in keyword search.
static CATEGORIES: [&Category; 8] = [
    &avaliacoes::CATEGORY,
    &jogos_educativos::CATEGORY,
    &organizadores::CATEGORY,
    &escrita_producao::CATEGORY,
    &planejamento::CATEGORY,
    &engajamento::CATEGORY,
    &comunicacao::CATEGORY,
    &diferenciacao::CATEGORY,
];

/// All catalog categories, in normative order.
pub fn all_categories() -> &'static [&'static Category] {
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_count_and_order() {
        let cats = all_categories();
        assert_eq!(cats.len(), 8);
        assert_eq!(cats[0].id, CategoryId::Avaliacoes);
        assert_eq!(cats[1].id, CategoryId::JogosEducativos);
    }

    #[test]
    fn template_ids_are_unique() {
        let mut seen = HashSet::new();
        for cat in all_categories() {
            for tpl in cat.templates {
                assert!(seen.insert(tpl.id), "duplicate template id: {}", tpl.id);
            }
        }
    }

    #[test]
    fn every_template_is_well_formed() {
        for cat in all_categories() {
            assert!(!cat.templates.is_empty(), "empty category: {:?}", cat.id);
            for tpl in cat.templates {
                assert_eq!(tpl.category, cat.id, "category mismatch on {}", tpl.id);
                assert!(!tpl.keywords.is_empty(), "no keywords on {}", tpl.id);
                assert!(!tpl.expected_sections.is_empty(), "no sections on {}", tpl.id);
                assert!(
                    tpl.prompt_template.contains("{solicitacao}"),
                    "missing {{solicitacao}} on {}",
                    tpl.id
                );
                assert!(
                    tpl.prompt_template.contains("{contexto}"),
                    "missing {{contexto}} on {}",
                    tpl.id
                );
            }
        }
    }

    #[test]
    fn keywords_are_pre_normalized() {
        for cat in all_categories() {
            for tpl in cat.templates {
                for kw in tpl.keywords {
                    assert_eq!(
                        *kw,
                        crate::normalize::normalize(kw),
                        "keyword not in normal form on {}: {:?}",
                        tpl.id,
                        kw
                    );
                }
            }
        }
    }
}
