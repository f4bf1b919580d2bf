//! Layered detection of what a teacher's request should become.
//!
//! Tiers, in order: interactive activities built in the school UI, the
//! static catalog, previously evolved templates, and a creation-intent
//! heuristic that marks the request as auto-generable. Anything else is
//! routed as a free document by the router.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::TemplateDefinition;
use crate::normalize::normalize;
use crate::registry::TemplateRegistry;
use crate::store::{EvolvedTemplate, EvolvedTemplateStore};

/// An activity assembled interactively in the platform UI instead of being
/// generated as a document. Keywords and overrides are pre-normalized.
pub struct InteractiveActivity {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static [&'static str],
    /// Terms that veto this interactive match: their presence means the
    /// teacher wants a generated document, not the UI builder.
    pub text_only_overrides: &'static [&'static str],
}

/// "prova" alone opens the exercise-list builder, but "prova dissertativa"
/// is a document request; the overrides carry that distinction.
pub const INTERACTIVE_ACTIVITIES: &[InteractiveActivity] = &[
    InteractiveActivity {
        id: "lista-exercicios",
        display_name: "Lista de Exercícios",
        keywords: &[
            "lista de exercicios",
            "lista de exercicio",
            "exercicios",
            "prova",
            "atividade de fixacao",
        ],
        text_only_overrides: &[
            "dissertativa",
            "discursiva",
            "personalizada",
            "redacao",
            "gabarito comentado",
            "simulado",
            "bimestral",
            "mensal",
        ],
    },
    InteractiveActivity {
        id: "plano-aula",
        display_name: "Plano de Aula",
        keywords: &["plano de aula", "plano da aula"],
        text_only_overrides: &["plano de unidade", "plano de ensino", "planejamento anual"],
    },
    InteractiveActivity {
        id: "sequencia-didatica",
        display_name: "Sequência Didática",
        keywords: &["sequencia didatica", "sequencia de aulas"],
        text_only_overrides: &[],
    },
    InteractiveActivity {
        id: "quiz-interativo",
        display_name: "Quiz Interativo",
        keywords: &["quiz", "quiz interativo", "kahoot"],
        text_only_overrides: &["show do milhao"],
    },
    InteractiveActivity {
        id: "flash-cards",
        display_name: "Flash Cards",
        keywords: &["flash cards", "flashcards", "flash card", "cartoes de memorizacao"],
        text_only_overrides: &[],
    },
    InteractiveActivity {
        id: "tese-redacao",
        display_name: "Tese de Redação",
        keywords: &["tese de redacao", "tese da redacao"],
        text_only_overrides: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionKind {
    /// Built in the platform UI; no document is generated.
    InteractiveActivity,
    /// A catalog or evolved template will drive generation.
    TextTemplate,
    /// No template matched but the text is a creation request.
    AutoGenerable,
    /// Not a creation request at all.
    None,
}

/// The template a detection resolved to, when any.
#[derive(Debug, Clone)]
pub enum MatchedTemplate {
    Catalog(&'static TemplateDefinition),
    Evolved(EvolvedTemplate),
}

impl MatchedTemplate {
    pub fn id(&self) -> &str {
        match self {
            MatchedTemplate::Catalog(t) => t.id,
            MatchedTemplate::Evolved(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MatchedTemplate::Catalog(t) => t.name,
            MatchedTemplate::Evolved(t) => &t.name,
        }
    }

    pub fn prompt_template(&self) -> &str {
        match self {
            MatchedTemplate::Catalog(t) => t.prompt_template,
            MatchedTemplate::Evolved(t) => &t.prompt_template,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub kind: DetectionKind,
    pub template: Option<MatchedTemplate>,
    pub interactive_activity_id: Option<&'static str>,
    pub confidence: Confidence,
    pub reason: String,
}

/// Runs the detection tiers in order and stops at the first hit.
pub struct ActivityDetector {
    registry: Arc<TemplateRegistry>,
    store: Arc<EvolvedTemplateStore>,
}

impl ActivityDetector {
    pub fn new(registry: Arc<TemplateRegistry>, store: Arc<EvolvedTemplateStore>) -> Self {
        ActivityDetector { registry, store }
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        let normalized = normalize(text);

        // Tier 1: interactive activities, unless a text-only override vetoes.
        for activity in INTERACTIVE_ACTIVITIES {
            let keyword_hit = activity.keywords.iter().find(|kw| normalized.contains(*kw));
            let Some(keyword) = keyword_hit else { continue };
            if let Some(veto) = activity
                .text_only_overrides
                .iter()
                .find(|term| normalized.contains(*term))
            {
                debug!(activity = activity.id, veto, "match interativo vetado por termo textual");
                continue;
            }
            return DetectionResult {
                kind: DetectionKind::InteractiveActivity,
                template: None,
                interactive_activity_id: Some(activity.id),
                confidence: Confidence::High,
                reason: format!(
                    "palavra-chave \"{keyword}\" da atividade interativa {}",
                    activity.display_name
                ),
            };
        }

        // Tier 2: catalog keyword search.
        let candidates = self.registry.search_by_text(text);
        if let Some(&(template, score)) = candidates.first() {
            let confidence = if candidates.len() == 1 {
                Confidence::High
            } else {
                Confidence::Medium
            };
            return DetectionResult {
                kind: DetectionKind::TextTemplate,
                template: Some(MatchedTemplate::Catalog(template)),
                interactive_activity_id: None,
                confidence,
                reason: format!(
                    "template \"{}\" do catálogo (pontuação {score}, {} candidatos)",
                    template.name,
                    candidates.len()
                ),
            };
        }

        // Tier 3: evolved templates.
        if let Some(evolved) = self.store.get_by_keyword(text) {
            let reason = format!("template evoluído \"{}\" já registrado", evolved.name);
            return DetectionResult {
                kind: DetectionKind::TextTemplate,
                template: Some(MatchedTemplate::Evolved(evolved)),
                interactive_activity_id: None,
                confidence: Confidence::Medium,
                reason,
            };
        }

        // Tier 4: creation intent without any known template.
        if jota_evolution::heuristics::is_creation_request(&normalized) {
            return DetectionResult {
                kind: DetectionKind::AutoGenerable,
                template: None,
                interactive_activity_id: None,
                confidence: Confidence::Low,
                reason: "pedido de criação sem template conhecido".to_string(),
            };
        }

        DetectionResult {
            kind: DetectionKind::None,
            template: None,
            interactive_activity_id: None,
            confidence: Confidence::Low,
            reason: "nenhum sinal de criação de atividade".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> ActivityDetector {
        ActivityDetector::new(
            Arc::new(TemplateRegistry::new()),
            Arc::new(EvolvedTemplateStore::in_memory()),
        )
    }

    #[test]
    fn interactive_keywords_are_pre_normalized() {
        for activity in INTERACTIVE_ACTIVITIES {
            for kw in activity.keywords.iter().chain(activity.text_only_overrides) {
                assert_eq!(*kw, normalize(kw), "not normalized: {kw:?}");
            }
        }
    }

    #[test]
    fn lista_de_exercicios_is_interactive() {
        let result = detector().detect("crie uma lista de exercícios de matemática");
        assert_eq!(result.kind, DetectionKind::InteractiveActivity);
        assert_eq!(result.interactive_activity_id, Some("lista-exercicios"));
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn prova_dissertativa_skips_interactive_tier() {
        let result = detector().detect("crie uma prova dissertativa de matemática");
        assert_eq!(result.kind, DetectionKind::TextTemplate);
        assert!(result.interactive_activity_id.is_none());
        match result.template.unwrap() {
            MatchedTemplate::Catalog(t) => assert_eq!(t.id, "questoes_dissertativas"),
            MatchedTemplate::Evolved(_) => panic!("expected catalog match"),
        }
    }

    #[test]
    fn catalog_tier_matches_caca_palavras() {
        let result = detector().detect("Crie um caça-palavras sobre o sistema solar para o 5º ano");
        assert_eq!(result.kind, DetectionKind::TextTemplate);
        match result.template.unwrap() {
            MatchedTemplate::Catalog(t) => assert_eq!(t.id, "caca_palavras"),
            MatchedTemplate::Evolved(_) => panic!("expected catalog match"),
        }
    }

    #[test]
    fn evolved_tier_runs_after_catalog() {
        let registry = Arc::new(TemplateRegistry::new());
        let store = Arc::new(EvolvedTemplateStore::in_memory());
        store
            .register(crate::store::EvolvedTemplate {
                id: "evoluido_escape_room_x".to_string(),
                name: "Escape Room".to_string(),
                description: String::new(),
                icon: "🗝️".to_string(),
                color: "#7C3AED".to_string(),
                keywords: vec!["escape room".to_string()],
                expected_sections: vec!["Enigmas".to_string()],
                prompt_template: "{solicitacao} {contexto}".to_string(),
                origin_prompt: String::new(),
                created_at_ms: 0,
                usage_count: 1,
            })
            .unwrap();
        let detector = ActivityDetector::new(registry, store);

        let result = detector.detect("quero um escape room pedagógico");
        assert_eq!(result.kind, DetectionKind::TextTemplate);
        assert_eq!(result.confidence, Confidence::Medium);
        match result.template.unwrap() {
            MatchedTemplate::Evolved(t) => assert_eq!(t.id, "evoluido_escape_room_x"),
            MatchedTemplate::Catalog(_) => panic!("expected evolved match"),
        }
    }

    #[test]
    fn creation_intent_without_template_is_auto_generable() {
        let result = detector().detect("crie uma coletânea de poemas medievais");
        assert_eq!(result.kind, DetectionKind::AutoGenerable);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.template.is_none());
    }

    #[test]
    fn plain_question_detects_nothing() {
        let result = detector().detect("qual a capital da Austrália?");
        assert_eq!(result.kind, DetectionKind::None);
    }

    #[test]
    fn empty_and_emoji_input_detect_nothing() {
        assert_eq!(detector().detect("").kind, DetectionKind::None);
        assert_eq!(detector().detect("   ").kind, DetectionKind::None);
        assert_eq!(detector().detect("🎉🎉🎉").kind, DetectionKind::None);
    }
}
