//! The routing facade: one call in, one total answer out.
//!
//! `route_activity_request` never returns an error. Every failure path
//! degrades to the free-document origin, because the teacher always gets
//! *some* generation path for their request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::detector::{ActivityDetector, Confidence, DetectionKind, MatchedTemplate};
use crate::evolution::AutoEvolutionEngine;
use crate::registry::{RegistryStats, TemplateRegistry};
use crate::store::EvolvedTemplateStore;

/// Substituted for `{contexto}` when the session has no usable context.
pub const NO_CONTEXT_SENTINEL: &str = "Sem contexto adicional.";

/// Where a routed request ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOrigin {
    /// Handled by the platform's interactive builder, no document generated.
    Interactive,
    /// A catalog template drives generation.
    TextTemplate,
    /// A template synthesized now or in a previous session drives generation.
    AutoGenerated,
    /// Total fallback: free-form document generation.
    FreeDocument,
}

#[derive(Debug, Clone)]
pub struct RouteMetadata {
    pub reason: String,
    pub confidence: Confidence,
    pub interactive_activity_id: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct RouterResult {
    pub origin: RouteOrigin,
    pub template: Option<MatchedTemplate>,
    pub template_id: Option<String>,
    pub category: Option<&'static str>,
    pub metadata: RouteMetadata,
}

/// Combined counters across the static catalog and the evolved store.
#[derive(Debug, Clone)]
pub struct RouterStats {
    pub registry: RegistryStats,
    pub evolved_templates: usize,
}

pub struct ActivityRouter {
    registry: Arc<TemplateRegistry>,
    store: Arc<EvolvedTemplateStore>,
    detector: ActivityDetector,
    engine: AutoEvolutionEngine,
}

impl ActivityRouter {
    pub fn new(registry: Arc<TemplateRegistry>, store: Arc<EvolvedTemplateStore>) -> Self {
        let detector = ActivityDetector::new(Arc::clone(&registry), Arc::clone(&store));
        let engine = AutoEvolutionEngine::new(Arc::clone(&store));
        ActivityRouter {
            registry,
            store,
            detector,
            engine,
        }
    }

    pub fn with_in_memory_store() -> Self {
        Self::new(
            Arc::new(TemplateRegistry::new()),
            Arc::new(EvolvedTemplateStore::in_memory()),
        )
    }

    /// Route a teacher request to its generation path. Total: every input,
    /// including empty or nonsense text, gets a result.
    pub async fn route_activity_request(
        &self,
        text: &str,
        _session_context: Option<&str>,
    ) -> RouterResult {
        let detection = self.detector.detect(text);
        info!(kind = ?detection.kind, confidence = ?detection.confidence, reason = %detection.reason, "pedido roteado");

        match detection.kind {
            DetectionKind::InteractiveActivity => RouterResult {
                origin: RouteOrigin::Interactive,
                template: None,
                template_id: None,
                category: None,
                metadata: RouteMetadata {
                    reason: detection.reason,
                    confidence: detection.confidence,
                    interactive_activity_id: detection.interactive_activity_id,
                },
            },
            DetectionKind::TextTemplate => {
                // detection only reports TextTemplate with a template attached
                let Some(template) = detection.template else {
                    return Self::free_document(detection.reason);
                };
                let (origin, category) = match &template {
                    MatchedTemplate::Catalog(t) => {
                        (RouteOrigin::TextTemplate, Some(t.category.as_str()))
                    }
                    MatchedTemplate::Evolved(_) => (RouteOrigin::AutoGenerated, None),
                };
                RouterResult {
                    origin,
                    template_id: Some(template.id().to_string()),
                    category,
                    template: Some(template),
                    metadata: RouteMetadata {
                        reason: detection.reason,
                        confidence: detection.confidence,
                        interactive_activity_id: None,
                    },
                }
            }
            DetectionKind::AutoGenerable => match self.engine.evolve(text) {
                Ok(evolved) => RouterResult {
                    origin: RouteOrigin::AutoGenerated,
                    template_id: Some(evolved.id.clone()),
                    category: None,
                    template: Some(MatchedTemplate::Evolved(evolved)),
                    metadata: RouteMetadata {
                        reason: "template sintetizado a partir do pedido".to_string(),
                        confidence: Confidence::Low,
                        interactive_activity_id: None,
                    },
                },
                Err(e) => {
                    warn!(error = %e, "auto-evolução falhou, caindo para documento livre");
                    Self::free_document("falha ao persistir template sintetizado".to_string())
                }
            },
            DetectionKind::None => Self::free_document(detection.reason),
        }
    }

    fn free_document(reason: String) -> RouterResult {
        RouterResult {
            origin: RouteOrigin::FreeDocument,
            template: None,
            template_id: None,
            category: None,
            metadata: RouteMetadata {
                reason,
                confidence: Confidence::Low,
                interactive_activity_id: None,
            },
        }
    }

    /// Fill a routed template's prompt with the request and session context.
    /// `None` when the route carries no template (interactive and free
    /// document routes build their prompts elsewhere).
    pub fn get_prompt_for_route(
        &self,
        route: &RouterResult,
        request: &str,
        context: Option<&str>,
    ) -> Option<String> {
        let template = route.template.as_ref()?;
        let context = match context {
            Some(c) if !c.trim().is_empty() => c,
            _ => NO_CONTEXT_SENTINEL,
        };
        Some(
            template
                .prompt_template()
                .replace("{solicitacao}", request)
                .replace("{contexto}", context),
        )
    }

    pub fn stats(&self) -> RouterStats {
        RouterStats {
            registry: self.registry.stats(),
            evolved_templates: self.store.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catalog_route_carries_category() {
        let router = ActivityRouter::with_in_memory_store();
        let result = router
            .route_activity_request("Crie um caça-palavras sobre o sistema solar", None)
            .await;
        assert_eq!(result.origin, RouteOrigin::TextTemplate);
        assert_eq!(result.template_id.as_deref(), Some("caca_palavras"));
        assert_eq!(result.category, Some("jogos_educativos"));
    }

    #[tokio::test]
    async fn interactive_route_has_no_template() {
        let router = ActivityRouter::with_in_memory_store();
        let result = router
            .route_activity_request("crie uma lista de exercícios de frações", None)
            .await;
        assert_eq!(result.origin, RouteOrigin::Interactive);
        assert!(result.template.is_none());
        assert_eq!(
            result.metadata.interactive_activity_id,
            Some("lista-exercicios")
        );
        assert!(router.get_prompt_for_route(&result, "x", None).is_none());
    }

    #[tokio::test]
    async fn unmatched_creation_request_auto_generates() {
        let router = ActivityRouter::with_in_memory_store();
        let result = router
            .route_activity_request("crie uma coletânea de poemas medievais", None)
            .await;
        assert_eq!(result.origin, RouteOrigin::AutoGenerated);
        assert!(result.template_id.as_deref().unwrap().starts_with("evoluido_"));
        assert_eq!(router.stats().evolved_templates, 1);
    }

    #[tokio::test]
    async fn fallback_is_total() {
        let router = ActivityRouter::with_in_memory_store();
        for text in ["", "   ", "🎉🎉🎉", "qual a capital da Austrália?"] {
            let result = router.route_activity_request(text, None).await;
            assert_eq!(result.origin, RouteOrigin::FreeDocument, "input: {text:?}");
            assert!(result.template.is_none());
        }
    }

    #[tokio::test]
    async fn prompt_substitution_fills_both_placeholders() {
        let router = ActivityRouter::with_in_memory_store();
        let result = router
            .route_activity_request("Crie um caça-palavras sobre o sistema solar", None)
            .await;

        let with_context = router
            .get_prompt_for_route(&result, "caça-palavras do sistema solar", Some("turma do 5º ano"))
            .unwrap();
        assert!(with_context.contains("caça-palavras do sistema solar"));
        assert!(with_context.contains("turma do 5º ano"));
        assert!(!with_context.contains("{solicitacao}"));
        assert!(!with_context.contains("{contexto}"));

        let without_context = router
            .get_prompt_for_route(&result, "pedido", None)
            .unwrap();
        assert!(without_context.contains(NO_CONTEXT_SENTINEL));

        let blank_context = router
            .get_prompt_for_route(&result, "pedido", Some("   "))
            .unwrap();
        assert!(blank_context.contains(NO_CONTEXT_SENTINEL));
    }

    #[tokio::test]
    async fn prompt_substitution_is_idempotent_on_result() {
        let router = ActivityRouter::with_in_memory_store();
        let result = router
            .route_activity_request("Crie um caça-palavras sobre planetas", None)
            .await;
        let once = router.get_prompt_for_route(&result, "pedido", Some("ctx")).unwrap();
        let twice = once
            .replace("{solicitacao}", "pedido")
            .replace("{contexto}", "ctx");
        assert_eq!(once, twice);
    }
}
