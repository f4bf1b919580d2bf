//! Bridge between heuristic synthesis and the evolved-template store.

use std::sync::Arc;

use tracing::info;

use crate::store::{EvolvedTemplate, EvolvedTemplateStore, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Synthesizes a new template from an unmatched creation request and
/// registers it so the next similar request hits the evolved tier.
pub struct AutoEvolutionEngine {
    store: Arc<EvolvedTemplateStore>,
}

impl AutoEvolutionEngine {
    pub fn new(store: Arc<EvolvedTemplateStore>) -> Self {
        AutoEvolutionEngine { store }
    }

    /// Synthesis itself cannot fail; only persisting the result can.
    pub fn evolve(&self, request: &str) -> Result<EvolvedTemplate, EvolutionError> {
        let draft = jota_evolution::synthesize(request);
        let template = EvolvedTemplate {
            id: draft.id,
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
            color: draft.color,
            keywords: draft.keywords,
            expected_sections: draft.expected_sections,
            prompt_template: draft.prompt_template,
            origin_prompt: draft.origin_prompt,
            created_at_ms: chrono::Utc::now().timestamp_millis(),
            usage_count: 1,
        };
        self.store.register(template.clone())?;
        info!(id = %template.id, name = %template.name, "novo template evoluído");
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jota_evolution::EVOLVED_ID_PREFIX;

    #[test]
    fn evolve_registers_with_initial_usage() {
        let store = Arc::new(EvolvedTemplateStore::in_memory());
        let engine = AutoEvolutionEngine::new(Arc::clone(&store));

        let template = engine.evolve("crie um roteiro de campo sobre biomas").unwrap();
        assert!(template.id.starts_with(EVOLVED_ID_PREFIX));
        assert_eq!(template.usage_count, 1);

        let stored = store.get_by_id(&template.id).unwrap();
        assert_eq!(stored.name, template.name);
    }

    #[test]
    fn evolved_template_is_findable_by_keyword() {
        let store = Arc::new(EvolvedTemplateStore::in_memory());
        let engine = AutoEvolutionEngine::new(Arc::clone(&store));

        engine.evolve("crie um roteiro de campo sobre biomas").unwrap();
        let hit = store.get_by_keyword("quero outro roteiro de campo").unwrap();
        assert_eq!(hit.usage_count, 2);
    }
}
