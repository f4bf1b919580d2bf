//! Template draft synthesis from a free-text request.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::heuristics;
use crate::normalize::normalize;

/// Every synthesized template id starts with this prefix, so evolved ids
/// never collide with catalog ids.
pub const EVOLVED_ID_PREFIX: &str = "evoluido_";

/// How much of the originating request is kept on the draft for audit.
const ORIGIN_PROMPT_MAX: usize = 200;

/// A freshly synthesized template, not yet persisted. The store layer turns
/// this into a stored evolved template with usage bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub keywords: Vec<String>,
    pub expected_sections: Vec<String>,
    pub prompt_template: String,
    /// Truncated copy of the request that caused this template to exist.
    pub origin_prompt: String,
}

/// Synthesize a complete template draft from a teacher's request.
///
/// Never fails: every heuristic has a default, so even a vague request
/// yields a generic but usable draft.
pub fn synthesize(request: &str) -> TemplateDraft {
    let normalized = normalize(request);

    let name = heuristics::extract_name(&normalized)
        .unwrap_or_else(|| heuristics::DEFAULT_NAME.to_string());
    let keywords = heuristics::extract_keywords(request);
    let expected_sections = heuristics::infer_sections(&normalized);
    let icon = heuristics::pick_icon(&normalized).to_string();
    let color = heuristics::pick_color().to_string();

    let timestamp_ms = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let id = format!(
        "{}{}_{}",
        EVOLVED_ID_PREFIX,
        heuristics::slugify(&name),
        heuristics::to_base36(timestamp_ms)
    );

    let prompt_template = build_prompt(&name, &expected_sections);
    let origin_prompt: String = request.chars().take(ORIGIN_PROMPT_MAX).collect();

    debug!(id = %id, name = %name, keywords = keywords.len(), "template sintetizado");

    TemplateDraft {
        id,
        name: name.clone(),
        description: format!("Template gerado automaticamente a partir de: \"{origin_prompt}\""),
        icon,
        color,
        keywords,
        expected_sections,
        prompt_template,
        origin_prompt,
    }
}

/// Build the Jota-persona prompt skeleton with `{solicitacao}` and
/// `{contexto}` placeholders and the inferred sections as markdown headers.
fn build_prompt(name: &str, sections: &[String]) -> String {
    let section_headers = sections
        .iter()
        .map(|s| format!("## {s}\n[conteúdo da seção]"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Você é o Jota, assistente pedagógico do Ponto School. Crie um(a) {name} \
completo(a) e pronto(a) para uso em sala de aula.

SOLICITAÇÃO DO PROFESSOR:
{{solicitacao}}

CONTEXTO DA SESSÃO (se disponível):
{{contexto}}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# {name} — {{tema}}

{section_headers}

REGRAS:
- Responda em português brasileiro
- Adeque a linguagem à faixa etária indicada na solicitação
- Produza conteúdo completo, não apenas um esboço
- NÃO retorne JSON, retorne o documento final em markdown"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_draft_is_complete() {
        let draft = synthesize("Crie um roteiro de campo sobre biomas para o 6º ano");
        assert!(draft.id.starts_with(EVOLVED_ID_PREFIX));
        assert_eq!(draft.name, "Roteiro");
        assert!(!draft.keywords.is_empty());
        assert!(!draft.expected_sections.is_empty());
        assert!(draft.prompt_template.contains("{solicitacao}"));
        assert!(draft.prompt_template.contains("{contexto}"));
        assert!(draft.prompt_template.contains("NÃO retorne JSON"));
    }

    #[test]
    fn vague_request_gets_default_name() {
        let draft = synthesize("algo divertido para sexta-feira");
        assert_eq!(draft.name, heuristics::DEFAULT_NAME);
        assert!(draft.id.starts_with("evoluido_atividade_personalizada_"));
    }

    #[test]
    fn sections_become_markdown_headers() {
        let draft = synthesize("monte um debate sobre redes sociais");
        assert!(draft.prompt_template.contains("## Tema do Debate"));
        assert!(draft.prompt_template.contains("## Guia do Mediador"));
    }

    #[test]
    fn origin_prompt_is_truncated() {
        let long = "crie uma prova ".repeat(40);
        let draft = synthesize(&long);
        assert_eq!(draft.origin_prompt.chars().count(), 200);
    }
}
