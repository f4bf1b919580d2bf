//! Diferenciação: adaptação, reforço e enriquecimento.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Diferenciacao,
    name: "Diferenciação e Inclusão",
    description: "Adaptação, reforço e aprofundamento para ritmos diferentes",
    icon: "🌈",
    color: "#4338CA",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "atividade_adaptada",
        name: "Atividade Adaptada",
        description: "Adaptação de uma atividade para alunos com necessidades específicas",
        category: CategoryId::Diferenciacao,
        icon: "🧩",
        color: "#4338CA",
        keywords: &["atividade adaptada", "adaptacao curricular", "atividade inclusiva", "adaptar atividade"],
        expected_sections: &["Atividade Original", "Adaptações", "Apoios", "Avaliação Adaptada"],
        usage_example: "Adapte esta atividade de leitura para um aluno com dislexia",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Adapte a atividade indicada mantendo o mesmo objetivo de aprendizagem.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Atividade Adaptada — {tema}

## Atividade Original
Resumo da atividade e do objetivo que deve ser preservado.

## Adaptações
Mudanças concretas de formato, extensão, tempo e apresentação, cada uma ligada à necessidade indicada.

## Apoios
Recursos de apoio (visuais, leitura em voz alta, tecnologia) e quando usá-los.

## Avaliação Adaptada
Como verificar o mesmo objetivo pela via adaptada.

REGRAS:
- Responda em português brasileiro
- Adaptar o acesso, nunca rebaixar o objetivo
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "plano_reforco",
        name: "Plano de Reforço",
        description: "Plano de recuperação de aprendizagem com diagnóstico e metas curtas",
        category: CategoryId::Diferenciacao,
        icon: "🪜",
        color: "#4338CA",
        keywords: &["reforco", "plano de reforco", "recuperacao", "recuperacao paralela"],
        expected_sections: &["Diagnóstico", "Metas", "Sequência de Reforço", "Acompanhamento"],
        usage_example: "Crie um plano de reforço de leitura para alunos do 3º ano",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um plano de reforço de aprendizagem.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Plano de Reforço — {tema}

## Diagnóstico
Atividade curta para localizar exatamente onde está a lacuna.

## Metas
2 a 3 metas pequenas e verificáveis com prazo.

## Sequência de Reforço
Encontros com atividade, duração e pré-requisito retomado em cada um.

## Acompanhamento
Como medir progresso a cada encontro e quando encerrar o reforço.

REGRAS:
- Responda em português brasileiro
- Retome o pré-requisito que falta, não repita a aula que falhou
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "atividade_enriquecimento",
        name: "Atividade de Enriquecimento",
        description: "Desafio de aprofundamento para alunos que avançam mais rápido",
        category: CategoryId::Diferenciacao,
        icon: "⭐",
        color: "#4338CA",
        keywords: &["enriquecimento", "aprofundamento", "desafio extra", "atividade avancada"],
        expected_sections: &["Desafio", "Recursos", "Produto", "Critérios"],
        usage_example: "Monte um desafio de aprofundamento de geometria",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de enriquecimento.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Atividade de Enriquecimento — {tema}

## Desafio
Problema aberto que aprofunda o conteúdo, não apenas "mais do mesmo".

## Recursos
Materiais e fontes para investigação autônoma.

## Produto
O que o aluno produz e compartilha com a turma.

## Critérios
O que distingue aprofundamento real de volume extra.

REGRAS:
- Responda em português brasileiro
- O desafio deve admitir mais de um caminho de solução
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "roteiro_estacoes",
        name: "Rotação por Estações",
        description: "Aula em estações com níveis diferentes trabalhando o mesmo objetivo",
        category: CategoryId::Diferenciacao,
        icon: "🔄",
        color: "#4338CA",
        keywords: &["rotacao por estacoes", "estacoes de aprendizagem", "aula em estacoes"],
        expected_sections: &["Objetivo Comum", "Estações", "Rotação", "Fechamento"],
        usage_example: "Crie uma rotação por estações sobre frações com 3 níveis",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma aula de rotação por estações.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Rotação por Estações — {tema}

## Objetivo Comum
O objetivo único que todas as estações trabalham por caminhos diferentes.

## Estações
3 a 4 estações com atividade, materiais e nível de apoio de cada uma (com professor, em dupla, autônoma).

## Rotação
Tempos, ordem de troca e sinal de rotação.

## Fechamento
Síntese coletiva conectando o que cada estação produziu.

REGRAS:
- Responda em português brasileiro
- Toda estação deve funcionar sem o professor presente, exceto a indicada
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
