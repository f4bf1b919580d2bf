//! Organizadores e materiais de estudo: rubricas, mapas mentais, guias.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Organizadores,
    name: "Organizadores e Estudo",
    description: "Rubricas, mapas mentais e materiais de organização do estudo",
    icon: "📊",
    color: "#059669",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "rubrica_avaliacao",
        name: "Rubrica de Avaliação",
        description: "Rubrica em tabela com critérios, níveis de desempenho e descritores",
        category: CategoryId::Organizadores,
        icon: "📏",
        color: "#059669",
        keywords: &["rubrica", "rubrica de avaliacao", "criterios de avaliacao", "descritores"],
        expected_sections: &["Objetivo", "Tabela da Rubrica", "Como Usar", "Feedback ao Aluno"],
        usage_example: "Crie uma rubrica para avaliar apresentações orais",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma rubrica de avaliação completa.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Rubrica — {tema}

## Objetivo
O que a rubrica avalia e em que momento aplicá-la.

## Tabela da Rubrica
Tabela markdown: critérios nas linhas, 4 níveis nas colunas (Excelente, Bom, Em Desenvolvimento, Inicial), descritores observáveis em cada célula.

## Como Usar
Orientação de pontuação e conversão para nota.

## Feedback ao Aluno
Frases modelo de devolutiva para cada nível.

REGRAS:
- Responda em português brasileiro
- 4 a 6 critérios, descritores sem juízo vago ("bom", "ruim")
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "gabarito_comentado",
        name: "Gabarito Comentado",
        description: "Resolução comentada de uma lista de questões, passo a passo",
        category: CategoryId::Organizadores,
        icon: "🗝️",
        color: "#059669",
        keywords: &["gabarito comentado", "resolucao comentada", "correcao comentada"],
        expected_sections: &["Visão Geral", "Resolução por Questão", "Erros Comuns"],
        usage_example: "Faça o gabarito comentado desta lista de equações",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um gabarito comentado para as questões indicadas.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Gabarito Comentado — {tema}

## Visão Geral
Conteúdos cobrados e distribuição de dificuldade.

## Resolução por Questão
Para cada questão: resposta correta, resolução passo a passo e por que as demais alternativas falham.

## Erros Comuns
Os equívocos mais prováveis dos alunos e como o professor pode abordá-los.

REGRAS:
- Responda em português brasileiro
- Se as questões não vierem na solicitação, gere-as junto com a resolução
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "mapa_mental",
        name: "Mapa Mental",
        description: "Mapa mental textual hierárquico com ramos e palavras-chave",
        category: CategoryId::Organizadores,
        icon: "🧠",
        color: "#059669",
        keywords: &["mapa mental", "mapa conceitual", "esquema de estudo"],
        expected_sections: &["Conceito Central", "Ramos Principais", "Detalhamento", "Como Estudar"],
        usage_example: "Crie um mapa mental sobre fotossíntese",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um mapa mental em formato textual hierárquico.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Mapa Mental — {tema}

## Conceito Central
O conceito raiz em uma frase.

## Ramos Principais
Lista aninhada (até 3 níveis) com palavras-chave curtas, não frases longas.

## Detalhamento
Uma explicação de duas frases por ramo principal.

## Como Estudar
Sugestão de uso do mapa para revisão ativa.

REGRAS:
- Responda em português brasileiro
- 4 a 6 ramos principais
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "guia_estudo_apostila",
        name: "Guia de Estudo",
        description: "Apostila curta com teoria, exemplos resolvidos e exercícios de fixação",
        category: CategoryId::Organizadores,
        icon: "📚",
        color: "#059669",
        keywords: &["guia de estudo", "apostila", "material de estudo", "resumo teorico"],
        expected_sections: &[
            "Objetivos de Aprendizagem",
            "Teoria",
            "Exemplos Resolvidos",
            "Exercícios de Fixação",
            "Gabarito",
        ],
        usage_example: "Monte um guia de estudo sobre regra de três",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um guia de estudo completo em formato de apostila curta.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Guia de Estudo — {tema}

## Objetivos de Aprendizagem
O que o aluno saberá fazer ao final, em itens iniciados por verbo.

## Teoria
Explicação do conteúdo em linguagem direta, com analogias quando ajudarem.

## Exemplos Resolvidos
2 a 3 exemplos com resolução comentada linha a linha.

## Exercícios de Fixação
6 a 8 exercícios em dificuldade crescente.

## Gabarito
Respostas dos exercícios, com resolução resumida dos mais difíceis.

REGRAS:
- Responda em português brasileiro
- Teoria antes da prática, sem pular pré-requisitos
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "quadro_comparativo",
        name: "Quadro Comparativo",
        description: "Tabela comparando conceitos, períodos ou obras por critérios definidos",
        category: CategoryId::Organizadores,
        icon: "⚖️",
        color: "#059669",
        keywords: &["quadro comparativo", "tabela comparativa", "comparacao", "diferencas e semelhancas"],
        expected_sections: &["Critérios", "Tabela Comparativa", "Síntese", "Questões de Verificação"],
        usage_example: "Crie um quadro comparativo entre mitose e meiose",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um quadro comparativo sobre os itens solicitados.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Quadro Comparativo — {tema}

## Critérios
Critérios de comparação escolhidos e por quê.

## Tabela Comparativa
Tabela markdown: critérios nas linhas, itens comparados nas colunas.

## Síntese
Parágrafo destacando as diferenças decisivas.

## Questões de Verificação
3 perguntas que exigem consultar a tabela para responder.

REGRAS:
- Responda em português brasileiro
- Células curtas e paralelas entre colunas
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
