//! Avaliações e exercícios: provas, simulados, questões objetivas e abertas.
//!
//! Keywords are stored pre-normalized (lowercase, diacritics stripped);
//! matching happens over the same normal form.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Avaliacoes,
    name: "Avaliações e Exercícios",
    description: "Provas, simulados e exercícios prontos para aplicar e corrigir",
    icon: "📝",
    color: "#DC2626",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "prova_personalizada",
        name: "Prova Personalizada",
        description: "Prova completa com questões objetivas e dissertativas, gabarito e critérios de correção",
        category: CategoryId::Avaliacoes,
        icon: "📝",
        color: "#DC2626",
        keywords: &[
            "prova",
            "avaliacao",
            "teste",
            "exame",
            "prova personalizada",
            "prova bimestral",
            "prova mensal",
            "avaliacao bimestral",
        ],
        expected_sections: &[
            "Instruções",
            "Questões Objetivas",
            "Questões Dissertativas",
            "Gabarito",
            "Critérios de Correção",
        ],
        usage_example: "Crie uma prova de matemática sobre frações para o 6º ano",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma prova personalizada completa e pronta para aplicar.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Prova — {tema}

## Instruções
Orientações claras ao aluno: tempo, material permitido, valor de cada questão.

## Questões Objetivas
Questões de múltipla escolha com 4 alternativas (a-d), numeradas.

## Questões Dissertativas
Questões abertas com espaço de resposta indicado e pontuação.

## Gabarito
Resposta de cada questão objetiva e resposta esperada das dissertativas.

## Critérios de Correção
Rubrica curta por questão dissertativa.

REGRAS:
- Responda em português brasileiro
- Adeque a dificuldade à série indicada na solicitação
- Distribua a pontuação somando 10,0
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "simulado",
        name: "Simulado",
        description: "Simulado no formato de vestibular ou concurso, com cartão-resposta e gabarito comentado",
        category: CategoryId::Avaliacoes,
        icon: "🎯",
        color: "#DC2626",
        keywords: &["simulado", "simulado enem", "vestibular", "simuladinho"],
        expected_sections: &[
            "Instruções",
            "Questões",
            "Cartão-Resposta",
            "Gabarito Comentado",
        ],
        usage_example: "Monte um simulado de ciências no estilo ENEM",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um simulado completo no formato solicitado.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Simulado — {tema}

## Instruções
Tempo total, número de questões e forma de marcação.

## Questões
Questões contextualizadas no estilo do exame indicado, com 5 alternativas (a-e).

## Cartão-Resposta
Tabela simples para marcação das respostas.

## Gabarito Comentado
Alternativa correta de cada questão com justificativa de uma ou duas frases.

REGRAS:
- Responda em português brasileiro
- Use enunciados contextualizados, não perguntas secas
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "multipla_escolha",
        name: "Questões de Múltipla Escolha",
        description: "Lista de questões objetivas com alternativas e gabarito",
        category: CategoryId::Avaliacoes,
        icon: "🔘",
        color: "#DC2626",
        keywords: &[
            "multipla escolha",
            "questoes objetivas",
            "alternativas",
            "questoes de marcar",
        ],
        expected_sections: &["Instruções", "Questões", "Gabarito"],
        usage_example: "Gere 10 questões de múltipla escolha sobre o ciclo da água",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma lista de questões de múltipla escolha.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Questões de Múltipla Escolha — {tema}

## Instruções
Orientação curta de preenchimento.

## Questões
Questões numeradas, cada uma com 4 alternativas (a-d) e apenas uma correta. Distratores plausíveis, sem pegadinhas de ambiguidade.

## Gabarito
Lista numerada com a alternativa correta de cada questão.

REGRAS:
- Responda em português brasileiro
- Respeite a quantidade de questões pedida; na ausência, gere 10
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "verdadeiro_falso",
        name: "Verdadeiro ou Falso",
        description: "Afirmações para julgamento com justificativa das falsas",
        category: CategoryId::Avaliacoes,
        icon: "✅",
        color: "#DC2626",
        keywords: &["verdadeiro ou falso", "verdadeiro falso", "certo ou errado", "julgue"],
        expected_sections: &["Instruções", "Afirmações", "Gabarito Justificado"],
        usage_example: "Crie um verdadeiro ou falso sobre o sistema digestório",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de verdadeiro ou falso.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Verdadeiro ou Falso — {tema}

## Instruções
Marque V ou F; afirmações falsas devem ser corrigidas pelo aluno.

## Afirmações
Afirmações numeradas, misturando verdadeiras e falsas em proporção equilibrada.

## Gabarito Justificado
V/F de cada item; para as falsas, a versão corrigida da afirmação.

REGRAS:
- Responda em português brasileiro
- Evite negações duplas nos enunciados
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "preencher_lacunas",
        name: "Preencher Lacunas",
        description: "Texto ou frases com lacunas para completar, com banco de palavras opcional",
        category: CategoryId::Avaliacoes,
        icon: "✏️",
        color: "#DC2626",
        keywords: &[
            "preencher lacunas",
            "completar lacunas",
            "complete as frases",
            "lacunas",
        ],
        expected_sections: &["Instruções", "Banco de Palavras", "Exercício", "Gabarito"],
        usage_example: "Monte um exercício de preencher lacunas sobre verbos no pretérito",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um exercício de preencher lacunas.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Preencher Lacunas — {tema}

## Instruções
Orientação de preenchimento, indicando se o banco de palavras pode ser usado.

## Banco de Palavras
Palavras embaralhadas, incluindo alguns distratores.

## Exercício
Frases ou texto corrido com lacunas marcadas por ______.

## Gabarito
Lacunas numeradas com a resposta correta.

REGRAS:
- Responda em português brasileiro
- Uma lacuna por informação essencial, sem remover palavras triviais
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "questoes_dissertativas",
        name: "Questões Dissertativas",
        description: "Questões abertas com resposta esperada e rubrica de pontuação",
        category: CategoryId::Avaliacoes,
        icon: "📜",
        color: "#DC2626",
        keywords: &[
            "dissertativa",
            "discursiva",
            "questoes abertas",
            "questoes dissertativas",
            "questoes discursivas",
        ],
        expected_sections: &["Instruções", "Questões", "Respostas Esperadas", "Rubrica"],
        usage_example: "Crie questões dissertativas sobre a Revolução Industrial",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma lista de questões dissertativas.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Questões Dissertativas — {tema}

## Instruções
Orientação de extensão e forma das respostas.

## Questões
Questões numeradas que exijam explicação, comparação ou argumentação, não memorização.

## Respostas Esperadas
Resposta modelo resumida de cada questão.

## Rubrica
Critérios de pontuação por questão (completo / parcial / insuficiente).

REGRAS:
- Responda em português brasileiro
- Use verbos de comando claros (explique, compare, justifique)
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
