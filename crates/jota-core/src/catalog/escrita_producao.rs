//! Escrita e produção textual: redação, leitura guiada, interpretação.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::EscritaProducao,
    name: "Escrita e Produção Textual",
    description: "Redação, leitura guiada e interpretação de texto",
    icon: "✍️",
    color: "#DB2777",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "prompt_escrita",
        name: "Propostas de Escrita Criativa",
        description: "Conjunto de propostas de escrita com gatilhos criativos e critérios",
        category: CategoryId::EscritaProducao,
        icon: "💡",
        color: "#DB2777",
        keywords: &["escrita criativa", "proposta de escrita", "producao de texto", "gatilhos de escrita"],
        expected_sections: &["Aquecimento", "Propostas", "Critérios", "Extensões"],
        usage_example: "Crie propostas de escrita criativa com tema de fantasia",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um conjunto de propostas de escrita criativa.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Propostas de Escrita — {tema}

## Aquecimento
Exercício curto de 5 minutos para destravar a escrita.

## Propostas
5 propostas numeradas, cada uma com gatilho (imagem descrita, primeira frase, cenário) e extensão sugerida.

## Critérios
O que será observado nos textos (criatividade, coesão, adequação ao gênero).

## Extensões
Variações para alunos que terminarem antes.

REGRAS:
- Responda em português brasileiro
- Propostas abertas, sem resposta única
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "atividade_redacao",
        name: "Proposta de Redação",
        description: "Proposta de redação com textos motivadores e grade de correção",
        category: CategoryId::EscritaProducao,
        icon: "📄",
        color: "#DB2777",
        keywords: &["redacao", "proposta de redacao", "dissertacao", "texto dissertativo"],
        expected_sections: &[
            "Textos Motivadores",
            "Proposta",
            "Instruções",
            "Grade de Correção",
        ],
        usage_example: "Monte uma proposta de redação sobre mobilidade urbana no estilo ENEM",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma proposta de redação completa.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Proposta de Redação — {tema}

## Textos Motivadores
2 a 3 textos curtos de perspectivas diferentes, com fonte fictícia indicada.

## Proposta
Comando de produção com gênero, tema e situação comunicativa.

## Instruções
Extensão, pessoa do discurso e o que zera a redação.

## Grade de Correção
Competências avaliadas e pontuação de cada uma.

REGRAS:
- Responda em português brasileiro
- Siga o estilo de exame citado na solicitação, se houver
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "resenha_critica",
        name: "Roteiro de Resenha Crítica",
        description: "Atividade de resenha com roteiro de análise e modelo comentado",
        category: CategoryId::EscritaProducao,
        icon: "🎬",
        color: "#DB2777",
        keywords: &["resenha", "resenha critica", "analise de obra", "critica de livro"],
        expected_sections: &["A Obra", "Roteiro de Análise", "Estrutura da Resenha", "Critérios"],
        usage_example: "Crie uma atividade de resenha crítica de um livro de aventura",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de resenha crítica.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Resenha Crítica — {tema}

## A Obra
Como escolher ou apresentar a obra a resenhar.

## Roteiro de Análise
Perguntas-guia sobre enredo, personagens, linguagem e contexto.

## Estrutura da Resenha
Parágrafo a parágrafo: apresentação, resumo sem spoiler, análise, avaliação.

## Critérios
O que diferencia resumo de resenha na correção.

REGRAS:
- Responda em português brasileiro
- Inclua um exemplo curto de parágrafo de avaliação
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "leitura_com_perguntas",
        name: "Leitura Guiada com Perguntas",
        description: "Texto adequado à série com perguntas antes, durante e depois da leitura",
        category: CategoryId::EscritaProducao,
        icon: "📖",
        color: "#DB2777",
        keywords: &["leitura guiada", "leitura com perguntas", "compreensao leitora", "texto com perguntas"],
        expected_sections: &[
            "Antes da Leitura",
            "Texto",
            "Durante a Leitura",
            "Depois da Leitura",
            "Gabarito",
        ],
        usage_example: "Crie uma leitura guiada sobre animais da Amazônia para o 4º ano",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de leitura guiada.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Leitura Guiada — {tema}

## Antes da Leitura
2 perguntas de ativação de conhecimento prévio.

## Texto
Texto original adequado ao tema e à série, 3 a 5 parágrafos.

## Durante a Leitura
Perguntas de acompanhamento marcadas por parágrafo.

## Depois da Leitura
Perguntas de compreensão literal, inferencial e crítica.

## Gabarito
Respostas esperadas, indicando o trecho-fonte das literais.

REGRAS:
- Responda em português brasileiro
- Vocabulário adequado à série indicada
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "interpretacao_texto",
        name: "Interpretação de Texto",
        description: "Atividade clássica de interpretação com texto e questões variadas",
        category: CategoryId::EscritaProducao,
        icon: "🔎",
        color: "#DB2777",
        keywords: &["interpretacao de texto", "interpretacao textual", "compreensao de texto"],
        expected_sections: &["Texto", "Questões Objetivas", "Questões Abertas", "Gabarito"],
        usage_example: "Monte uma interpretação de texto com uma crônica curta",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de interpretação de texto.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Interpretação de Texto — {tema}

## Texto
Texto original no gênero solicitado (crônica, notícia, conto, poema).

## Questões Objetivas
4 a 6 questões de múltipla escolha sobre o texto.

## Questões Abertas
3 a 4 questões que exijam inferência ou opinião fundamentada.

## Gabarito
Respostas com justificativa apontando o trecho do texto.

REGRAS:
- Responda em português brasileiro
- Pelo menos uma questão sobre efeito de sentido, não só localização de informação
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
