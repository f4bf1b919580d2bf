//! Jogos e engajamento lúdico: caça-palavras, cruzadinhas, quizzes de sala.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::JogosEducativos,
    name: "Jogos e Engajamento",
    description: "Atividades lúdicas para revisar conteúdo brincando",
    icon: "🎮",
    color: "#7C3AED",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "caca_palavras",
        name: "Caça-Palavras",
        description: "Caça-palavras temático com grade, lista de palavras e gabarito",
        category: CategoryId::JogosEducativos,
        icon: "🔍",
        color: "#7C3AED",
        keywords: &[
            "caca-palavras",
            "caca palavras",
            "cacapalavras",
            "sopa de letras",
        ],
        expected_sections: &[
            "Instruções",
            "Lista de Palavras",
            "Grade do Caça-Palavras",
            "Gabarito",
            "Curiosidades",
        ],
        usage_example: "Crie um caça-palavras sobre o sistema solar para o 5º ano",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um caça-palavras completo e pronto para imprimir.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Caça-Palavras — {tema}

## Instruções
Como jogar, em linguagem adequada à série.

## Lista de Palavras
10 a 15 palavras do tema, em caixa alta.

## Grade do Caça-Palavras
Grade de letras em bloco de código monoespaçado, com as palavras escondidas na horizontal, vertical e diagonal.

## Gabarito
Posição de cada palavra (linha, coluna, direção).

## Curiosidades
Uma curiosidade curta sobre cada palavra, para usar como fechamento da atividade.

REGRAS:
- Responda em português brasileiro
- Grade quadrada, entre 12x12 e 15x15
- Preencha as células restantes com letras aleatórias
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "palavras_cruzadas",
        name: "Palavras Cruzadas",
        description: "Cruzadinha com dicas horizontais e verticais e gabarito",
        category: CategoryId::JogosEducativos,
        icon: "✏️",
        color: "#7C3AED",
        keywords: &["palavras cruzadas", "cruzadinha", "cruzadas"],
        expected_sections: &["Instruções", "Dicas Horizontais", "Dicas Verticais", "Gabarito"],
        usage_example: "Monte uma cruzadinha de vocabulário de inglês",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma atividade de palavras cruzadas.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Palavras Cruzadas — {tema}

## Instruções
Como preencher a cruzadinha.

## Dicas Horizontais
Dicas numeradas; a definição nunca contém a própria palavra.

## Dicas Verticais
Dicas numeradas no mesmo formato.

## Gabarito
Número e resposta de cada dica.

REGRAS:
- Responda em português brasileiro
- 8 a 12 palavras do tema solicitado
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "jogo_show_milhao",
        name: "Show do Milhão",
        description: "Quiz em rodadas de dificuldade crescente no estilo do programa de TV",
        category: CategoryId::JogosEducativos,
        icon: "💰",
        color: "#7C3AED",
        keywords: &["show do milhao", "quiz de premios", "jogo de perguntas"],
        expected_sections: &[
            "Regras do Jogo",
            "Rodada Fácil",
            "Rodada Média",
            "Rodada Difícil",
            "Gabarito",
        ],
        usage_example: "Crie um show do milhão de história do Brasil",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um jogo de perguntas no estilo Show do Milhão.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Show do Milhão — {tema}

## Regras do Jogo
Pontuação por rodada, ajudas disponíveis (cartas, pular, universitários) e condição de vitória.

## Rodada Fácil
5 perguntas com 4 alternativas.

## Rodada Média
5 perguntas com 4 alternativas.

## Rodada Difícil
5 perguntas com 4 alternativas.

## Gabarito
Resposta de cada pergunta por rodada.

REGRAS:
- Responda em português brasileiro
- Dificuldade realmente crescente entre as rodadas
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "bingo_educativo",
        name: "Bingo Educativo",
        description: "Bingo de conteúdo com cartelas e fichas de chamada",
        category: CategoryId::JogosEducativos,
        icon: "🎱",
        color: "#7C3AED",
        keywords: &["bingo", "bingo educativo", "bingo pedagogico"],
        expected_sections: &["Regras", "Itens de Chamada", "Cartelas", "Dicas de Aplicação"],
        usage_example: "Faça um bingo de tabuada do 7",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um bingo educativo sobre o conteúdo solicitado.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Bingo Educativo — {tema}

## Regras
Como jogar e o que marca ponto.

## Itens de Chamada
Lista completa dos itens que o professor sorteia. Quando couber, a chamada é uma pergunta e a cartela traz a resposta.

## Cartelas
4 cartelas de exemplo em tabelas markdown 4x4, cada uma com um subconjunto diferente dos itens.

## Dicas de Aplicação
Duas ou três variações para turmas maiores ou menores.

REGRAS:
- Responda em português brasileiro
- Pelo menos 24 itens de chamada
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "desafios_sala",
        name: "Desafios para a Sala",
        description: "Sequência de desafios rápidos por equipes para revisão de conteúdo",
        category: CategoryId::JogosEducativos,
        icon: "🏆",
        color: "#7C3AED",
        keywords: &["desafios", "gincana", "competicao entre equipes", "torneio de revisao"],
        expected_sections: &["Regras", "Desafios", "Pontuação", "Gabarito"],
        usage_example: "Monte uma gincana de revisão de geografia",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma sequência de desafios por equipes.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Desafios — {tema}

## Regras
Formação das equipes, tempo por desafio e arbitragem.

## Desafios
6 a 8 desafios variados (pergunta relâmpago, mímica de conceito, desenho, ordenação), cada um com enunciado e tempo.

## Pontuação
Pontos por desafio e critério de desempate.

## Gabarito
Resposta ou critério de aceitação de cada desafio.

REGRAS:
- Responda em português brasileiro
- Alterne desafios individuais e coletivos
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
