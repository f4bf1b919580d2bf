//! Engajamento e metodologias ativas: exit tickets, debates, estudos de caso.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Engajamento,
    name: "Engajamento e Metodologias Ativas",
    description: "Exit tickets, debates e dinâmicas de participação",
    icon: "🎫",
    color: "#0891B2",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "exit_ticket",
        name: "Exit Ticket",
        description: "Verificação rápida de aprendizagem para o fim da aula",
        category: CategoryId::Engajamento,
        icon: "🎫",
        color: "#0891B2",
        keywords: &["exit ticket", "bilhete de saida", "verificacao de saida", "ticket de saida"],
        expected_sections: &["Perguntas", "Escala de Confiança", "Como Usar as Respostas"],
        usage_example: "Crie um exit ticket sobre a aula de frações equivalentes",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um exit ticket para o fim da aula.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Exit Ticket — {tema}

## Perguntas
3 perguntas curtas: uma de conteúdo, uma de aplicação, uma de dúvida aberta ("o que ainda confunde você?").

## Escala de Confiança
Autoavaliação de 1 a 4 sobre o conteúdo do dia.

## Como Usar as Respostas
Como o professor agrupa as respostas para planejar a próxima aula.

REGRAS:
- Responda em português brasileiro
- Respondível em 5 minutos no máximo
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "icebreaker_acolhimento",
        name: "Dinâmica de Acolhimento",
        description: "Dinâmicas quebra-gelo para início de aula ou de ano letivo",
        category: CategoryId::Engajamento,
        icon: "👋",
        color: "#0891B2",
        keywords: &["quebra-gelo", "quebra gelo", "dinamica de acolhimento", "icebreaker", "dinamica de grupo"],
        expected_sections: &["Objetivo", "Dinâmicas", "Variações", "Fechamento"],
        usage_example: "Monte dinâmicas de acolhimento para a primeira semana de aula",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie dinâmicas de acolhimento para a turma.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Dinâmicas de Acolhimento — {tema}

## Objetivo
O clima que as dinâmicas buscam criar.

## Dinâmicas
3 dinâmicas com passo a passo, duração e materiais.

## Variações
Adaptação para turmas tímidas e para turmas agitadas.

## Fechamento
Roda de conversa curta para encerrar.

REGRAS:
- Responda em português brasileiro
- Nenhuma dinâmica pode expor aluno a constrangimento
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "estudo_de_caso",
        name: "Estudo de Caso",
        description: "Caso realista com dilema, perguntas de análise e plenária",
        category: CategoryId::Engajamento,
        icon: "🗃️",
        color: "#0891B2",
        keywords: &["estudo de caso", "caso para analise", "situacao problema"],
        expected_sections: &["O Caso", "Perguntas de Análise", "Trabalho em Grupo", "Plenária"],
        usage_example: "Crie um estudo de caso sobre descarte de lixo eletrônico",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um estudo de caso para discussão em sala.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Estudo de Caso — {tema}

## O Caso
Narrativa realista de 3 a 4 parágrafos com um dilema sem resposta óbvia.

## Perguntas de Análise
Perguntas que forçam o uso do conteúdo para resolver o dilema.

## Trabalho em Grupo
Como os grupos estruturam e registram sua recomendação.

## Plenária
Condução da discussão final e síntese do professor.

REGRAS:
- Responda em português brasileiro
- O caso deve ter dados concretos, não só opinião
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "debate_estruturado",
        name: "Debate Estruturado",
        description: "Debate com papéis, tempos e grade de avaliação de argumentação",
        category: CategoryId::Engajamento,
        icon: "🎙️",
        color: "#0891B2",
        keywords: &["debate", "debate estruturado", "debate regrado", "argumentacao"],
        expected_sections: &[
            "Tema e Moção",
            "Regras e Formato",
            "Preparação das Equipes",
            "Guia do Mediador",
            "Avaliação",
        ],
        usage_example: "Monte um debate sobre uso de celular na escola",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um debate estruturado completo.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Debate Estruturado — {tema}

## Tema e Moção
A moção em frase afirmativa debatível.

## Regras e Formato
Rodadas, tempos de fala e ordem das equipes.

## Preparação das Equipes
Argumentos iniciais a favor e contra, com fontes sugeridas para pesquisa.

## Guia do Mediador
Falas prontas de abertura, transição e controle de tempo.

## Avaliação
Grade de pontuação de argumentação, réplica e postura.

REGRAS:
- Responda em português brasileiro
- Dê munição equilibrada para os dois lados
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "lista_vocabulario_definicoes",
        name: "Lista de Vocabulário",
        description: "Vocabulário do tema com definições, exemplos e exercícios de uso",
        category: CategoryId::Engajamento,
        icon: "🔤",
        color: "#0891B2",
        keywords: &["vocabulario", "lista de vocabulario", "glossario", "palavras-chave do tema"],
        expected_sections: &["Termos e Definições", "Exemplos em Contexto", "Exercícios", "Gabarito"],
        usage_example: "Crie uma lista de vocabulário sobre clima e tempo",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie uma lista de vocabulário com exercícios.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Vocabulário — {tema}

## Termos e Definições
10 a 15 termos com definição em linguagem da série.

## Exemplos em Contexto
Uma frase de uso real para cada termo.

## Exercícios
Exercícios de associação e de completar frases com os termos.

## Gabarito
Respostas dos exercícios.

REGRAS:
- Responda em português brasileiro
- Definições sem circularidade (não definir o termo com ele mesmo)
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
