//! Planejamento docente: unidades, projetos, cronogramas, laboratório.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Planejamento,
    name: "Planejamento",
    description: "Planos de unidade, projetos e cronogramas do professor",
    icon: "📅",
    color: "#0369A1",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "plano_unidade",
        name: "Plano de Unidade",
        description: "Plano de unidade didática com objetivos, aulas e avaliação alinhados",
        category: CategoryId::Planejamento,
        icon: "🗂️",
        color: "#0369A1",
        keywords: &["plano de unidade", "unidade didatica", "planejamento de unidade", "plano de ensino"],
        expected_sections: &[
            "Objetivos",
            "Competências BNCC",
            "Sequência de Aulas",
            "Recursos",
            "Avaliação",
        ],
        usage_example: "Crie um plano de unidade sobre ecossistemas para 3 semanas",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um plano de unidade didática completo.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Plano de Unidade — {tema}

## Objetivos
Objetivos de aprendizagem iniciados por verbo observável.

## Competências BNCC
Habilidades da BNCC plausíveis para o tema e a série, com código e descrição.

## Sequência de Aulas
Aula a aula: objetivo do dia, atividade principal e tarefa.

## Recursos
Materiais e tecnologias necessários por aula.

## Avaliação
Instrumentos formativos e somativos alinhados aos objetivos.

REGRAS:
- Responda em português brasileiro
- Cada objetivo deve aparecer em pelo menos uma aula e um instrumento de avaliação
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "planejamento_anual",
        name: "Planejamento Anual",
        description: "Distribuição anual de conteúdos por bimestre com marcos de avaliação",
        category: CategoryId::Planejamento,
        icon: "🗓️",
        color: "#0369A1",
        keywords: &["planejamento anual", "plano anual", "distribuicao de conteudos", "plano bimestral"],
        expected_sections: &["Visão Geral", "1º Bimestre", "2º Bimestre", "3º Bimestre", "4º Bimestre"],
        usage_example: "Monte o planejamento anual de matemática do 7º ano",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um planejamento anual por bimestre.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Planejamento Anual — {tema}

## Visão Geral
Fio condutor do ano e progressão entre bimestres.

## 1º Bimestre
Conteúdos, habilidades e avaliação do período.

## 2º Bimestre
Mesmo formato.

## 3º Bimestre
Mesmo formato.

## 4º Bimestre
Mesmo formato, incluindo revisão final.

REGRAS:
- Responda em português brasileiro
- Retome conteúdos anteriores em espiral a cada bimestre
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "roteiro_projeto_pbl",
        name: "Projeto (Aprendizagem Baseada em Projetos)",
        description: "Roteiro de projeto PBL com pergunta motriz, etapas e produto final",
        category: CategoryId::Planejamento,
        icon: "🚀",
        color: "#0369A1",
        keywords: &["projeto", "aprendizagem baseada em projetos", "roteiro de projeto", "projeto interdisciplinar"],
        expected_sections: &[
            "Pergunta Motriz",
            "Etapas do Projeto",
            "Papéis da Equipe",
            "Produto Final",
            "Avaliação",
        ],
        usage_example: "Crie um projeto sobre consumo de água na escola",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um roteiro de projeto no modelo de aprendizagem baseada em projetos.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Projeto — {tema}

## Pergunta Motriz
Uma pergunta aberta e autêntica que guia todo o projeto.

## Etapas do Projeto
Fases com duração, entregas parciais e momentos de feedback.

## Papéis da Equipe
Funções rotativas dentro de cada grupo.

## Produto Final
O que as equipes apresentam e para qual público.

## Avaliação
Avaliação de processo e de produto, com autoavaliação.

REGRAS:
- Responda em português brasileiro
- O produto final deve responder à pergunta motriz
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "cronograma_estudos",
        name: "Cronograma de Estudos",
        description: "Cronograma semanal de estudos com blocos, revisões e descanso",
        category: CategoryId::Planejamento,
        icon: "⏰",
        color: "#0369A1",
        keywords: &["cronograma de estudos", "plano de estudos", "rotina de estudos", "horario de estudos"],
        expected_sections: &["Diagnóstico", "Cronograma Semanal", "Técnicas de Estudo", "Acompanhamento"],
        usage_example: "Monte um cronograma de estudos para a prova de recuperação",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um cronograma de estudos realista.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Cronograma de Estudos — {tema}

## Diagnóstico
Perguntas rápidas para o aluno mapear pontos fracos antes de começar.

## Cronograma Semanal
Tabela markdown dia a dia com blocos de 25 a 50 minutos, intervalos e revisões espaçadas.

## Técnicas de Estudo
Técnica recomendada por tipo de conteúdo (resumo ativo, flashcards, exercícios).

## Acompanhamento
Checklist semanal de progresso.

REGRAS:
- Responda em português brasileiro
- Inclua descanso de verdade, não só estudo
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "roteiro_laboratorio",
        name: "Roteiro de Laboratório",
        description: "Roteiro de experimento com segurança, procedimento e análise",
        category: CategoryId::Planejamento,
        icon: "🧪",
        color: "#0369A1",
        keywords: &["roteiro de laboratorio", "experimento", "aula pratica", "experiencia cientifica"],
        expected_sections: &[
            "Objetivo",
            "Materiais e Segurança",
            "Procedimento",
            "Registro de Observações",
            "Análise e Conclusão",
        ],
        usage_example: "Crie um roteiro de laboratório sobre densidade com materiais simples",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um roteiro de laboratório completo e seguro.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Roteiro de Laboratório — {tema}

## Objetivo
O que o experimento demonstra e a hipótese a testar.

## Materiais e Segurança
Lista de materiais acessíveis e cuidados obrigatórios.

## Procedimento
Passo a passo numerado, com tempos estimados.

## Registro de Observações
Tabela para o aluno anotar medições e observações.

## Análise e Conclusão
Perguntas que conectam o observado à teoria.

REGRAS:
- Responda em português brasileiro
- Priorize materiais de baixo custo
- Avisos de segurança antes do passo que os exige
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
