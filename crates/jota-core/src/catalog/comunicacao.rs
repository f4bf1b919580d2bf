//! Comunicação com famílias e turma: bilhetes, comunicados, reuniões.

use super::{Category, CategoryId, TemplateDefinition};

pub(super) const CATEGORY: Category = Category {
    id: CategoryId::Comunicacao,
    name: "Comunicação",
    description: "Bilhetes, comunicados e reuniões com famílias e turma",
    icon: "📬",
    color: "#D97706",
    templates: TEMPLATES,
};

const TEMPLATES: &[TemplateDefinition] = &[
    TemplateDefinition {
        id: "bilhete_responsaveis",
        name: "Bilhete aos Responsáveis",
        description: "Bilhete curto e cordial para a família sobre um assunto pontual",
        category: CategoryId::Comunicacao,
        icon: "💌",
        color: "#D97706",
        keywords: &["bilhete", "bilhete para os pais", "recado para responsaveis", "comunicado aos pais"],
        expected_sections: &["Bilhete", "Canhoto de Ciência"],
        usage_example: "Escreva um bilhete sobre a visita ao museu na sexta-feira",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Escreva um bilhete aos responsáveis.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Bilhete — {tema}

## Bilhete
Texto cordial e objetivo: o que, quando, o que a família precisa fazer. Máximo de um parágrafo curto mais lista de itens, se houver.

## Canhoto de Ciência
Linha destacável com nome do aluno e assinatura do responsável.

REGRAS:
- Responda em português brasileiro
- Tom respeitoso, sem jargão escolar
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "comunicado_turma",
        name: "Comunicado para a Turma",
        description: "Aviso claro para os alunos sobre prazos, eventos ou mudanças",
        category: CategoryId::Comunicacao,
        icon: "📢",
        color: "#D97706",
        keywords: &["comunicado", "aviso para a turma", "recado para a turma"],
        expected_sections: &["Comunicado", "Perguntas Frequentes"],
        usage_example: "Faça um comunicado sobre a mudança de data da prova",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Escreva um comunicado para a turma.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Comunicado — {tema}

## Comunicado
A informação principal na primeira frase; depois detalhes de data, local e o que o aluno deve fazer.

## Perguntas Frequentes
3 perguntas prováveis dos alunos com respostas de uma linha.

REGRAS:
- Responda em português brasileiro
- Linguagem direta, adequada à idade dos alunos
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "boletim_informativo",
        name: "Boletim da Turma",
        description: "Boletim periódico com destaques, agenda e reconhecimentos",
        category: CategoryId::Comunicacao,
        icon: "📰",
        color: "#D97706",
        keywords: &["boletim informativo", "boletim da turma", "newsletter da turma", "jornalzinho"],
        expected_sections: &["Destaques do Período", "Agenda", "Reconhecimentos", "Recado da Turma"],
        usage_example: "Monte o boletim mensal da turma do 5º ano B",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um boletim informativo da turma.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Boletim da Turma — {tema}

## Destaques do Período
O que a turma aprendeu e produziu, em tom celebratório e concreto.

## Agenda
Próximas datas importantes em lista.

## Reconhecimentos
Espaço para destacar esforços da turma (sem ranquear alunos).

## Recado da Turma
Parágrafo de fechamento convidando as famílias a participar.

REGRAS:
- Responda em português brasileiro
- Deixe marcadores [PREENCHER] onde faltarem dados específicos
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
    TemplateDefinition {
        id: "roteiro_reuniao_pais",
        name: "Roteiro de Reunião de Pais",
        description: "Pauta e condução de reunião de responsáveis com tempos definidos",
        category: CategoryId::Comunicacao,
        icon: "🤝",
        color: "#D97706",
        keywords: &["reuniao de pais", "reuniao de responsaveis", "pauta de reuniao"],
        expected_sections: &["Pauta", "Condução", "Materiais", "Encaminhamentos"],
        usage_example: "Crie o roteiro da reunião de pais do fim do bimestre",
        prompt_template: r#"Você é o Jota, assistente pedagógico do Ponto School. Crie um roteiro de reunião de responsáveis.

SOLICITAÇÃO DO PROFESSOR:
{solicitacao}

CONTEXTO DA SESSÃO (se disponível):
{contexto}

ESTRUTURE COM AS SEGUINTES SEÇÕES (use headers markdown ##):

# Reunião de Responsáveis — {tema}

## Pauta
Itens da reunião com tempo previsto para cada um.

## Condução
Fala de abertura, como apresentar resultados da turma sem expor alunos, e como abrir espaço para perguntas.

## Materiais
O que preparar e projetar.

## Encaminhamentos
Modelo de registro de combinados e próximos passos.

REGRAS:
- Responda em português brasileiro
- Reunião de no máximo 60 minutos
- NÃO retorne JSON, retorne o documento completo em markdown"#,
    },
];
