//! # Edital Drafting Prompt
//!
//! The single prompt sent to the AI provider to draft an internship-selection
//! notice. The template is fixed; only the reference context and the form
//! parameters vary between requests.

use crate::types::{GenerationParameters, ReferenceContext};

/// Used in place of the reference context when no documents were uploaded.
pub const EDITAL_FALLBACK_STRUCTURE: &str = "Utilize o padrão geral de editais de estágio, com seções de Disposições Preliminares, Vagas, Inscrições, Provas, Classificação e Disposições Finais.";

/// The drafting template.
///
/// Placeholders: `{context}`, `{unit}`, `{area}`, `{positions}`, `{stipend}`,
/// `{transport_allowance}`, `{weekly_hours}`, `{supervisor}`, `{extra_info}`
pub const EDITAL_PROMPT_TEMPLATE: &str = r#"Você é um assistente especializado do Tribunal de Justiça de Minas Gerais (TJMG).
Sua tarefa é elaborar uma MINUTA DE EDITAL para seleção de estagiários.

### Contexto Normativo (Diretrizes/Modelos):
{context}

### Parâmetros do Edital:
- Unidade/Comarca: {unit}
- Área de Formação: {area}
- Número de Vagas: {positions}
- Valor da Bolsa: {stipend}
- Auxílio Transporte: {transport_allowance}
- Carga Horária: {weekly_hours}
- Supervisor/Responsável: {supervisor}
- Outros Detalhes: {extra_info}

### Instruções:
1. Gere o documento completo, formatado em Markdown.
2. Use linguagem formal e jurídica adequada.
3. Certifique-se de preencher os campos com as informações fornecidas.
4. Onde houver informações fáticas faltando (como datas específicas de prova), deixe lacunas (ex: [DATA]) ou [PREENCHER].
5. Inclua um cabeçalho apropriado para o TJMG.

Gere o texto da minuta abaixo:
"#;

/// Renders the drafting prompt.
///
/// Values are inserted verbatim in a single pass, so braces inside user text
/// are never treated as placeholders.
pub fn render_edital_prompt(params: &GenerationParameters, context: &ReferenceContext) -> String {
    let context_text = if context.is_empty() {
        EDITAL_FALLBACK_STRUCTURE.to_string()
    } else {
        context.as_prompt_text()
    };
    let area = params.area.to_string();
    let weekly_hours = params.weekly_hours.to_string();

    fill_template(
        EDITAL_PROMPT_TEMPLATE,
        &[
            ("context", &context_text),
            ("unit", &params.unit),
            ("area", &area),
            ("positions", &params.positions),
            ("stipend", &params.stipend),
            ("transport_allowance", &params.transport_allowance),
            ("weekly_hours", &weekly_hours),
            ("supervisor", &params.supervisor),
            ("extra_info", &params.extra_info),
        ],
    )
}

/// Replaces `{name}` placeholders with their values. Unknown placeholders are
/// left as they are.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
