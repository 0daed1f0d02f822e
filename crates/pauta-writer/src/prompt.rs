use pauta_core::markers::{
    ATTRIBUTION_LINE, BODY_MARKER, CALL_TO_ACTION, CAPTION_MARKER, HEADLINE_MARKER, OUTLET_NAME,
    UNKNOWN_DATE,
};
use pauta_core::{ReportDetails, ReportInput};

/// Build the full instruction text for one report.
///
/// Pure: the date and time come from the input verbatim, never from the
/// clock, so the same report always yields the same prompt.
pub fn build(input: &ReportInput) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("Você é um repórter experiente do site \"");
    out.push_str(OUTLET_NAME);
    out.push_str(
        "\". Escreva uma matéria jornalística completa e também uma sugestão de legenda \
para o Instagram.\n\n",
    );

    out.push_str("DADOS DA OCORRÊNCIA:\n");
    out.push_str("DATA/HORA: ");
    out.push_str(&date_line(&input.date, &input.time));
    out.push('\n');
    serialize_details(&mut out, &input.details);
    out.push_str(
        "(Se houver imagens anexadas, use-as para descrever melhor o cenário, veículos ou \
contexto visual, mas mantenha o tom profissional).\n\n",
    );

    out.push_str(&instructions());
    out
}

fn date_line(date: &str, time: &str) -> String {
    if date.is_empty() || time.is_empty() {
        UNKNOWN_DATE.to_string()
    } else {
        format!("{date} às {time}")
    }
}

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
    out.push_str(".\n");
}

fn serialize_details(out: &mut String, details: &ReportDetails) {
    match details {
        ReportDetails::General { location, account } => {
            out.push_str("TIPO: Notícia Geral.\n");
            field(out, "LOCAL", location);
            field(out, "RELATO", account);
        }
        ReportDetails::FireRescue {
            incident_type,
            parties,
            victim_count,
            injuries,
            responder,
            destination,
            location,
            account,
        } => {
            out.push_str("TIPO: Acidente de Trânsito / Ocorrência Bombeiros.\n");
            field(out, "NATUREZA", incident_type);
            field(out, "LOCAL", location);
            field(out, "ENVOLVIDOS", parties);
            field(out, "Nº VÍTIMAS", victim_count);
            field(out, "TIPO LESÕES", injuries);
            field(out, "QUEM ATENDEU", responder.label());
            field(out, "DESTINO VÍTIMAS", destination);
            field(out, "RELATO DO FATO", account);
        }
        ReportDetails::Police {
            occurrence_type,
            neighborhood,
            location,
            destination,
            unit,
            details,
        } => {
            out.push_str("TIPO: Ocorrência Policial.\n");
            field(out, "NATUREZA DO CRIME", occurrence_type);
            field(out, "BAIRRO", neighborhood);
            field(out, "LOCAL EXATO", location);
            field(out, "PARA ONDE FOI LEVADO", destination);
            field(out, "EQUIPE", unit);
            field(out, "DETALHES EXTRAS", details);
        }
    }
}

/// Output directives. Identical for every report.
pub fn instructions() -> String {
    format!(
        "DIRETRIZES DA MATÉRIA:\n\
1. Escreva um título (Manchete) forte na primeira linha iniciado por \"{headline}\".\n\
2. IMPORTANTE: O Título deve estar em \"Sentence case\" (Apenas a primeira letra da frase em \
maiúscula, o restante em minúsculo, exceto nomes próprios). Exemplo: \"Acidente envolve dois \
carros no centro\" e NÃO \"Acidente Envolve Dois Carros No Centro\".\n\
3. Primeiro parágrafo: Lide jornalístico (Quem, quando, onde, o quê).\n\
4. Se for Acidente: Destaque o estado das vítimas e o trânsito.\n\
5. Se for Policial: Use termos técnicos adequados (conduzido à delegacia, suspeito, etc) e \
destaque a ação da polícia.\n\
6. Encerre a matéria citando \"{attribution}\".\n\
7. Comece o corpo da notícia com \"{body}\".\n\n\
DIRETRIZES DO INSTAGRAM:\n\
8. Crie uma seção iniciada por \"{caption}\".\n\
9. Escreva uma legenda engajadora, estruturada em parágrafos curtos com espaçamento (pule \
linhas entre eles) para facilitar a leitura.\n\
10. Use emojis no início dos tópicos importantes.\n\
11. Liste 5 a 10 hashtags relevantes para a região de Catalão/GO após o texto.\n\
12. OBRIGATÓRIO: A última linha da legenda DEVE ser exatamente: \"{cta}\".\n\n\
SAÍDA ESPERADA:\n\
{headline} [Título Aqui (Apenas 1ª letra maiúscula)]\n\
{body} [Texto da matéria]\n\
{caption} [Texto para o Instagram]\n",
        headline = HEADLINE_MARKER,
        body = BODY_MARKER,
        caption = CAPTION_MARKER,
        attribution = ATTRIBUTION_LINE,
        cta = CALL_TO_ACTION,
    )
}
