//! Parecer técnico: a formal opinion with EMENTA, RELATÓRIO, FUNDAMENTAÇÃO,
//! and CONCLUSÃO sections.

use docgen_core::{
    Alignment, Document, DocumentBuilder, DocumentProperties, HouseStyle, Paragraph,
    ParagraphFormat, ParagraphSegmenter, SectionKind, Sections, TextStyle,
};

pub const DEFAULT_OUTPUT: &str = "parecer_tecnico.docx";

/// Roman numerals for the numbered body sections.
const SECTION_NUMERALS: [&str; 3] = ["I", "II", "III"];

/// Left indent of the ementa block, in points (about 7.5 cm).
const EMENTA_INDENT: f32 = 212.0;

/// Header and signature details. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParecerMeta {
    pub numero: Option<String>,
    pub interessado: Option<String>,
    pub assunto: Option<String>,
    pub autor: Option<String>,
    pub cargo: Option<String>,
    pub local: Option<String>,
    pub data: Option<String>,
}

impl ParecerMeta {
    /// Overlay every field present in `other`.
    pub fn merge_from(&mut self, other: ParecerMeta) {
        fn take(slot: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *slot = value;
            }
        }
        take(&mut self.numero, other.numero);
        take(&mut self.interessado, other.interessado);
        take(&mut self.assunto, other.assunto);
        take(&mut self.autor, other.autor);
        take(&mut self.cargo, other.cargo);
        take(&mut self.local, other.local);
        take(&mut self.data, other.data);
    }
}

/// Everything needed to render a parecer.
#[derive(Debug, Clone, Default)]
pub struct Parecer {
    pub meta: ParecerMeta,
    pub sections: Sections,
}

impl Parecer {
    /// The built-in example used when no text is supplied.
    pub fn example() -> Self {
        let mut sections = Sections::default();
        sections.set(
            SectionKind::Ementa,
            "ADMINISTRATIVO. AQUISIÇÃO DE EQUIPAMENTOS DE INFORMÁTICA. \
             ANÁLISE TÉCNICA DAS ESPECIFICAÇÕES. ADEQUAÇÃO AO TERMO DE REFERÊNCIA. \
             PARECER FAVORÁVEL COM RESSALVAS.",
        );
        sections.set(
            SectionKind::Relatorio,
            "Trata-se de solicitação encaminhada pela Diretoria Administrativa para \
             análise técnica das especificações dos equipamentos de informática \
             constantes do Termo de Referência do processo de aquisição.\n\n\
             Foram examinados os seguintes documentos:\n\
             a) Termo de Referência e seus anexos;\n\
             b) pesquisa de preços realizada pelo setor de compras;\n\
             c) manifestação da área demandante quanto à necessidade da aquisição.\n\n\
             É o relatório.",
        );
        sections.set(
            SectionKind::Fundamentacao,
            "As especificações técnicas descritas no Termo de Referência mostram-se, \
             em regra, compatíveis com a finalidade pretendida e com os padrões de \
             mercado, não havendo indicação de marca ou característica que restrinja \
             indevidamente a competitividade do certame.\n\n\
             Observa-se, contudo, que:\n\
             1. a capacidade mínima de memória indicada é inferior à recomendada para \
             os sistemas atualmente em uso;\n\
             2. não há exigência de garantia mínima on-site, o que pode elevar custos \
             de manutenção;\n\
             3. a pesquisa de preços contempla número reduzido de fornecedores.\n\n\
             Tais pontos não impedem o prosseguimento do feito, mas recomendam ajustes \
             antes da publicação do edital.",
        );
        sections.set(
            SectionKind::Conclusao,
            "Diante do exposto, opina-se pela viabilidade técnica da aquisição, \
             condicionada à revisão das especificações de memória, à inclusão de \
             cláusula de garantia on-site de no mínimo 36 meses e à ampliação da \
             pesquisa de preços.\n\n\
             É o parecer, salvo melhor juízo.",
        );

        Self {
            meta: ParecerMeta {
                numero: Some("001/2025".to_string()),
                interessado: Some("Diretoria Administrativa".to_string()),
                assunto: Some("Análise técnica de especificações para aquisição de equipamentos".to_string()),
                autor: Some("Analista Responsável".to_string()),
                cargo: Some("Analista Técnico".to_string()),
                local: Some("Brasília".to_string()),
                data: None,
            },
            sections,
        }
    }
}

/// Render a parecer with the legal house style.
pub fn build(parecer: &Parecer) -> Document {
    let house = HouseStyle::legal();
    let segmenter = ParagraphSegmenter::new();
    let meta = &parecer.meta;

    let mut doc = DocumentBuilder::new().with_house_style(house.clone());
    doc.properties(DocumentProperties {
        title: Some(title_text(meta)),
        subject: meta.assunto.clone(),
        author: meta.autor.clone(),
        ..DocumentProperties::default()
    });

    doc.title(title_text(meta));
    for (label, value) in [("Interessado", &meta.interessado), ("Assunto", &meta.assunto)] {
        if let Some(value) = value {
            doc.paragraph_with(
                Paragraph::new()
                    .with_alignment(Alignment::Left)
                    .with_run(house.run(format!("{}: ", label), &bold(&house.body)))
                    .with_run(house.run(value.as_str(), &house.body)),
            );
        }
    }

    let mut numerals = SECTION_NUMERALS.iter();
    for (kind, text) in parecer.sections.iter() {
        match kind {
            SectionKind::Ementa => {
                doc.heading(kind.label(), 1);
                for segment in segmenter.segment(text) {
                    doc.paragraph_with(
                        Paragraph::new()
                            .with_format(ParagraphFormat {
                                alignment: Some(Alignment::Justify),
                                line_spacing: Some(1.0),
                                indent_left: Some(EMENTA_INDENT),
                                ..ParagraphFormat::default()
                            })
                            .with_run(house.run(segment, &bold(&house.body))),
                    );
                }
            }
            _ => {
                let heading = match numerals.next() {
                    Some(numeral) => format!("{} – {}", numeral, kind.label()),
                    None => kind.label().to_string(),
                };
                doc.heading(heading, 1);
                doc.paragraphs(text);
            }
        }
    }

    closing(&mut doc, &house, meta);
    doc.build()
}

fn title_text(meta: &ParecerMeta) -> String {
    match &meta.numero {
        Some(numero) => format!("PARECER TÉCNICO Nº {}", numero),
        None => "PARECER TÉCNICO".to_string(),
    }
}

fn bold(style: &TextStyle) -> TextStyle {
    TextStyle {
        bold: true,
        ..style.clone()
    }
}

/// Place and date line, then the signature block.
fn closing(doc: &mut DocumentBuilder, house: &HouseStyle, meta: &ParecerMeta) {
    let place_date = match (&meta.local, &meta.data) {
        (Some(local), Some(data)) => Some(format!("{}, {}.", local, data)),
        (Some(local), None) => Some(format!("{}.", local)),
        (None, Some(data)) => Some(format!("{}.", data)),
        (None, None) => None,
    };

    if place_date.is_none() && meta.autor.is_none() && meta.cargo.is_none() {
        return;
    }

    doc.empty_paragraph();
    if let Some(place_date) = place_date {
        doc.paragraph_with(
            Paragraph::new()
                .with_alignment(Alignment::Right)
                .with_run(house.run(place_date, &house.body)),
        );
    }

    doc.empty_paragraph();
    let centered = |text: &str, style: &TextStyle| {
        Paragraph::new()
            .with_alignment(Alignment::Center)
            .with_run(house.run(text, style))
    };
    doc.paragraph_with(centered("___________________________________________", &house.body));
    if let Some(autor) = &meta.autor {
        doc.paragraph_with(centered(autor.as_str(), &bold(&house.body)));
    }
    if let Some(cargo) = &meta.cargo {
        doc.paragraph_with(centered(cargo.as_str(), &house.body));
    }
}
