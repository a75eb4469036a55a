//! The sample document: formatted runs, a bullet list, and a table.

use docgen_core::{Color, Document, DocumentBuilder, DocumentProperties, Paragraph, Run};

pub const DEFAULT_OUTPUT: &str = "exemplo.docx";

const RESOURCES: [&str; 5] = [
    "Criação de parágrafos",
    "Formatação de texto (negrito, itálico, cores)",
    "Adição de títulos e subtítulos",
    "Criação de listas",
    "Inserção de tabelas",
];

const PEOPLE: [[&str; 3]; 3] = [
    ["João Silva", "25", "São Paulo"],
    ["Maria Santos", "30", "Rio de Janeiro"],
    ["Pedro Oliveira", "28", "Belo Horizonte"],
];

pub fn build() -> Document {
    let mut doc = DocumentBuilder::new();
    doc.properties(DocumentProperties {
        title: Some("Documento de Exemplo".to_string()),
        ..DocumentProperties::default()
    });

    doc.title("Documento de Exemplo").paragraph(
        "Este é um documento de exemplo criado com docgen. \
         Ele permite criar documentos do Microsoft Word de forma programática.",
    );

    doc.paragraph_with(
        Paragraph::new()
            .text_run("Este parágrafo contém ")
            .with_run(Run::new("texto em negrito").bold())
            .text_run(", ")
            .with_run(Run::new("texto em itálico").italic())
            .text_run(" e ")
            .with_run(Run::new("texto colorido").with_color(Color::RED))
            .text_run("."),
    );

    doc.heading("Lista de Recursos", 1).bullet_list(RESOURCES);

    let mut rows = vec![["Nome", "Idade", "Cidade"]];
    rows.extend(PEOPLE);
    doc.heading("Exemplo de Tabela", 1).table(rows);

    doc.heading("Conclusão", 1).paragraph(
        "Este documento demonstra as principais funcionalidades do gerador. \
         Você pode expandir este código para criar documentos mais complexos \
         conforme suas necessidades.",
    );

    doc.build()
}
