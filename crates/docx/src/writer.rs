//! DOCX package writer implementation.

use crate::numbering::DocxNumbering;
use crate::props;
use crate::styles;
use docgen_core::{Alignment, Block, Document, Error, ParagraphFormat, Result, RunFormat};
use docx_rs::{
    AlignmentType, BreakType, Docx, IndentLevel, LineSpacing, LineSpacingType, NumberingId,
    PageMargin, Paragraph, Run, RunFonts, Shading, SpecialIndentType, Table, TableCell, TableRow,
    WidthType,
};
use std::fs::{self, File};
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

const HEADER_FILL: &str = "DBE5F1";

/// Page size and margins, in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
}

impl PageLayout {
    /// A4 with 3 cm top/left and 2 cm bottom/right margins.
    pub const A4: PageLayout = PageLayout {
        width: 11906,
        height: 16838,
        margin_top: 1701,
        margin_right: 1134,
        margin_bottom: 1134,
        margin_left: 1701,
    };

    /// US Letter with 1 inch margins.
    pub const LETTER: PageLayout = PageLayout {
        width: 12240,
        height: 15840,
        margin_top: 1440,
        margin_right: 1440,
        margin_bottom: 1440,
        margin_left: 1440,
    };

    /// Width available to body text.
    pub fn text_width(&self) -> u32 {
        self.width
            .saturating_sub(self.margin_left)
            .saturating_sub(self.margin_right)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

/// Round `value` and convert it to the integer type docx-rs expects.
fn fits<T: TryFrom<i64>>(value: f64, what: &str) -> Result<T> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded <= i64::MAX as f64 {
        if let Ok(v) = T::try_from(rounded as i64) {
            return Ok(v);
        }
    }
    Err(Error::InvalidDocument(format!("{} {} is out of range", what, value)))
}

/// Points to twentieths of a point.
fn twips<T: TryFrom<i64>>(points: f32, what: &str) -> Result<T> {
    fits(f64::from(points) * 20.0, what)
}

/// Writer for DOCX (Office Open XML) packages.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    page: PageLayout,
}

impl DocxWriter {
    /// Create a writer with the default A4 page layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.page = page;
        self
    }

    /// Serialize the package into an in-memory buffer.
    pub fn to_bytes(&self, document: &Document) -> Result<Vec<u8>> {
        let cursor = self.write(document, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the package to `path`, replacing any existing file.
    ///
    /// The package is written to a temporary sibling first and renamed into
    /// place once complete, so a failed run never leaves a partial file at
    /// `path`.
    pub fn save(&self, document: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = temp_path(path);
        log::debug!("Writing package to {}", tmp_path.display());

        if let Err(e) = self.write_file(document, &tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::IoError(e));
        }

        log::debug!("Saved {}", path.display());
        Ok(())
    }

    fn write_file(&self, document: &Document, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let file = self.write(document, file)?;
        file.sync_all()?;
        Ok(())
    }

    /// Write the package to any seekable sink and hand the sink back.
    pub fn write<W: Write + Seek>(&self, document: &Document, sink: W) -> Result<W> {
        document.validate()?;

        let docx = self.build(document)?;
        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::ZipError(format!("Failed to pack DOCX: {}", e)))?;
        log::debug!("Packed {} blocks into {} bytes", document.blocks.len(), buffer.len());

        let core = props::core_properties(&document.properties)?;
        props::replace_core_properties(&buffer, &core, sink)
    }

    /// Map the document onto the docx-rs model.
    fn build(&self, document: &Document) -> Result<Docx> {
        let numbering = DocxNumbering::for_document(document);
        let mut docx = numbering.register(styles::add_styles(Docx::new()));

        for block in &document.blocks {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(paragraph(p, &numbering)?),
                Block::Table(t) => docx.add_table(self.table(t)?),
                Block::PageBreak => {
                    docx.add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
                }
            };
        }

        let page = &self.page;
        let margin = PageMargin::new()
            .top(fits(f64::from(page.margin_top), "top margin")?)
            .right(fits(f64::from(page.margin_right), "right margin")?)
            .bottom(fits(f64::from(page.margin_bottom), "bottom margin")?)
            .left(fits(f64::from(page.margin_left), "left margin")?);
        Ok(docx.page_size(page.width, page.height).page_margin(margin))
    }

    fn table(&self, table: &docgen_core::Table) -> Result<Table> {
        let columns = table.column_count().max(1);
        let col_width: usize = fits(f64::from(self.page.text_width() / columns as u32), "column width")?;

        let mut rows = Vec::with_capacity(table.rows.len());
        for (row_idx, row) in table.rows.iter().enumerate() {
            let is_header = table.header_row && row_idx == 0;
            let cells = row
                .iter()
                .map(|text| {
                    let run = Run::new().add_text(text.as_str());
                    let run = if is_header { run.bold() } else { run };
                    let cell = TableCell::new()
                        .add_paragraph(Paragraph::new().add_run(run))
                        .width(col_width, WidthType::Dxa);
                    if is_header {
                        cell.shading(Shading::new().fill(HEADER_FILL))
                    } else {
                        cell
                    }
                })
                .collect();
            rows.push(TableRow::new(cells));
        }

        Ok(Table::new(rows)
            .style("TableGrid")
            .set_grid(vec![col_width; columns]))
    }
}

fn paragraph(p: &docgen_core::Paragraph, numbering: &DocxNumbering) -> Result<Paragraph> {
    let mut para = Paragraph::new();
    if let Some(style_id) = p.style.style_id() {
        para = para.style(&style_id);
    }
    if let Some(id) = numbering.id_for(p.style) {
        para = para.numbering(NumberingId::new(id), IndentLevel::new(0));
    }
    para = paragraph_format(para, &p.format)?;

    for run in &p.runs {
        let mut r = Run::new().add_text(run.text.as_str());
        if !run.format.is_empty() {
            r = run_format(r, &run.format)?;
        }
        para = para.add_run(r);
    }
    Ok(para)
}

fn paragraph_format(mut para: Paragraph, format: &ParagraphFormat) -> Result<Paragraph> {
    if format.space_before.is_some() || format.space_after.is_some() || format.line_spacing.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(before) = format.space_before {
            spacing = spacing.before(twips(before, "space before")?);
        }
        if let Some(after) = format.space_after {
            spacing = spacing.after(twips(after, "space after")?);
        }
        if let Some(line) = format.line_spacing {
            spacing = spacing
                .line(fits(f64::from(line) * 240.0, "line spacing")?)
                .line_rule(LineSpacingType::Auto);
        }
        para = para.line_spacing(spacing);
    }

    if format.indent_left.is_some() || format.first_line_indent.is_some() {
        let left = format
            .indent_left
            .map(|pt| twips(pt, "left indent"))
            .transpose()?;
        let first_line = format
            .first_line_indent
            .map(|pt| twips(pt, "first-line indent").map(SpecialIndentType::FirstLine))
            .transpose()?;
        para = para.indent(left, first_line, None, None);
    }

    if let Some(alignment) = format.alignment {
        para = para.align(alignment_type(alignment));
    }
    Ok(para)
}

fn run_format(mut run: Run, format: &RunFormat) -> Result<Run> {
    if let Some(font) = &format.font {
        run = run.fonts(
            RunFonts::new()
                .ascii(font.as_str())
                .hi_ansi(font.as_str())
                .east_asia(font.as_str())
                .cs(font.as_str()),
        );
    }
    if format.bold {
        run = run.bold();
    }
    if format.italic {
        run = run.italic();
    }
    if let Some(color) = format.color {
        run = run.color(color.to_hex());
    }
    if let Some(size) = format.size {
        run = run.size(fits(f64::from(size) * 2.0, "font size")?);
    }
    if format.underline {
        run = run.underline("single");
    }
    Ok(run)
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Hidden sibling used while the package is being written.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.docx");
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_core::{
        Color, DocumentBuilder, DocumentProperties, HouseStyle, Paragraph as DocParagraph,
        ParagraphStyle, Run as DocRun, Table as DocTable,
    };
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::collections::HashMap;
    use std::io::Read;
    use zip::ZipArchive;

    const DOCUMENT_PATH: &str = "word/document.xml";
    const NUMBERING_PATH: &str = "word/numbering.xml";

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    /// Attributes of every `name` element, in document order.
    fn elements(xml: &str, name: &str) -> Vec<HashMap<String, String>> {
        let mut reader = Reader::from_str(xml);
        let mut found = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) if e.name().as_ref() == name.as_bytes() => {
                    let attrs = e
                        .attributes()
                        .map(|a| {
                            let a = a.unwrap();
                            (
                                String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                                a.unescape_value().unwrap().into_owned(),
                            )
                        })
                        .collect();
                    found.push(attrs);
                }
                Event::Eof => break,
                _ => {}
            }
        }
        found
    }

    fn attr_values(xml: &str, name: &str, attr: &str) -> Vec<String> {
        elements(xml, name)
            .into_iter()
            .filter_map(|mut a| a.remove(attr))
            .collect()
    }

    /// Unescaped content of every `w:t`.
    fn texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut in_text = false;
        let mut found = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
                Event::End(e) if e.name().as_ref() == b"w:t" => in_text = false,
                Event::Text(t) if in_text => found.push(t.unescape().unwrap().into_owned()),
                Event::Eof => break,
                _ => {}
            }
        }
        found
    }

    fn document_xml(document: &Document) -> String {
        let bytes = DocxWriter::new().to_bytes(document).unwrap();
        read_part(&bytes, DOCUMENT_PATH)
    }

    fn single(block: Block) -> Document {
        let mut doc = Document::new();
        doc.blocks.push(block);
        doc
    }

    fn sample_document() -> Document {
        let mut builder = DocumentBuilder::new();
        builder
            .title("Documento de Exemplo")
            .paragraph_with(
                DocParagraph::new()
                    .text_run("Este parágrafo contém ")
                    .with_run(DocRun::new("texto em negrito").bold())
                    .text_run(", ")
                    .with_run(DocRun::new("texto em itálico").italic())
                    .text_run(" e ")
                    .with_run(DocRun::new("texto colorido").with_color(Color::RED)),
            )
            .bullet_list(["Criação de parágrafos", "Criação de listas"])
            .table([["Nome", "Idade"], ["João Silva", "25"]]);
        builder.build()
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = DocxWriter::new().to_bytes(&sample_document()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            DOCUMENT_PATH,
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            NUMBERING_PATH,
            "word/settings.xml",
            props::CORE_PROPS_PATH,
            "docProps/app.xml",
        ] {
            assert!(names.contains(&part), "missing part {}", part);
        }
        assert_eq!(names.iter().filter(|n| **n == props::CORE_PROPS_PATH).count(), 1);
    }

    #[test]
    fn test_run_formatting_rendered() {
        let xml = document_xml(&sample_document());

        assert!(attr_values(&xml, "w:pStyle", "w:val").contains(&"Title".to_string()));
        assert!(attr_values(&xml, "w:pStyle", "w:val").contains(&"ListBullet".to_string()));
        assert!(attr_values(&xml, "w:color", "w:val").contains(&"FF0000".to_string()));
        assert!(!elements(&xml, "w:b").is_empty());
        assert!(!elements(&xml, "w:i").is_empty());
        assert!(texts(&xml).contains(&"texto em negrito".to_string()));
    }

    #[test]
    fn test_alignment_values() {
        for (alignment, jc) in [
            (Alignment::Left, "left"),
            (Alignment::Center, "center"),
            (Alignment::Right, "right"),
            (Alignment::Justify, "both"),
        ] {
            let doc = single(Block::Paragraph(DocParagraph::from_text("x").with_alignment(alignment)));
            assert_eq!(attr_values(&document_xml(&doc), "w:jc", "w:val"), vec![jc]);
        }
    }

    #[test]
    fn test_table_rendered_with_header() {
        let xml = document_xml(&sample_document());

        assert_eq!(elements(&xml, "w:tr").len(), 2);
        assert_eq!(elements(&xml, "w:tc").len(), 4);
        let column = (PageLayout::A4.text_width() / 2).to_string();
        assert_eq!(attr_values(&xml, "w:gridCol", "w:w"), vec![column.clone(), column]);
        assert_eq!(attr_values(&xml, "w:shd", "w:fill"), vec![HEADER_FILL; 2]);
        assert!(texts(&xml).contains(&"João Silva".to_string()));
    }

    #[test]
    fn test_table_without_header_row() {
        let table = DocTable::new(vec![vec!["Nome".into(), "Idade".into()]]).with_header_row(false);
        let xml = document_xml(&single(Block::Table(table)));

        assert_eq!(elements(&xml, "w:tc").len(), 2);
        assert!(elements(&xml, "w:shd").is_empty());
        assert!(elements(&xml, "w:b").is_empty());
    }

    #[test]
    fn test_house_style_spacing_and_fonts() {
        let mut builder = DocumentBuilder::new().with_house_style(HouseStyle::research());
        builder.heading("1. O QUE É O IBGE?", 1).paragraph("Corpo.");
        let xml = document_xml(&builder.build());

        let spacing = elements(&xml, "w:spacing");
        let heading = spacing
            .iter()
            .find(|a| a.get("w:before").map(String::as_str) == Some("240"))
            .unwrap();
        assert_eq!(heading["w:after"], "120");
        assert_eq!(heading["w:line"], "360");
        assert_eq!(heading["w:lineRule"], "auto");

        let fonts = elements(&xml, "w:rFonts");
        assert!(!fonts.is_empty());
        for slot in ["w:ascii", "w:hAnsi", "w:eastAsia", "w:cs"] {
            assert_eq!(fonts[0][slot], "Arial");
        }
        assert!(attr_values(&xml, "w:sz", "w:val").contains(&"28".to_string()));
        assert!(attr_values(&xml, "w:color", "w:val").contains(&"004C99".to_string()));
        assert!(attr_values(&xml, "w:jc", "w:val").contains(&"both".to_string()));
    }

    #[test]
    fn test_numbered_lists_restart() {
        let mut builder = DocumentBuilder::new();
        builder.numbered_list(["a", "b"]).numbered_list(["c"]).bullet_list(["d"]);
        let bytes = DocxWriter::new().to_bytes(&builder.build()).unwrap();

        let document = read_part(&bytes, DOCUMENT_PATH);
        let ids = attr_values(&document, "w:numId", "w:val");
        assert_eq!(ids, vec!["2", "2", "3", "4"]);

        let numbering = read_part(&bytes, NUMBERING_PATH);
        let nums = attr_values(&numbering, "w:num", "w:numId");
        for id in ["2", "3", "4"] {
            assert!(nums.contains(&id.to_string()), "missing num {}", id);
        }
        assert!(attr_values(&numbering, "w:numFmt", "w:val").contains(&"bullet".to_string()));
    }

    #[test]
    fn test_text_escaped_in_document() {
        let text = "Lei nº 8.112 <art. 116> & \"deveres\"";
        let mut builder = DocumentBuilder::new();
        builder.paragraph(text);
        let xml = document_xml(&builder.build());
        assert!(xml.contains("&lt;art. 116"));
        assert_eq!(texts(&xml), vec![text]);
    }

    #[test]
    fn test_page_break_rendered() {
        let mut doc = single(Block::Paragraph(DocParagraph::from_text("antes")));
        doc.blocks.push(Block::PageBreak);
        doc.blocks.push(Block::Paragraph(DocParagraph::from_text("depois")));
        let xml = document_xml(&doc);

        assert_eq!(attr_values(&xml, "w:br", "w:type"), vec!["page"]);
        assert_eq!(texts(&xml), vec!["antes", "depois"]);
    }

    #[test]
    fn test_underline_rendered() {
        let doc = single(Block::Paragraph(
            DocParagraph::new().with_run(DocRun::new("grifado").underline()),
        ));
        assert_eq!(attr_values(&document_xml(&doc), "w:u", "w:val"), vec!["single"]);
    }

    #[test]
    fn test_first_line_indent_rendered() {
        let format = ParagraphFormat {
            first_line_indent: Some(35.4),
            indent_left: Some(18.0),
            ..ParagraphFormat::default()
        };
        let doc = single(Block::Paragraph(DocParagraph::from_text("Recuo").with_format(format)));
        let ind = elements(&document_xml(&doc), "w:ind");

        assert_eq!(ind.len(), 1);
        assert_eq!(ind[0]["w:firstLine"], "708");
        assert_eq!(ind[0]["w:left"], "360");
    }

    #[test]
    fn test_out_of_range_size_rejected() {
        let doc = single(Block::Paragraph(
            DocParagraph::new().with_run(DocRun::new("x").with_size(-4.0)),
        ));
        let result = DocxWriter::new().to_bytes(&doc);
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_core_properties() {
        let mut builder = DocumentBuilder::new();
        builder.properties(DocumentProperties {
            title: Some("Parecer Técnico".to_string()),
            author: Some("Analista".to_string()),
            ..DocumentProperties::default()
        });
        builder.paragraph("x");
        let bytes = DocxWriter::new().to_bytes(&builder.build()).unwrap();
        let core = read_part(&bytes, props::CORE_PROPS_PATH);
        assert!(core.contains("<dc:title>Parecer Técnico</dc:title>"));
        assert!(core.contains("<dc:creator>Analista</dc:creator>"));
        assert!(core.contains("<dc:language>pt-BR</dc:language>"));
    }

    #[test]
    fn test_page_layout() {
        let bytes = DocxWriter::new()
            .with_page_layout(PageLayout::LETTER)
            .to_bytes(&Document::new())
            .unwrap();
        let xml = read_part(&bytes, DOCUMENT_PATH);
        let size = elements(&xml, "w:pgSz");
        assert_eq!(size[0]["w:w"], "12240");
        assert_eq!(size[0]["w:h"], "15840");
        assert_eq!(attr_values(&xml, "w:pgMar", "w:top"), vec!["1440"]);
        assert_eq!(PageLayout::A4.text_width(), 11906 - 1701 - 1134);
    }

    #[test]
    fn test_invalid_document_rejected() {
        let mut builder = DocumentBuilder::new();
        builder.table(vec![vec!["a", "b"], vec!["c"]]);
        let result = DocxWriter::new().to_bytes(&builder.build());
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_control_characters_leave_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("controle.docx");
        let mut builder = DocumentBuilder::new();
        builder.paragraph("quebra\u{0B}vertical");

        let result = DocxWriter::new().save(&builder.build(), &path);
        assert!(matches!(result, Err(Error::InvalidDocument(_))));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exemplo.docx");
        fs::write(&path, b"old contents").unwrap();

        DocxWriter::new().save(&sample_document(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_failed_save_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruim.docx");
        let mut builder = DocumentBuilder::new();
        builder.table(vec![vec!["a", "b"], vec!["c"]]);

        assert!(DocxWriter::new().save(&builder.build(), &path).is_err());
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nao-existe").join("x.docx");
        let result = DocxWriter::new().save(&sample_document(), &path);
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let tmp = temp_path(Path::new("/out/parecer.docx"));
        assert_eq!(tmp, PathBuf::from("/out/.parecer.docx.tmp"));
    }

    #[test]
    fn test_style_ids_match_registered_styles() {
        let bytes = DocxWriter::new().to_bytes(&Document::new()).unwrap();
        let styles = attr_values(&read_part(&bytes, "word/styles.xml"), "w:style", "w:styleId");
        for style in [
            ParagraphStyle::Title,
            ParagraphStyle::Heading(1),
            ParagraphStyle::Heading(9),
            ParagraphStyle::ListBullet,
            ParagraphStyle::ListNumber { list: 1 },
        ] {
            let id = style.style_id().unwrap();
            assert!(styles.contains(&id), "style {} not registered", id);
        }
    }
}
