//! Domain types for representing a document before it is serialized.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An entire document: metadata plus body blocks in reading order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Package metadata written to the core properties part.
    pub properties: DocumentProperties,

    /// Body content in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document with default properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the paragraphs of the body, skipping tables and breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over the tables of the body.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Plain text of every paragraph, one entry per paragraph.
    pub fn plain_text(&self) -> Vec<String> {
        self.paragraphs().map(Paragraph::text).collect()
    }

    /// Check structural rules the serializer relies on.
    pub fn validate(&self) -> Result<()> {
        let props = &self.properties;
        for (field, value) in [
            ("title", props.title.as_deref()),
            ("subject", props.subject.as_deref()),
            ("author", props.author.as_deref()),
            ("language", Some(props.language.as_str())),
        ] {
            if let Some(value) = value {
                check_xml_text(value, &format!("document {}", field))?;
            }
        }

        for (idx, block) in self.blocks.iter().enumerate() {
            match block {
                Block::Paragraph(p) => {
                    if let ParagraphStyle::Heading(level) = p.style {
                        if !(1..=9).contains(&level) {
                            return Err(Error::InvalidDocument(format!(
                                "heading level {} out of range 1-9",
                                level
                            )));
                        }
                    }
                    for run in &p.runs {
                        check_xml_text(&run.text, &format!("block {}", idx + 1))?;
                        if let Some(font) = &run.format.font {
                            check_xml_text(font, &format!("block {} font name", idx + 1))?;
                        }
                    }
                }
                Block::Table(t) => {
                    t.validate()?;
                    for cell in t.rows.iter().flatten() {
                        check_xml_text(cell, &format!("table in block {}", idx + 1))?;
                    }
                }
                Block::PageBreak => {}
            }
        }
        Ok(())
    }
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Reject text holding characters XML 1.0 cannot represent: C0 controls
/// other than tab, newline and carriage return, plus U+FFFE and U+FFFF.
fn check_xml_text(text: &str, context: &str) -> Result<()> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(Error::InvalidDocument(format!(
            "{} contains character U+{:04X}, which a .docx file cannot hold",
            context, c as u32
        ))),
        None => Ok(()),
    }
}

/// Metadata for `docProps/core.xml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    /// BCP 47 language tag applied to the default run properties.
    pub language: String,
}

impl Default for DocumentProperties {
    fn default() -> Self {
        Self {
            title: None,
            subject: None,
            author: None,
            language: "pt-BR".to_string(),
        }
    }
}

/// A top-level body element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// Named paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Title,
    /// Heading level, 1-based.
    Heading(u8),
    ListBullet,
    /// A numbered list item. Items sharing `list` count together; a new
    /// value restarts at 1.
    ListNumber { list: u32 },
}

impl ParagraphStyle {
    /// Style identifier as written in `styles.xml`.
    pub fn style_id(&self) -> Option<String> {
        match self {
            Self::Normal => None,
            Self::Title => Some("Title".to_string()),
            Self::Heading(level) => Some(format!("Heading{}", level)),
            Self::ListBullet => Some("ListBullet".to_string()),
            Self::ListNumber { .. } => Some("ListNumber".to_string()),
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Direct paragraph formatting. `None` leaves the style's value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphFormat {
    pub alignment: Option<Alignment>,
    /// Line spacing as a multiple of single spacing (1.5 = one and a half).
    pub line_spacing: Option<f32>,
    /// Space before, in points.
    pub space_before: Option<f32>,
    /// Space after, in points.
    pub space_after: Option<f32>,
    /// Left indent, in points.
    pub indent_left: Option<f32>,
    /// First-line indent, in points.
    pub first_line_indent: Option<f32>,
}

impl ParagraphFormat {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A paragraph made of formatted runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub format: ParagraphFormat,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph in the Normal style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Normal paragraph holding one unformatted run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().with_run(Run::new(text))
    }

    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_format(mut self, format: ParagraphFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.format.alignment = Some(alignment);
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.format.line_spacing = Some(spacing);
        self
    }

    pub fn with_indent_left(mut self, points: f32) -> Self {
        self.format.indent_left = Some(points);
        self
    }

    /// Append a run.
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append an unformatted run.
    pub fn text_run(self, text: impl Into<String>) -> Self {
        self.with_run(Run::new(text))
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A span of text sharing one character format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub format: RunFormat,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    pub fn bold(mut self) -> Self {
        self.format.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.format.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.format.underline = true;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.format.font = Some(font.into());
        self
    }

    /// Font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.format.size = Some(points);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.format.color = Some(color);
        self
    }

    pub fn with_format(mut self, format: RunFormat) -> Self {
        self.format = format;
        self
    }
}

/// Character formatting for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font family applied to every script slot.
    pub font: Option<String>,
    /// Size in points.
    pub size: Option<f32>,
    pub color: Option<Color>,
}

impl RunFormat {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `RRGGBB`, as OOXML expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A simple grid of text cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    /// Render the first row bold as a header.
    pub header_row: bool,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            header_row: true,
        }
    }

    pub fn with_header_row(mut self, header: bool) -> Self {
        self.header_row = header;
        self
    }

    /// Number of columns (taken from the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Every row must have the same, non-zero number of cells.
    pub fn validate(&self) -> Result<()> {
        let columns = self.column_count();
        if columns == 0 {
            return Err(Error::InvalidDocument("table has no cells".to_string()));
        }
        if let Some((idx, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns)
        {
            return Err(Error::InvalidDocument(format!(
                "table row {} has {} cells, expected {}",
                idx + 1,
                row.len(),
                columns
            )));
        }
        Ok(())
    }
}
