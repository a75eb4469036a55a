//! Sequential document construction.
//!
//! `DocumentBuilder` owns the document while it is assembled and appends
//! blocks in call order. Without a house style it emits bare named styles
//! (Title, Heading N, List Bullet); with one, every paragraph also carries
//! explicit fonts, colours, and spacing.

use crate::segment::ParagraphSegmenter;
use crate::style::HouseStyle;
use crate::types::{
    Alignment, Block, Document, DocumentProperties, Paragraph, ParagraphStyle, Run, Table,
};

/// Builder that appends blocks to a document in order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
    house_style: Option<HouseStyle>,
    segmenter: ParagraphSegmenter,
    /// Next numbering instance handed to `numbered_list`.
    next_list: u32,
}

impl DocumentBuilder {
    /// Create a builder for an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply explicit formatting from `style` to subsequent paragraphs.
    pub fn with_house_style(mut self, style: HouseStyle) -> Self {
        self.house_style = Some(style);
        self
    }

    /// Use a custom segmenter for [`paragraphs`](Self::paragraphs).
    pub fn with_segmenter(mut self, segmenter: ParagraphSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the document metadata.
    pub fn properties(&mut self, properties: DocumentProperties) -> &mut Self {
        self.document.properties = properties;
        self
    }

    /// Document title.
    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        let paragraph = match &self.house_style {
            Some(house) => house.title_paragraph(text),
            None => Paragraph::from_text(text)
                .with_style(ParagraphStyle::Title)
                .with_alignment(Alignment::Center),
        };
        self.push(paragraph)
    }

    /// Heading at `level` (1-based; clamped to 1..=9).
    pub fn heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        let level = level.clamp(1, 9);
        let paragraph = match &self.house_style {
            Some(house) => house.heading_paragraph(text, level),
            None => Paragraph::from_text(text).with_style(ParagraphStyle::Heading(level)),
        };
        self.push(paragraph)
    }

    /// Body paragraph: justified under a house style, a bare Normal
    /// paragraph otherwise.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        if self.house_style.is_some() {
            self.body_paragraph(text, false, true)
        } else {
            self.push(Paragraph::from_text(text))
        }
    }

    /// Body paragraph with explicit weight and alignment.
    pub fn body_paragraph(&mut self, text: impl Into<String>, bold: bool, justified: bool) -> &mut Self {
        let paragraph = match &self.house_style {
            Some(house) => house.body_paragraph(text, bold, justified),
            None => {
                let run = if bold { Run::new(text).bold() } else { Run::new(text) };
                let alignment = if justified { Alignment::Justify } else { Alignment::Left };
                Paragraph::new().with_run(run).with_alignment(alignment)
            }
        };
        self.push(paragraph)
    }

    /// A blank line, spaced like body text under a house style.
    pub fn empty_paragraph(&mut self) -> &mut Self {
        if self.house_style.is_some() {
            self.body_paragraph("", false, true)
        } else {
            self.push(Paragraph::new())
        }
    }

    /// Append a fully formed paragraph as-is.
    pub fn paragraph_with(&mut self, paragraph: Paragraph) -> &mut Self {
        self.push(paragraph)
    }

    /// Segment free-form `text` and add one body paragraph per segment.
    ///
    /// Lines that start with a list marker keep their marker text and get
    /// the house list indent.
    pub fn paragraphs(&mut self, text: &str) -> &mut Self {
        let segments = self.segmenter.segment_with_markers(text);
        log::debug!("Segmented text into {} paragraph(s)", segments.len());

        for segment in segments {
            let mut paragraph = match &self.house_style {
                Some(house) => house.body_paragraph(segment.text, false, true),
                None => Paragraph::from_text(segment.text),
            };
            if segment.marker.is_some() {
                let indent = self.house_style.as_ref().map(|h| h.list_indent).unwrap_or(36.0);
                paragraph = paragraph.with_indent_left(indent);
            }
            self.push(paragraph);
        }
        self
    }

    /// Bulleted list, one paragraph per item.
    pub fn bullet_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.list_item(item, ParagraphStyle::ListBullet);
        }
        self
    }

    /// Numbered list starting at 1.
    pub fn numbered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_list += 1;
        let style = ParagraphStyle::ListNumber {
            list: self.next_list,
        };
        for item in items {
            self.list_item(item, style);
        }
        self
    }

    fn list_item(&mut self, text: impl Into<String>, style: ParagraphStyle) -> &mut Self {
        let paragraph = match &self.house_style {
            Some(house) => house.list_paragraph(text, style),
            None => Paragraph::from_text(text).with_style(style),
        };
        self.push(paragraph)
    }

    /// Table from rows of cell text; the first row is the header.
    pub fn table<R, C, S>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.table_with(Table::new(rows))
    }

    pub fn table_with(&mut self, table: Table) -> &mut Self {
        self.document.blocks.push(Block::Table(table));
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.document.blocks.push(Block::PageBreak);
        self
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.document.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.blocks.is_empty()
    }

    /// Finish and hand over the document.
    pub fn build(self) -> Document {
        self.document
    }

    fn push(&mut self, paragraph: Paragraph) -> &mut Self {
        self.document.blocks.push(Block::Paragraph(paragraph));
        self
    }
}
