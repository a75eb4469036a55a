//! House styles: explicit fonts, sizes, colours, and spacing applied to
//! every paragraph a builder emits.

use crate::types::{Alignment, Color, Paragraph, ParagraphFormat, ParagraphStyle, Run, RunFormat};

/// Character and alignment settings for one kind of paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Size in points.
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Color>,
    pub alignment: Alignment,
}

/// A complete set of direct formatting for titles, headings, and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseStyle {
    /// Font family used for every run.
    pub font: String,
    pub title: TextStyle,
    /// Level-1 headings.
    pub heading: TextStyle,
    /// Headings of level 2 and deeper.
    pub subheading: TextStyle,
    pub body: TextStyle,
    /// Line spacing multiple for headings, body, and list items.
    pub line_spacing: f32,
    /// Points before a heading.
    pub heading_space_before: f32,
    /// Points after a heading.
    pub heading_space_after: f32,
    /// Left indent in points for list-item lines found by the segmenter.
    pub list_indent: f32,
}

impl HouseStyle {
    /// Arial with blue headings, used by the research document.
    pub fn research() -> Self {
        Self {
            font: "Arial".to_string(),
            title: TextStyle {
                size: 16.0,
                bold: true,
                italic: false,
                color: Some(Color::rgb(0, 51, 102)),
                alignment: Alignment::Center,
            },
            heading: TextStyle {
                size: 14.0,
                bold: true,
                italic: false,
                color: Some(Color::rgb(0, 76, 153)),
                alignment: Alignment::Left,
            },
            subheading: TextStyle {
                size: 12.0,
                bold: true,
                italic: false,
                color: Some(Color::rgb(0, 102, 204)),
                alignment: Alignment::Left,
            },
            body: TextStyle {
                size: 12.0,
                bold: false,
                italic: false,
                color: None,
                alignment: Alignment::Justify,
            },
            line_spacing: 1.5,
            heading_space_before: 12.0,
            heading_space_after: 6.0,
            list_indent: 36.0,
        }
    }

    /// Times New Roman in black, used by the parecer.
    pub fn legal() -> Self {
        let black = Some(Color::BLACK);
        Self {
            font: "Times New Roman".to_string(),
            title: TextStyle {
                size: 14.0,
                bold: true,
                italic: false,
                color: black,
                alignment: Alignment::Center,
            },
            heading: TextStyle {
                size: 12.0,
                bold: true,
                italic: false,
                color: black,
                alignment: Alignment::Left,
            },
            subheading: TextStyle {
                size: 12.0,
                bold: true,
                italic: true,
                color: black,
                alignment: Alignment::Left,
            },
            body: TextStyle {
                size: 12.0,
                bold: false,
                italic: false,
                color: black,
                alignment: Alignment::Justify,
            },
            line_spacing: 1.5,
            heading_space_before: 12.0,
            heading_space_after: 6.0,
            list_indent: 36.0,
        }
    }

    /// A run in this house's font with the given text style.
    pub fn run(&self, text: impl Into<String>, style: &TextStyle) -> Run {
        Run::new(text).with_format(RunFormat {
            bold: style.bold,
            italic: style.italic,
            underline: false,
            font: Some(self.font.clone()),
            size: Some(style.size),
            color: style.color,
        })
    }

    /// Centred document title.
    pub fn title_paragraph(&self, text: impl Into<String>) -> Paragraph {
        Paragraph::new()
            .with_style(ParagraphStyle::Title)
            .with_alignment(self.title.alignment)
            .with_run(self.run(text, &self.title))
    }

    /// Section heading. Level 1 uses `heading`, deeper levels `subheading`.
    pub fn heading_paragraph(&self, text: impl Into<String>, level: u8) -> Paragraph {
        let style = if level <= 1 { &self.heading } else { &self.subheading };
        Paragraph::new()
            .with_style(ParagraphStyle::Heading(level))
            .with_format(ParagraphFormat {
                alignment: Some(style.alignment),
                line_spacing: Some(self.line_spacing),
                space_before: Some(self.heading_space_before),
                space_after: Some(self.heading_space_after),
                ..ParagraphFormat::default()
            })
            .with_run(self.run(text, style))
    }

    /// Body paragraph, optionally bold, justified or left-aligned.
    pub fn body_paragraph(&self, text: impl Into<String>, bold: bool, justified: bool) -> Paragraph {
        let style = TextStyle {
            bold: bold || self.body.bold,
            ..self.body.clone()
        };
        let alignment = if justified { self.body.alignment } else { Alignment::Left };
        Paragraph::new()
            .with_alignment(alignment)
            .with_line_spacing(self.line_spacing)
            .with_run(self.run(text, &style))
    }

    /// List item in the given list style.
    pub fn list_paragraph(&self, text: impl Into<String>, style: ParagraphStyle) -> Paragraph {
        Paragraph::new()
            .with_style(style)
            .with_line_spacing(self.line_spacing)
            .with_run(self.run(text, &self.body))
    }
}
