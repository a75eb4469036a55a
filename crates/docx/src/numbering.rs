//! List numbering definitions.
//!
//! Bullet items share one definition. Every numbered list gets its own
//! abstract definition so that it starts counting at 1.

use docgen_core::{Document, ParagraphStyle};
use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering, SpecialIndentType,
    Start,
};
use std::collections::HashMap;

/// First id handed out. Lower ids are left to docx-rs's built-in numbering.
const FIRST_ID: usize = 2;

/// Numbering ids assigned to the lists of one document.
#[derive(Debug, Clone, Default)]
pub struct DocxNumbering {
    bullet: Option<usize>,
    numbered: HashMap<u32, usize>,
    next_id: usize,
}

impl DocxNumbering {
    /// Scan `document` and assign ids in first-use order.
    pub fn for_document(document: &Document) -> Self {
        let mut numbering = Self {
            next_id: FIRST_ID,
            ..Self::default()
        };
        for p in document.paragraphs() {
            match p.style {
                ParagraphStyle::ListBullet if numbering.bullet.is_none() => {
                    numbering.bullet = Some(numbering.take_id());
                }
                ParagraphStyle::ListNumber { list } if !numbering.numbered.contains_key(&list) => {
                    let id = numbering.take_id();
                    numbering.numbered.insert(list, id);
                }
                _ => {}
            }
        }
        numbering
    }

    fn take_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Numbering id for a list paragraph, `None` for anything else.
    pub fn id_for(&self, style: ParagraphStyle) -> Option<usize> {
        match style {
            ParagraphStyle::ListBullet => self.bullet,
            ParagraphStyle::ListNumber { list } => self.numbered.get(&list).copied(),
            _ => None,
        }
    }

    /// Add the definitions to `docx`.
    pub fn register(&self, mut docx: Docx) -> Docx {
        if let Some(id) = self.bullet {
            docx = add_definition(docx, id, "bullet", "\u{2022}");
        }
        let mut ids: Vec<usize> = self.numbered.values().copied().collect();
        ids.sort_unstable();
        for id in ids {
            docx = add_definition(docx, id, "decimal", "%1.");
        }
        docx
    }
}

fn list_level(format: &str, text: &str) -> Level {
    Level::new(
        0,
        Start::new(1),
        NumberFormat::new(format),
        LevelText::new(text),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None)
}

fn add_definition(docx: Docx, id: usize, format: &str, text: &str) -> Docx {
    docx.add_abstract_numbering(AbstractNumbering::new(id).add_level(list_level(format, text)))
        .add_numbering(Numbering::new(id, id))
}
