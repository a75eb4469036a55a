//! Labelled-section parsing for parecer input.
//!
//! Input looks like:
//!
//! ```text
//! EMENTA
//! Resumo do parecer.
//!
//! RELATÓRIO
//! ...
//! ```
//!
//! Labels stand alone on their line, optionally followed by a colon, and
//! match regardless of case or accents.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// The four sections of a parecer técnico, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Ementa,
    Relatorio,
    Fundamentacao,
    Conclusao,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Ementa,
        SectionKind::Relatorio,
        SectionKind::Fundamentacao,
        SectionKind::Conclusao,
    ];

    /// Label as written in input and in the generated heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ementa => "EMENTA",
            Self::Relatorio => "RELATÓRIO",
            Self::Fundamentacao => "FUNDAMENTAÇÃO",
            Self::Conclusao => "CONCLUSÃO",
        }
    }

    /// Recognise a label line.
    pub fn from_label(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
        if trimmed.is_empty() {
            return None;
        }
        let folded = fold_label(trimmed);
        Self::ALL
            .into_iter()
            .find(|kind| fold_label(kind.label()) == folded)
    }
}

/// Uppercase ASCII-ish form of a label: accents stripped via NFD.
fn fold_label(text: &str) -> String {
    text.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Section bodies keyed by kind. Bodies are raw text, not yet segmented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub ementa: Option<String>,
    pub relatorio: Option<String>,
    pub fundamentacao: Option<String>,
    pub conclusao: Option<String>,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Replace a section body. Blank text clears the section.
    pub fn set(&mut self, kind: SectionKind, text: impl Into<String>) {
        let text = text.into();
        *self.slot_mut(kind) = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
    }

    /// Append to a section, separating from existing text by a blank line.
    fn append(&mut self, kind: SectionKind, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if let Some(existing) = self.slot_mut(kind) {
            log::warn!("Section {} repeated; appending", kind.label());
            existing.push_str("\n\n");
            existing.push_str(text);
            return;
        }
        *self.slot_mut(kind) = Some(text.to_string());
    }

    /// Overlay every section present in `other` onto `self`.
    pub fn merge_from(&mut self, other: Sections) {
        for kind in SectionKind::ALL {
            if let Some(text) = other.get(kind) {
                self.set(kind, text);
            }
        }
    }

    /// True when no section has content.
    pub fn is_empty(&self) -> bool {
        SectionKind::ALL.iter().all(|k| self.get(*k).is_none())
    }

    /// Present sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> {
        SectionKind::ALL
            .into_iter()
            .filter_map(move |k| self.get(k).map(|text| (k, text)))
    }

    fn slot(&self, kind: SectionKind) -> &Option<String> {
        match kind {
            SectionKind::Ementa => &self.ementa,
            SectionKind::Relatorio => &self.relatorio,
            SectionKind::Fundamentacao => &self.fundamentacao,
            SectionKind::Conclusao => &self.conclusao,
        }
    }

    fn slot_mut(&mut self, kind: SectionKind) -> &mut Option<String> {
        match kind {
            SectionKind::Ementa => &mut self.ementa,
            SectionKind::Relatorio => &mut self.relatorio,
            SectionKind::Fundamentacao => &mut self.fundamentacao,
            SectionKind::Conclusao => &mut self.conclusao,
        }
    }
}

/// Parse labelled text into sections.
///
/// Each body runs from the line after its label to the next label or the end
/// of input. Text before the first label is dropped. Fails with
/// [`Error::MissingSections`] when no section has content.
pub fn parse_sections(input: &str) -> Result<Sections> {
    let input = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut sections = Sections::default();
    let mut current: Option<SectionKind> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut preamble_lines = 0usize;

    for line in input.split('\n') {
        if let Some(kind) = SectionKind::from_label(line) {
            if let Some(prev) = current {
                sections.append(prev, body.join("\n").trim());
            }
            log::debug!("Found section label {}", kind.label());
            current = Some(kind);
            body.clear();
        } else if current.is_some() {
            body.push(line);
        } else if !line.trim().is_empty() {
            preamble_lines += 1;
        }
    }
    if let Some(prev) = current {
        sections.append(prev, body.join("\n").trim());
    }

    if preamble_lines > 0 {
        log::warn!(
            "Ignoring {} line(s) of text before the first section label",
            preamble_lines
        );
    }

    if sections.is_empty() {
        let expected = SectionKind::ALL
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::MissingSections(expected));
    }

    Ok(sections)
}
