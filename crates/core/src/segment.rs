//! Paragraph segmentation for free-form input text.
//!
//! Blank lines separate blocks. Lines inside a block are joined into one
//! paragraph unless the block contains a list item, in which case every line
//! of that block becomes its own paragraph.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Leading list-item marker: a bullet symbol, or a numeric/alphabetic token
/// closed by `.` or `)`, followed by whitespace or end of line.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(?P<bullet>[-*+•◦▪‣–—·])|(?P<num>\d+)[.)]|(?P<word>[A-Za-z]+)[.)])(?:\s|$)")
        .unwrap()
});

/// Well-formed roman numeral (checked after the case is made uniform).
static ROMAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})$").unwrap()
});

/// The family of a recognised list-item marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListMarker {
    /// `-`, `*`, `•` and similar symbols.
    Bullet,
    /// `1.` or `1)`.
    Numeric,
    /// `a.`, `A)`.
    Alphabetic,
    /// `i.`, `iv)`, `XII.`.
    Roman,
}

/// Classify the list-item marker at the start of `line`, if any.
///
/// Single letters `i`, `v` and `x` count as roman numerals; every other
/// single letter is alphabetic. Longer tokens must be a well-formed roman
/// numeral in a single case, so `Dr.` or `Mix.` are plain text.
pub fn classify_marker(line: &str) -> Option<ListMarker> {
    let caps = MARKER_REGEX.captures(line)?;

    if caps.name("bullet").is_some() {
        return Some(ListMarker::Bullet);
    }
    if caps.name("num").is_some() {
        return Some(ListMarker::Numeric);
    }

    let word = caps.name("word")?.as_str();
    if word.len() == 1 {
        return if matches!(word, "i" | "v" | "x" | "I" | "V" | "X") {
            Some(ListMarker::Roman)
        } else {
            Some(ListMarker::Alphabetic)
        };
    }

    let single_case = word.chars().all(|c| c.is_ascii_uppercase())
        || word.chars().all(|c| c.is_ascii_lowercase());
    if single_case && ROMAN_REGEX.is_match(&word.to_ascii_uppercase()) {
        Some(ListMarker::Roman)
    } else {
        None
    }
}

/// Whether `line` starts with a list-item marker.
pub fn is_list_item(line: &str) -> bool {
    classify_marker(line).is_some()
}

/// One output paragraph together with the marker it starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub marker: Option<ListMarker>,
}

/// Splits text blocks into paragraphs.
///
/// By default every non-whitespace character of the input reaches the
/// output unchanged; NFC composition is opt-in.
#[derive(Debug, Clone, Default)]
pub struct ParagraphSegmenter {
    /// Compose input to NFC before splitting.
    unicode_normalization: bool,
}

impl ParagraphSegmenter {
    /// Create a segmenter that keeps input code points as they are.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether input is NFC-composed before splitting.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.unicode_normalization = enabled;
        self
    }

    /// Split `text` into trimmed, non-empty paragraphs in input order.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segment_with_markers(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    /// Like [`segment`](Self::segment), keeping each paragraph's marker.
    pub fn segment_with_markers(&self, text: &str) -> Vec<Segment> {
        let text = if self.unicode_normalization {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        let mut segments = Vec::new();
        let mut block: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            if line.trim().is_empty() {
                flush_block(&mut block, &mut segments);
            } else {
                block.push(line.trim_end());
            }
        }
        flush_block(&mut block, &mut segments);

        segments
    }
}

/// Turn the collected lines of one block into segments and clear it.
fn flush_block(block: &mut Vec<&str>, segments: &mut Vec<Segment>) {
    if block.is_empty() {
        return;
    }

    if block.iter().any(|line| is_list_item(line)) {
        for line in block.iter() {
            let text = line.trim();
            if !text.is_empty() {
                segments.push(Segment {
                    text: text.to_string(),
                    marker: classify_marker(line),
                });
            }
        }
    } else {
        let joined = block
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            segments.push(Segment {
                text: joined,
                marker: None,
            });
        }
    }

    block.clear();
}

/// Segment `text` with the default settings.
pub fn segment(text: &str) -> Vec<String> {
    ParagraphSegmenter::new().segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n  ").is_empty());
        assert!(segment("\r\n\r\n\t\r\n").is_empty());
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        assert_eq!(segment("Para one.\n\nPara two."), vec!["Para one.", "Para two."]);
    }

    #[test]
    fn test_several_blank_lines_act_as_one() {
        assert_eq!(
            segment("\n\nPara one.\n\n\n   \nPara two.\n\n"),
            vec!["Para one.", "Para two."]
        );
    }

    #[test]
    fn test_lines_without_markers_merge() {
        assert_eq!(segment("line a\nline b"), vec!["line a line b"]);
        assert_eq!(segment("  line a  \n    line b"), vec!["line a line b"]);
    }

    #[test]
    fn test_markers_force_per_line_split() {
        assert_eq!(
            segment("Intro line\n1. first item\n2. second item"),
            vec!["Intro line", "1. first item", "2. second item"]
        );
    }

    #[test]
    fn test_marker_block_keeps_trailing_plain_lines_separate() {
        assert_eq!(
            segment("a) primeiro\ncontinua aqui\nb) segundo"),
            vec!["a) primeiro", "continua aqui", "b) segundo"]
        );
    }

    #[test]
    fn test_line_endings_normalized() {
        assert_eq!(segment("one\r\ntwo\r\n\r\nthree\rfour"), vec!["one two", "three four"]);
    }

    #[test]
    fn test_classify_marker_families() {
        assert_eq!(classify_marker("- item"), Some(ListMarker::Bullet));
        assert_eq!(classify_marker("• item"), Some(ListMarker::Bullet));
        assert_eq!(classify_marker("  * item"), Some(ListMarker::Bullet));
        assert_eq!(classify_marker("1. item"), Some(ListMarker::Numeric));
        assert_eq!(classify_marker("12) item"), Some(ListMarker::Numeric));
        assert_eq!(classify_marker("a. item"), Some(ListMarker::Alphabetic));
        assert_eq!(classify_marker("B) item"), Some(ListMarker::Alphabetic));
        assert_eq!(classify_marker("iv) item"), Some(ListMarker::Roman));
        assert_eq!(classify_marker("XII. item"), Some(ListMarker::Roman));
    }

    #[test]
    fn test_single_letter_roman_disambiguation() {
        assert_eq!(classify_marker("i. item"), Some(ListMarker::Roman));
        assert_eq!(classify_marker("V) item"), Some(ListMarker::Roman));
        assert_eq!(classify_marker("c. item"), Some(ListMarker::Alphabetic));
    }

    #[test]
    fn test_non_markers() {
        assert_eq!(classify_marker("1.5 milhão de pessoas"), None);
        assert_eq!(classify_marker("Dr. Silva assina"), None);
        assert_eq!(classify_marker("Mix. of words"), None);
        assert_eq!(classify_marker("-5 graus"), None);
        assert_eq!(classify_marker("Texto comum."), None);
    }

    #[test]
    fn test_marker_alone_on_line() {
        assert_eq!(classify_marker("1."), Some(ListMarker::Numeric));
        assert_eq!(segment("Itens:\n1.\n2. dois"), vec!["Itens:", "1.", "2. dois"]);
    }

    #[test]
    fn test_segment_with_markers_reports_marker() {
        let segments = ParagraphSegmenter::new().segment_with_markers("Intro\n- um\n- dois");
        assert_eq!(segments[0].marker, None);
        assert_eq!(segments[1].marker, Some(ListMarker::Bullet));
        assert_eq!(segments[2].text, "- dois");
    }

    #[test]
    fn test_code_points_preserved_by_default() {
        // "o" + combining acute accent
        let decomposed = "Relato\u{301}rio final";
        let out = segment(decomposed);
        assert_eq!(out, vec![decomposed]);
        assert_eq!(non_whitespace(&out.concat()), non_whitespace(decomposed));
    }

    #[test]
    fn test_nfc_composition_opt_in() {
        let composed = ParagraphSegmenter::new()
            .with_unicode_normalization(true)
            .segment("Relato\u{301}rio");
        assert_eq!(composed, vec!["Relat\u{f3}rio"]);
    }

    #[test]
    fn test_no_content_loss() {
        let inputs = [
            "Intro line\n1. first item\n2. second item",
            "  a\n b \n\n\n c\r\n- d\r\n  e  ",
            "Considerando que:\n\na) o pedido é tempestivo;\nb) há interesse.\n\nÉ o parecer.",
            "\n\n\n",
            "Relato\u{301}rio final\n\nFundamenta\u{E7}\u{E3}o",
        ];
        for input in inputs {
            let joined: String = segment(input).concat();
            assert_eq!(non_whitespace(&joined), non_whitespace(input), "input: {:?}", input);
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Intro line\n1. first item\n2. second item\n\nTail  text\nmore",
            "Para one.\n\nPara two.",
            "- a\n- b\n\ni. x\nii. y",
        ];
        for input in inputs {
            let once = segment(input);
            let twice = segment(&once.join("\n\n"));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_no_empty_paragraphs_and_no_newlines() {
        for p in segment("x\n\n \n y \n\n- z\n   \n") {
            assert!(!p.trim().is_empty());
            assert!(!p.contains('\n'));
            assert_eq!(p, p.trim());
        }
    }
}
