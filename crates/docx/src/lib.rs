//! DOCX (Office Open XML) writer backend for generated documents.
//!
//! Maps a `docgen_core::Document` onto the `docx-rs` model and packs it,
//! with core properties rendered separately.

pub mod numbering;
pub mod props;
pub mod styles;
pub mod writer;

pub use writer::{DocxWriter, PageLayout};
