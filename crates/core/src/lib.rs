//! Core document model, builder, house styles, and paragraph segmentation
//! for DOCX generation.

pub mod builder;
pub mod error;
pub mod sections;
pub mod segment;
pub mod style;
pub mod types;

pub use builder::DocumentBuilder;
pub use error::{Error, Result};
pub use sections::{parse_sections, SectionKind, Sections};
pub use segment::{classify_marker, segment, ListMarker, ParagraphSegmenter, Segment};
pub use style::{HouseStyle, TextStyle};
pub use types::{
    Alignment, Block, Color, Document, DocumentProperties, Paragraph, ParagraphFormat,
    ParagraphStyle, Run, RunFormat, Table,
};
