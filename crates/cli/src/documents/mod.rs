//! Document templates. Each builds a complete `Document` ready for writing.

pub mod ibge;
pub mod parecer;
pub mod sample;
