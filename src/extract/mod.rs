//! Source-specific text extraction: local containers and fetched HTML.

pub mod content;
pub mod docx;
pub mod local;
pub mod metadata;
pub mod noise;
