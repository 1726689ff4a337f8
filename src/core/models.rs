use serde::Serialize;
use std::path::PathBuf;

use crate::text::normalize::normalize_whitespace;

/// Where a document came from. The locator is kept for log context only;
/// nothing downstream re-reads the source.
#[derive(Debug, Clone, Serialize)]
pub enum SourceKind {
    Local(PathBuf),
    Remote(String),
}

/// One document flowing through a single summarization call. Never persisted
/// and never shared between calls.
#[derive(Debug)]
pub struct Document {
    pub source: SourceKind,
    pub raw_text: String,
    /// Whitespace-collapsed, trimmed form of `raw_text`. All segmentation
    /// and scoring runs on this.
    pub cleaned_text: String,
}

impl Document {
    pub fn new(source: SourceKind, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let cleaned_text = normalize_whitespace(&raw_text);
        Self {
            source,
            raw_text,
            cleaned_text,
        }
    }
}

/// Which path produced a summary body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    MetaDescription,
    ContentExtract,
    FrequencyTop3,
    VerbatimPassthrough,
    Unsupported,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub strategy: Strategy,
    pub body: String,
}

impl Summary {
    pub fn new(strategy: Strategy, body: impl Into<String>) -> Self {
        Self {
            strategy,
            body: body.into(),
        }
    }
}

/// A sentence with its frequency score. Scores are only comparable within
/// the call that produced them.
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    pub text: String,
    pub score: usize,
}
