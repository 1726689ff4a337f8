use std::path::Path;

use crate::errors::SummarizeError;
use crate::extract::docx;

/// The three container formats the engine can turn into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    WordDocument,
    PlainText,
    Markdown,
}

/// Dispatch on extension, ASCII case-insensitive. `None` means the caller
/// must short-circuit without touching the filesystem.
#[must_use]
pub fn classify(path: &Path) -> Option<SupportedFormat> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "docx" => Some(SupportedFormat::WordDocument),
        "txt" => Some(SupportedFormat::PlainText),
        "md" => Some(SupportedFormat::Markdown),
        _ => None,
    }
}

/// Read a supported file into plain text. Markdown is treated as verbatim
/// text; its markup survives into the synopsis.
pub async fn read_text(path: &Path, format: SupportedFormat) -> Result<String, SummarizeError> {
    match format {
        SupportedFormat::WordDocument => {
            let bytes = tokio::fs::read(path).await?;
            docx::body_text(&bytes)
        }
        SupportedFormat::PlainText | SupportedFormat::Markdown => {
            Ok(tokio::fs::read_to_string(path).await?)
        }
    }
}
