use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read document: {0}")]
    ReadFailure(String),

    #[error("Failed to fetch page: {0}")]
    FetchFailure(String),

    #[error("Page has no extractable body text")]
    NoContent,

    #[error("No sentences survived the noise filter")]
    NoMeaningfulContent,
}

impl SummarizeError {
    /// The fixed, display-ready message the host application shows for this
    /// failure. The string contract exposes these and nothing else; the
    /// underlying fault stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SummarizeError::UnsupportedFormat(_) => "preview not supported for this file type",
            SummarizeError::ReadFailure(_) => "could not read file contents",
            SummarizeError::FetchFailure(_) => "site unreachable or protected",
            SummarizeError::NoContent => "page has no extractable body text",
            SummarizeError::NoMeaningfulContent => "no meaningful sentences found",
        }
    }
}

impl From<std::io::Error> for SummarizeError {
    fn from(error: std::io::Error) -> Self {
        SummarizeError::ReadFailure(error.to_string())
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::FetchFailure(error.to_string())
    }
}

impl From<zip::result::ZipError> for SummarizeError {
    fn from(error: zip::result::ZipError) -> Self {
        SummarizeError::ReadFailure(error.to_string())
    }
}
