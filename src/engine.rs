//! The orchestrator: sequences reading, extraction, and ranking per source
//! kind, owns the fetch deadline, and (at the string facade) maps every
//! failure to a fixed display-ready message.

use std::path::Path;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::core::config::EngineConfig;
use crate::core::models::{Document, SourceKind, Strategy, Summary};
use crate::errors::SummarizeError;
use crate::extract::content::{DensityExtractor, MainContentExtractor};
use crate::extract::{local, metadata, noise};
use crate::fetch;
use crate::text::{frequency, normalize, sentences};

/// Headroom on top of the per-request timeout so the orchestrator-level
/// deadline only fires if the HTTP client fails to enforce its own.
const FETCH_DEADLINE_GRACE: Duration = Duration::from_millis(250);

pub struct Engine {
    config: EngineConfig,
    extractor: Box<dyn MainContentExtractor>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            extractor: Box::new(DensityExtractor),
        }
    }

    /// Replace the main-content heuristic. Anything satisfying the
    /// `MainContentExtractor` contract slots in here.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn MainContentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Summarize a local document. Unknown extensions short-circuit to an
    /// `Unsupported` summary before any I/O happens; they are an everyday
    /// outcome for the host application, not a fault.
    pub async fn summarize_local(&self, path: &Path) -> Result<Summary, SummarizeError> {
        let Some(format) = local::classify(path) else {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Ok(Summary::new(
                Strategy::Unsupported,
                SummarizeError::UnsupportedFormat(extension).user_message(),
            ));
        };

        debug!("reading {} as {:?}", path.display(), format);
        let raw_text = local::read_text(path, format).await?;
        let document = Document::new(SourceKind::Local(path.to_path_buf()), raw_text);
        let summary = self.summarize_document(&document);
        info!(
            "summarized {} via {:?} ({} chars)",
            path.display(),
            summary.strategy,
            summary.body.chars().count()
        );
        Ok(summary)
    }

    /// Summarize a web page: one bounded GET, then the metadata shortcut,
    /// then heuristic content extraction.
    pub async fn summarize_url(&self, url: &str) -> Result<Summary, SummarizeError> {
        debug!("fetching {}", url);
        let html = timeout(
            self.config.fetch_timeout + FETCH_DEADLINE_GRACE,
            fetch::fetch_page(url, &self.config),
        )
        .await
        .map_err(|_| SummarizeError::FetchFailure("fetch deadline elapsed".to_string()))??;

        let summary = self.summarize_page(&html)?;
        info!(
            "summarized {} via {:?} ({} chars)",
            url,
            summary.strategy,
            summary.body.chars().count()
        );
        Ok(summary)
    }

    /// Frequency-ranked extractive synopsis of already-extracted text.
    fn summarize_document(&self, document: &Document) -> Summary {
        let text = document.cleaned_text.as_str();
        if text.chars().count() < self.config.passthrough_max_chars {
            // Near-trivial text reads faster than any synopsis of it.
            return Summary::new(Strategy::VerbatimPassthrough, text);
        }

        let sentence_list = sentences::split_for_scoring(text);
        if sentence_list.is_empty() {
            return Summary::new(Strategy::VerbatimPassthrough, text);
        }

        let counts = frequency::word_frequencies(text);
        let scored = frequency::score_sentences(&sentence_list, &counts);
        let selected = frequency::select_top(scored, self.config.summary_sentences);
        let body = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(". ")
            + ".";
        Summary::new(Strategy::FrequencyTop3, body)
    }

    /// Web strategy chain: author-declared description first, content
    /// extraction plus noise filtering as the fallback.
    fn summarize_page(&self, html: &str) -> Result<Summary, SummarizeError> {
        if let Some(description) = metadata::page_description(html) {
            return Ok(Summary::new(
                Strategy::MetaDescription,
                self.clamp_web_body(description),
            ));
        }

        let content = self
            .extractor
            .extract(html)
            .ok_or(SummarizeError::NoContent)?;
        let cleaned = normalize::normalize_whitespace(&content);
        let survivors = noise::meaningful_sentences(sentences::split_keep_terminator(&cleaned));
        if survivors.is_empty() {
            return Err(SummarizeError::NoMeaningfulContent);
        }

        // First sentences in document order, not frequency rank: the intro
        // of an article is assumed topic-bearing.
        let body = survivors
            .into_iter()
            .take(self.config.summary_sentences)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Summary::new(
            Strategy::ContentExtract,
            self.clamp_web_body(body),
        ))
    }

    fn clamp_web_body(&self, body: String) -> String {
        let max_chars = self.config.web_summary_max_chars;
        if body.chars().count() <= max_chars {
            return body;
        }
        let clipped: String = body.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", clipped.trim_end())
    }
}

/// Summarize a local document, always yielding display-ready text. This is
/// the boundary where the error taxonomy collapses into fixed strings; no
/// raw fault ever reaches the caller.
pub async fn summarize_local(path: &str) -> String {
    match Engine::with_config(EngineConfig::from_env())
        .summarize_local(Path::new(path))
        .await
    {
        Ok(summary) => summary.body,
        Err(e) => {
            warn!("local summarization of {} failed: {}", path, e);
            e.user_message().to_string()
        }
    }
}

/// Summarize a web page, always yielding display-ready text. Same contract
/// as [`summarize_local`]: a synopsis or one of the fixed failure messages.
pub async fn summarize_url(url: &str) -> String {
    match Engine::with_config(EngineConfig::from_env())
        .summarize_url(url)
        .await
    {
        Ok(summary) => summary.body,
        Err(e) => {
            warn!("summarization of {} failed: {}", url, e);
            e.user_message().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new()
    }

    fn document(text: &str) -> Document {
        Document::new(SourceKind::Local("test.txt".into()), text)
    }

    #[test]
    fn passthrough_below_threshold() {
        let doc = document("Short note. Nothing to rank here.");
        let summary = engine().summarize_document(&doc);
        assert_eq!(summary.strategy, Strategy::VerbatimPassthrough);
        assert_eq!(summary.body, "Short note. Nothing to rank here.");
    }

    #[test]
    fn frequency_path_selects_three_sentences() {
        // Four sentences, each repeated-word-heavy enough to clear the
        // 200-char passthrough threshold.
        let text = "The compiler reports errors early and the compiler explains them well. \
            Gardens need regular watering in the hot summer months to survive. \
            The compiler toolchain ships with the compiler and its formatter together. \
            A short closing remark ends the note.";
        let doc = document(text);
        let summary = engine().summarize_document(&doc);
        assert_eq!(summary.strategy, Strategy::FrequencyTop3);
        let parts: Vec<&str> = summary.body.split(". ").collect();
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn web_body_clamped_to_150_chars_with_marker() {
        let body = "word ".repeat(60);
        let clamped = engine().clamp_web_body(body);
        assert!(clamped.chars().count() <= 150);
        assert!(clamped.ends_with("..."));
    }

    #[test]
    fn short_web_body_is_untouched() {
        let clamped = engine().clamp_web_body("Already short.".to_string());
        assert_eq!(clamped, "Already short.");
    }

    #[test]
    fn meta_description_bypasses_content_extraction() {
        let html = r#"<html><head>
            <meta property="og:description" content="Example description text.">
        </head><body><article><p>Completely different body content that would
        otherwise be extracted and summarized on the fallback path.</p></article></body></html>"#;
        let summary = engine().summarize_page(html).expect("summarizes");
        assert_eq!(summary.strategy, Strategy::MetaDescription);
        assert_eq!(summary.body, "Example description text.");
    }

    #[test]
    fn empty_page_fails_with_no_content() {
        let err = engine().summarize_page("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, SummarizeError::NoContent));
    }

    #[test]
    fn filtered_out_page_fails_with_no_meaningful_content() {
        let html = r#"<html><body><article>
            <p>Menu. Login here. Short bits. Tiny words only.</p>
        </article></body></html>"#;
        let err = engine().summarize_page(html).unwrap_err();
        assert!(matches!(err, SummarizeError::NoMeaningfulContent));
    }
}
