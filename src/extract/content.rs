//! Main-content isolation for fetched pages.
//!
//! The engine depends only on the `MainContentExtractor` contract: HTML
//! document in, primary textual content out. `DensityExtractor` is the
//! default implementation; swap in anything else that satisfies the trait.

use scraper::{ElementRef, Html, Selector};

use crate::text::normalize::normalize_whitespace;

pub trait MainContentExtractor: Send + Sync {
    /// The page's main textual content, or `None` when the document carries
    /// no usable body text.
    fn extract(&self, html: &str) -> Option<String>;
}

/// Link-density scoring heuristic. Candidate containers are scored by text
/// volume minus a link-text penalty; containers whose class/id mark them as
/// page furniture are skipped outright.
#[derive(Debug, Default)]
pub struct DensityExtractor;

const CANDIDATE_SELECTOR: &str = "article, main, section, div";

// Structural UI words only; no site-specific knowledge.
const FURNITURE_MARKERS: [&str; 12] = [
    "nav", "navbar", "menu", "sidebar", "footer", "header", "banner", "cookie", "consent",
    "promo", "subscribe", "newsletter",
];

/// Candidates with less text than this are widgets, not content.
const MIN_CANDIDATE_CHARS: usize = 20;

impl MainContentExtractor for DensityExtractor {
    fn extract(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let candidates = Selector::parse(CANDIDATE_SELECTOR).ok()?;

        let mut best_score: i64 = 0;
        let mut best_text: Option<String> = None;
        for element in document.select(&candidates) {
            if is_page_furniture(&element) {
                continue;
            }
            let text_chars = element_text_chars(&element);
            if text_chars < MIN_CANDIDATE_CHARS {
                continue;
            }
            let link_chars = link_text_chars(&element);
            // Link text is usually navigation, tag clouds, or related-article
            // widgets; non-link density is what marks an article body.
            let mut score = text_chars as i64 - 2 * link_chars as i64;
            match element.value().name() {
                "article" => score += 500,
                "main" => score += 300,
                _ => {}
            }
            if link_chars > text_chars / 2 {
                score -= 500;
            }
            if score > best_score {
                best_score = score;
                best_text = Some(element_text(&element));
            }
        }

        // Pages without any container markup (bare <p> under <body>) still
        // deserve a fallback before giving up entirely.
        if best_text.is_none() {
            let body = Selector::parse("body").ok()?;
            best_text = document.select(&body).next().map(|b| element_text(&b));
        }

        best_text
            .map(|text| normalize_whitespace(&text))
            .filter(|text| !text.is_empty())
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}

fn class_or_id_lowercase(element: &ElementRef) -> String {
    let mut out = String::new();
    if let Some(class) = element.value().attr("class") {
        out.push_str(class);
        out.push(' ');
    }
    if let Some(id) = element.value().attr("id") {
        out.push_str(id);
    }
    out.to_ascii_lowercase()
}

fn is_page_furniture(element: &ElementRef) -> bool {
    let markers = class_or_id_lowercase(element);
    if markers.is_empty() {
        return false;
    }
    FURNITURE_MARKERS.iter().any(|m| markers.contains(m))
}

fn element_text_chars(element: &ElementRef) -> usize {
    element.text().map(|t| t.chars().count()).sum()
}

fn link_text_chars(element: &ElementRef) -> usize {
    let Ok(anchors) = Selector::parse("a") else {
        return 0;
    };
    element
        .select(&anchors)
        .map(|a| a.text().map(|t| t.chars().count()).sum::<usize>())
        .sum()
}
