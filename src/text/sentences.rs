use regex::Regex;
use std::sync::LazyLock;

// The boundary rule is deliberately naive: a sentence-ending mark followed
// by whitespace. Abbreviations, decimals, and quoted punctuation will
// mis-segment; that behavior is inherited and kept.
static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.?!]\s+").unwrap_or_else(|_| {
        // In practice this cannot fail.
        Regex::new(r"$^").expect("fallback regex compiles")
    })
});

static BOUNDARY_AFTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.?!]\s").unwrap_or_else(|_| {
        Regex::new(r"$^").expect("fallback regex compiles")
    })
});

/// Segment normalized text for frequency scoring. The boundary match is
/// discarded, and each segment is stripped of trailing sentence punctuation
/// so the final sentence of a document (which has no boundary after it)
/// looks like every other segment.
#[must_use]
pub fn split_for_scoring(text: &str) -> Vec<String> {
    BOUNDARY_RE
        .split(text)
        .map(|segment| segment.trim().trim_end_matches(['.', '?', '!']).trim_end())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Segment normalized text keeping the terminal punctuation attached to the
/// preceding sentence: the cut falls after a sentence-ending mark that is
/// followed by whitespace.
#[must_use]
pub fn split_keep_terminator(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY_AFTER_RE.find_iter(text) {
        // The match covers the mark plus one whitespace char; the mark is
        // ASCII, so the cut lands one byte in.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = boundary.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
