/// Sentences at or below this length are fragments, button labels, or
/// bylines - not article prose.
const MIN_SENTENCE_CHARS: usize = 20;

// Boilerplate substrings that survive content extraction on busier pages.
// Matched case-insensitively against the whole sentence.
const BOILERPLATE_MARKERS: [&str; 8] = [
    "log in",
    "login",
    "sign in",
    "sign up",
    "menu",
    "skip to content",
    "skip navigation",
    "cookie",
];

/// Drop short and boilerplate sentences, keeping document order.
#[must_use]
pub fn meaningful_sentences(sentences: Vec<String>) -> Vec<String> {
    sentences
        .into_iter()
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            !BOILERPLATE_MARKERS.iter().any(|m| lowered.contains(m))
        })
        .collect()
}
