use scraper::{Html, Selector};
use tracing::debug;

// Probe order matters: Open Graph descriptions are curated most often,
// the plain description tag is the long tail, Twitter cards come last.
const DESCRIPTION_SELECTORS: [&str; 3] = [
    r#"meta[property="og:description"]"#,
    r#"meta[name="description"]"#,
    r#"meta[name="twitter:description"]"#,
];

/// Anything at or below this length is a stub ("Home", a site name) rather
/// than a usable synopsis.
const MIN_DESCRIPTION_CHARS: usize = 10;

/// The author-declared page synopsis, when one is present and long enough
/// to be worth trusting. Cheaper and more authoritative than heuristic
/// content extraction, so callers should try this first.
#[must_use]
pub fn page_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    for selector in DESCRIPTION_SELECTORS {
        let Ok(parsed) = Selector::parse(selector) else {
            continue;
        };
        for element in document.select(&parsed) {
            if let Some(content) = element.value().attr("content") {
                let content = content.trim();
                if content.chars().count() > MIN_DESCRIPTION_CHARS {
                    debug!("meta description found via {}", selector);
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_description_wins_over_plain_description() {
        let html = r#"<html><head>
            <meta name="description" content="Plain description, long enough.">
            <meta property="og:description" content="Open graph description text.">
        </head><body></body></html>"#;
        assert_eq!(
            page_description(html).as_deref(),
            Some("Open graph description text.")
        );
    }

    #[test]
    fn falls_through_to_twitter_description() {
        let html = r#"<html><head>
            <meta name="twitter:description" content="Twitter card description.">
        </head><body></body></html>"#;
        assert_eq!(
            page_description(html).as_deref(),
            Some("Twitter card description.")
        );
    }

    #[test]
    fn short_stubs_are_ignored() {
        let html = r#"<html><head>
            <meta property="og:description" content="Home">
            <meta name="description" content="0123456789">
        </head><body></body></html>"#;
        assert_eq!(page_description(html), None);
    }

    #[test]
    fn whitespace_padding_does_not_rescue_a_stub() {
        let html = r#"<html><head>
            <meta name="description" content="   Home      ">
        </head><body></body></html>"#;
        assert_eq!(page_description(html), None);
    }

    #[test]
    fn no_meta_tags_yields_none() {
        assert_eq!(page_description("<html><body><p>Body only.</p></body></html>"), None);
    }
}
