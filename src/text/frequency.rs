//! Frequency-based extractive ranking.
//!
//! Scores are raw sums of whole-text word counts, deliberately NOT
//! normalized by sentence length: long, word-dense sentences are favored on
//! purpose. Do not "fix" this by dividing by token count - the bias is a
//! characteristic of the algorithm, not a bug.

use std::collections::HashMap;

use crate::core::models::ScoredSentence;

/// Strip trailing punctuation so a token counts the same whether it sits
/// mid-sentence ("text") or closes one ("text.").
fn canonical(token: &str) -> &str {
    token.trim_end_matches(['.', ',', '?', '!', ';', ':'])
}

/// Whole-text occurrence counts, keyed by canonical token. Single-character
/// tokens carry no topical signal and are excluded.
#[must_use]
pub fn word_frequencies(text: &str) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in text.split_whitespace() {
        let word = canonical(token);
        if word.chars().count() <= 1 {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Score each sentence as the sum of its words' whole-text counts. Words
/// absent from the map (filtered as single-character) contribute zero.
#[must_use]
pub fn score_sentences(sentences: &[String], counts: &HashMap<&str, usize>) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            score: sentence
                .split_whitespace()
                .map(|token| counts.get(canonical(token)).copied().unwrap_or(0))
                .sum(),
            text: sentence.clone(),
        })
        .collect()
}

/// The top `limit` sentences by descending score. The sort is stable, so
/// ties - including the all-zero-score case - keep original document order.
#[must_use]
pub fn select_top(mut scored: Vec<ScoredSentence>, limit: usize) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn counts_ignore_trailing_punctuation_and_single_chars() {
        let counts = word_frequencies("apples grow. apples, fall! I a x");
        assert_eq!(counts.get("apples"), Some(&2));
        assert_eq!(counts.get("grow"), Some(&1));
        assert_eq!(counts.get("I"), None);
        assert_eq!(counts.get("a"), None);
        assert_eq!(counts.get("x"), None);
    }

    #[test]
    fn dense_sentences_outscore_short_ones() {
        let text = "red red red blue. red blue. green";
        let counts = word_frequencies(text);
        let scored = score_sentences(
            &sentences(&["red red red blue", "red blue", "green"]),
            &counts,
        );
        assert_eq!(scored[0].score, 11); // 3+3+3+2
        assert_eq!(scored[1].score, 5); // 3+2
        assert_eq!(scored[2].score, 1);
    }

    #[test]
    fn select_top_is_stable_on_ties() {
        let scored = vec![
            ScoredSentence { text: "first".into(), score: 4 },
            ScoredSentence { text: "second".into(), score: 4 },
            ScoredSentence { text: "third".into(), score: 9 },
        ];
        let top = select_top(scored, 3);
        assert_eq!(top[0].text, "third");
        assert_eq!(top[1].text, "first");
        assert_eq!(top[2].text, "second");
    }

    #[test]
    fn all_zero_scores_keep_document_order() {
        let scored = vec![
            ScoredSentence { text: "a b".into(), score: 0 },
            ScoredSentence { text: "c d".into(), score: 0 },
            ScoredSentence { text: "e f".into(), score: 0 },
            ScoredSentence { text: "g h".into(), score: 0 },
        ];
        let top = select_top(scored, 3);
        let texts: Vec<&str> = top.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["a b", "c d", "e f"]);
    }

    #[test]
    fn fewer_sentences_than_limit_selects_all() {
        let scored = vec![ScoredSentence { text: "only one".into(), score: 2 }];
        assert_eq!(select_top(scored, 3).len(), 1);
    }
}
