/// Collapse all whitespace runs (newlines included) to single spaces and
/// trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
