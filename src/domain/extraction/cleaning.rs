use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// ASCII word boundaries: a non-ASCII letter next to the word does not protect it
static REFERENCES_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)References(?-u:\b).*$").unwrap());

/// Normalize extracted PDF text for reading aloud.
///
/// Newlines and whitespace runs collapse to single spaces, the result is
/// trimmed, and everything from the first standalone `References` onwards is
/// dropped (case-sensitive). Applying it twice gives the same result as once.
pub fn clean_text(text: &str) -> String {
    let single_line = NEWLINE_RUNS.replace_all(text, " ");
    let normalized = WHITESPACE_RUNS.replace_all(&single_line, " ");
    let trimmed = normalized.trim();

    // Matches the first occurrence only; the tail has no newlines left
    REFERENCES_TAIL.replace(trimmed, "").trim().to_string()
}
