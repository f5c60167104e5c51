use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
    static ref SPAN_RE: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// Tokenize text into lowercase word tokens, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Byte offsets `(start, end)` of every whitespace-delimited span in `text`.
pub fn word_spans(text: &str) -> Vec<(usize, usize)> {
    SPAN_RE.find_iter(text).map(|m| (m.start(), m.end())).collect()
}
