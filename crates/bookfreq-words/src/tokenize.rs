use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Split `text` into raw tokens.
///
/// Every run of whitespace (spaces, tabs, `\r\n`, other Unicode newlines)
/// acts as a single delimiter. Tokens keep their punctuation and case.
/// Leading or trailing whitespace does not produce empty tokens.
///
/// ```
/// use bookfreq_words::tokenize;
///
/// assert_eq!(tokenize("a\r\n  b"), vec!["a", "b"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    WHITESPACE_RUN
        .split(text)
        .filter(|token| !token.is_empty())
        .collect()
}
