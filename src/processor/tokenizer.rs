//! Line tokenization
//!
//! Splits a line of text into word tokens: maximal runs of letters, digits,
//! and underscore. Everything else (whitespace, punctuation, apostrophes,
//! hyphens, slashes) is a delimiter. Tokenization never fails; lines with no
//! word characters simply yield nothing.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Iterate over the word tokens of a line.
///
/// Tokens are emitted in their original case; case folding is applied by the
/// frequency table when tokens are counted.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(line).map(|m| m.as_str())
}
