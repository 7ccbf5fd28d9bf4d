use std::sync::LazyLock;

use regex::Regex;

/// Longest accepted word, in characters
pub const MAX_WORD_LEN: usize = 45;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+(-[a-zA-Z]+)*$").expect("word pattern is a valid regex")
});

/// Check that `word` looks like a single English word: letters,
/// optionally joined by single hyphens, at most [`MAX_WORD_LEN`] long.
pub fn is_valid_word_format(word: &str) -> bool {
    if !WORD_PATTERN.is_match(word) {
        return false;
    }

    word.chars().count() <= MAX_WORD_LEN
}

/// Trim and lowercase text from the host before it is checked
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
