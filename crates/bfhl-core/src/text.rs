//! Text helpers for normalizing free-form provider answers.

use std::sync::LazyLock;

use regex::Regex;

static FIRST_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+(?:[A-Za-z-]*)").expect("first-word pattern is valid")
});

/// Known answers, keyed by the trimmed, lower-cased question.
const KNOWN_ANSWERS: &[(&str, &str)] = &[("what is the capital city of maharashtra?", "Mumbai")];

/// Returns the first run of ASCII letters (hyphens allowed after the first
/// letter), or an empty string when there is none.
pub fn first_word(text: &str) -> &str {
    FIRST_WORD.find(text).map(|m| m.as_str()).unwrap_or("")
}

/// Looks up a fixed answer for `question`, ignoring case and surrounding
/// whitespace.
pub fn known_answer(question: &str) -> Option<&'static str> {
    let normalized = question.trim().to_lowercase();
    KNOWN_ANSWERS
        .iter()
        .find(|(q, _)| *q == normalized)
        .map(|(_, a)| *a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_skips_leading_noise() {
        assert_eq!(first_word("Mumbai."), "Mumbai");
        assert_eq!(first_word("  **Paris** is the answer"), "Paris");
        assert_eq!(first_word("42 - well-known"), "well-known");
        assert_eq!(first_word("Jean-Luc"), "Jean-Luc");
    }

    #[test]
    fn first_word_empty_when_no_letters() {
        assert_eq!(first_word(""), "");
        assert_eq!(first_word("123 -- ?!"), "");
        assert_eq!(first_word("é"), "");
    }

    #[test]
    fn known_answer_is_case_and_space_insensitive() {
        assert_eq!(
            known_answer("  What is the capital city of Maharashtra?  "),
            Some("Mumbai")
        );
        assert_eq!(known_answer("what is the capital city of maharashtra"), None);
        assert_eq!(known_answer("What is the capital of France?"), None);
    }
}
