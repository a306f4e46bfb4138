//! The logic-field catalog: pure computations over message text.
//!
//! Each entry is a stateless function from text to a string value, so
//! identical text always yields identical results and nothing needs cache
//! invalidation when a message is edited. New fields are added by writing a
//! function here and registering it in the resolver's table.

/// Whether the text reads identically reversed.
///
/// Comparison is case-insensitive and considers alphanumeric characters
/// only; text with no alphanumeric characters counts as a palindrome.
pub(crate) fn palindrome(text: &str) -> String {
    let normalised: Vec<char> = text
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    normalised.iter().eq(normalised.iter().rev()).to_string()
}

/// Whether the text is empty or whitespace-only.
pub(crate) fn blank(text: &str) -> String {
    text.trim().is_empty().to_string()
}

/// Whether the text contains letters and none of them are lowercase.
pub(crate) fn shouting(text: &str) -> String {
    let has_letters = text.chars().any(char::is_alphabetic);
    let all_upper = !text.chars().any(char::is_lowercase);
    (has_letters && all_upper).to_string()
}

/// The number of whitespace-separated words, as decimal text.
pub(crate) fn word_count(text: &str) -> String {
    text.split_whitespace().count().to_string()
}
