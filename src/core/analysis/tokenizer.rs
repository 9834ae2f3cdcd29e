//! Space-separated word splitting.

/// The only character that separates words. Tabs and other
/// whitespace stay inside a word.
pub const WORD_SEPARATOR: char = ' ';

/// Split text into words, left to right.
///
/// Runs of separators are skipped and no empty word is ever
/// produced, so empty or all-space input yields nothing.
///
/// # Examples
///
/// ```
/// use docsearch::core::analysis::split_into_words;
///
/// let words: Vec<&str> = split_into_words("  white cat  and fancy ").collect();
/// assert_eq!(words, vec!["white", "cat", "and", "fancy"]);
/// ```
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(WORD_SEPARATOR).filter(|word| !word.is_empty())
}
