//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// English stopwords dropped from documents before term weighting.
///
/// Sorted so membership is a binary search. Single letters and digits are
/// included: on their own they carry no topical signal.
const STOPWORDS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "_", "a", "about", "above", "after",
    "again", "all", "also", "am", "an", "and", "another", "any", "are", "as", "at", "b", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "c", "came",
    "can", "cannot", "come", "could", "d", "did", "do", "does", "doing", "during", "e", "each",
    "f", "few", "for", "from", "further", "g", "get", "got", "h", "had", "has", "have", "he",
    "her", "here", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "j", "k", "l", "like", "m", "make", "many", "me", "might", "more", "most", "much",
    "must", "my", "myself", "n", "never", "now", "o", "of", "on", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "p", "q", "r", "s", "said", "same", "see",
    "should", "since", "so", "some", "still", "such", "t", "take", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "u", "under", "until", "up", "v", "very", "w", "was", "way", "we",
    "well", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "with",
    "would", "x", "y", "you", "your", "yours", "yourself", "z",
];

/// Split text into lowercase word tokens.
///
/// A word is a maximal run of alphanumeric characters or `_`. Everything else
/// is a separator, so "30-day" gives `["30", "day"]` and "20% off" gives
/// `["20", "off"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Is this (already lowercased) token an English stopword?
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Does this query have anything a word matcher could latch onto?
pub fn has_word_chars(query: &str) -> bool {
    query.chars().any(|c| c.is_alphanumeric())
}

/// Lowercase a field value (or query) for approximate matching.
///
/// Whitespace is left alone: match positions are measured in characters from
/// the start of the field, so collapsing runs of spaces would shift them.
pub fn fold(value: &str, strip_diacritics: bool) -> Vec<char> {
    if strip_diacritics {
        strip_marks(value).to_lowercase().chars().collect()
    } else {
        value.to_lowercase().chars().collect()
    }
}

/// Field-length norm: `1 / sqrt(space-separated token count)`, to 3 decimals.
///
/// A hit in a three-word title outweighs the same hit in a paragraph. Empty
/// values count as one token so the norm stays finite.
pub fn field_norm(value: &str) -> f64 {
    let tokens = value.split(' ').filter(|t| !t.is_empty()).count().max(1);
    ((1.0 / (tokens as f64).sqrt()) * 1000.0).round() / 1000.0
}

/// Strip diacritics: "café" → "cafe", "harīṣh" → "harish".
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
///
/// Without the feature the text is returned unchanged.
#[cfg(feature = "unicode-normalization")]
pub fn strip_marks(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_marks(value: &str) -> String {
    value.to_string()
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
