use crate::models::WordFrequencyMap;
use crate::types::Word;

/// Counts the frequency of words in the given list.
///
/// # Arguments
/// * `words` - A slice of words to analyze.
///
/// # Returns
/// * A `WordFrequencyMap` where each distinct word maps to the number of
///   times it appears in `words`. The sum of all counts equals `words.len()`.
///
/// # Example
/// ```
/// use word_frequency::count_word_frequencies;
///
/// let words = vec!["a".to_string(), "b".to_string(), "a".to_string()];
/// let frequencies = count_word_frequencies(&words);
/// assert_eq!(frequencies.get("a"), Some(2));
/// assert_eq!(frequencies.get("b"), Some(1));
/// assert_eq!(frequencies.total_count(), 3);
/// ```
pub fn count_word_frequencies(words: &[Word]) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();

    for word in words {
        frequencies.upsert_word(word);
    }

    frequencies
}
