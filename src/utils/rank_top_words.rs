use crate::models::WordFrequencyMap;
use crate::types::RankedWord;

/// Selects the `top_n` most frequent words of a `WordFrequencyMap`.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Words with the same frequency keep the order in which they
///   were first seen. The sort is stable over the map's insertion order.
///
/// ### Parameters:
/// - `word_frequency_map`: The counted words.
/// - `top_n`: Maximum number of entries to return. `0` yields an empty result;
///   a map with fewer than `top_n` entries is returned in full.
///
/// ### Example:
/// ```rust
/// use word_frequency::{rank_top_words, WordFrequencyMap};
///
/// let words = ["a", "a", "a", "b", "b", "b", "b", "b", "c", "d", "d", "d", "d", "d"];
/// let word_frequency_map: WordFrequencyMap = words.iter().collect();
///
/// let ranked = rank_top_words(&word_frequency_map, 2);
/// assert_eq!(ranked, vec![
///     ("b".to_string(), 5),
///     ("d".to_string(), 5),
/// ]);
/// ```
pub fn rank_top_words(word_frequency_map: &WordFrequencyMap, top_n: usize) -> Vec<RankedWord> {
    let mut ranked_words: Vec<RankedWord> = word_frequency_map
        .iter()
        .map(|(word, frequency)| (word.to_owned(), frequency))
        .collect();

    // `sort_by` is stable, so equal frequencies stay in first-seen order
    ranked_words.sort_by(|a, b| b.1.cmp(&a.1));
    ranked_words.truncate(top_n);

    ranked_words
}
