use crate::types::{Word, WordFrequency, WordIndex, WordRef};
use std::collections::HashMap;

/// Mapping of distinct words to their occurrence counts.
///
/// Keys are unique. Entries are kept in the order each word was first
/// upserted, which gives ranking a fixed tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyMap {
    word_map: HashMap<Word, WordIndex>,
    entries: Vec<(Word, WordFrequency)>,
}

impl WordFrequencyMap {
    /// Creates a new, empty WordFrequencyMap
    pub fn new() -> Self {
        WordFrequencyMap {
            word_map: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Increments the count for a word, inserting it with a count of 1 if absent,
    /// and returns the updated count
    pub fn upsert_word(&mut self, word: &WordRef) -> WordFrequency {
        if let Some(&index) = self.word_map.get(word) {
            let entry = &mut self.entries[index];
            entry.1 += 1;
            entry.1
        } else {
            let index = self.entries.len();
            self.word_map.insert(word.to_string(), index);
            self.entries.push((word.to_string(), 1));
            1
        }
    }

    /// Gets the count for a word, or None if the word is not present
    pub fn get(&self, word: &WordRef) -> Option<WordFrequency> {
        self.word_map
            .get(word)
            .map(|&index| self.entries[index].1)
    }

    /// Gets the total number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of tokens that were counted.
    pub fn total_count(&self) -> WordFrequency {
        self.entries.iter().map(|(_, frequency)| frequency).sum()
    }

    /// Iterates `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&WordRef, WordFrequency)> {
        self.entries
            .iter()
            .map(|(word, frequency)| (word.as_str(), *frequency))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordFrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut word_frequency_map = WordFrequencyMap::new();
        for word in words {
            word_frequency_map.upsert_word(word.as_ref());
        }
        word_frequency_map
    }
}
