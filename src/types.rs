// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word as an owned `String`. Words are the tokens produced by the `Tokenizer`:
/// lowercase, punctuation-free runs of alphanumeric (or `_`) characters.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// A ranked `(Word, WordFrequency)` pair, as produced by `rank_top_words`.
pub type RankedWord = (Word, WordFrequency);

/// Position of a word in the first-seen order of a `WordFrequencyMap`.
pub type WordIndex = usize;
