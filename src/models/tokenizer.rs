use crate::types::Word;

#[derive(Copy, Clone, Debug)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for word frequency counting over arbitrary text docs
    pub fn text_doc_parser() -> Self {
        Self
    }

    /// Whether `c` belongs to a word: alphanumeric or underscore.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Tokenizer function to split the text into individual words.
    ///
    /// Every token is a maximal run of word characters. Whitespace, punctuation
    /// and symbols all act as separators and are discarded, so empty tokens are
    /// never produced. Every token is lowercase.
    pub fn tokenize(self, text: &str) -> Vec<Word> {
        text.to_lowercase()
            .split(|c: char| !Self::is_word_char(c))
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::text_doc_parser()
    }
}
