mod constants;
pub use constants::{DEFAULT_INPUT_FILE_PATH, DEFAULT_TOP_N, LIST_STATS_NUMBERS};
pub mod models;
pub use models::{
    Error, Tokenizer, WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig, WordFrequencyMap,
};
pub mod types;
mod utils;
pub use types::{RankedWord, Word, WordFrequency, WordIndex, WordRef};
pub use utils::{
    count_word_frequencies, format_error_line, format_list_stats_report, format_report_line,
    load_text, mean, rank_top_words, select_even,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Runs the pure part of the pipeline (tokenize, count, rank) over `text`.
///
/// ```
/// use word_frequency::top_words_from_text;
///
/// let ranked = top_words_from_text("the cat sat on the mat. The cat ran.", 2);
/// assert_eq!(ranked, vec![("the".to_string(), 3), ("cat".to_string(), 2)]);
/// ```
pub fn top_words_from_text(text: &str, top_n: usize) -> Vec<RankedWord> {
    let words = Tokenizer::text_doc_parser().tokenize(text);
    let word_frequency_map = count_word_frequencies(&words);

    rank_top_words(&word_frequency_map, top_n)
}
