use crate::types::RankedWord;
use crate::utils::{
    count_word_frequencies, format_error_line, format_report_line, load_text, rank_top_words,
};
use crate::{Error, Tokenizer, WordFrequencyAnalyzerConfig};

use log::{debug, info, warn};
use std::io::{self, Write};

pub struct WordFrequencyAnalyzer {
    config: WordFrequencyAnalyzerConfig,
    tokenizer: Tokenizer,
}

impl WordFrequencyAnalyzer {
    /// Creates a new `WordFrequencyAnalyzer` with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Which file to load and how many ranked entries to report.
    pub fn new(config: WordFrequencyAnalyzerConfig) -> Self {
        WordFrequencyAnalyzer {
            config,
            tokenizer: Tokenizer::text_doc_parser(),
        }
    }

    pub fn config(&self) -> &WordFrequencyAnalyzerConfig {
        &self.config
    }

    /// Ranks the words of an already loaded text document.
    pub fn process_text_doc(&self, text: &str) -> Vec<RankedWord> {
        info!("Tokenizing...");
        let words = self.tokenizer.tokenize(text);
        debug!("Produced {} tokens", words.len());

        info!("Counting word frequencies...");
        let word_frequency_map = count_word_frequencies(&words);
        debug!("Counted {} distinct words", word_frequency_map.len());

        info!("Ranking top {} words...", self.config.top_n);
        rank_top_words(&word_frequency_map, self.config.top_n)
    }

    /// Loads the configured file and ranks its words.
    ///
    /// # Errors
    /// Returns `Error::NotFound` or `Error::IoFailure` if the file cannot be read.
    pub fn analyze(&self) -> Result<Vec<RankedWord>, Error> {
        info!("Loading {:?}...", self.config.file_path);
        let text = load_text(&self.config.file_path)?;

        Ok(self.process_text_doc(&text))
    }

    /// Runs the full pipeline, writing one report line per ranked word.
    ///
    /// A loader failure is reported as a single `Error: <message>` line and is
    /// not returned to the caller. The only error surfaced here is a failure to
    /// write to `writer` itself.
    pub fn run<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.analyze() {
            Ok(ranked_words) => {
                for (word, frequency) in &ranked_words {
                    writeln!(writer, "{}", format_report_line(word, *frequency))?;
                }
            }
            Err(err) => {
                warn!("Could not analyze {:?}: {}", err.path(), err);
                writeln!(writer, "{}", format_error_line(&err))?;
            }
        }

        writer.flush()
    }
}

impl Default for WordFrequencyAnalyzer {
    fn default() -> Self {
        Self::new(WordFrequencyAnalyzerConfig::default())
    }
}
