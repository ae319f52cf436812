pub mod config;
pub use config::WordFrequencyAnalyzerConfig;

pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_frequency_analyzer;
pub use word_frequency_analyzer::WordFrequencyAnalyzer;

pub mod word_frequency_map;
pub use word_frequency_map::WordFrequencyMap;
