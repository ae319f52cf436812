#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequencyAnalyzerConfig {
    /// Which text resource to load, relative to the working directory.
    pub file_path: String,
    /// How many ranked entries to report.
    pub top_n: usize,
}

impl Default for WordFrequencyAnalyzerConfig {
    fn default() -> Self {
        Self {
            file_path: crate::constants::DEFAULT_INPUT_FILE_PATH.to_string(),
            top_n: crate::constants::DEFAULT_TOP_N,
        }
    }
}
