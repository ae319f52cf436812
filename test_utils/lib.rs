#![allow(dead_code)]

pub mod constants;

use std::fs;
use std::path::Path;
use word_frequency::{format_report_line, WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const TOP_N_PREFIX: &str = "TOP_N:";
const COMMENT_PREFIX: &str = "COMMENT:";

fn is_directive(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(EXPECTED_PREFIX)
        || line.starts_with(TOP_N_PREFIX)
        || line.starts_with(COMMENT_PREFIX)
}

// Helper function to get the expected report lines from the text file
pub fn get_expected_lines(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(EXPECTED_PREFIX)
                .map(|expected| expected.trim().to_string())
        })
        .collect()
}

// Helper function to get the `TOP_N:` override, if the file has one
pub fn get_top_n(raw_text: &str) -> Option<usize> {
    raw_text.lines().find_map(|line| {
        line.trim()
            .strip_prefix(TOP_N_PREFIX)
            .and_then(|top_n| top_n.trim().parse().ok())
    })
}

// Strips directive lines, leaving the text document under test
pub fn get_document_text(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| !is_directive(line))
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Runs the analyzer over a fixture file and returns `(actual, expected)` report lines.
pub fn run_test_for_file(test_file_path: &Path) -> (Vec<String>, Vec<String>) {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let mut config = WordFrequencyAnalyzerConfig::default();
    if let Some(top_n) = get_top_n(&raw_text) {
        config.top_n = top_n;
    }
    let analyzer = WordFrequencyAnalyzer::new(config);

    let actual = analyzer
        .process_text_doc(&get_document_text(&raw_text))
        .iter()
        .map(|(word, frequency)| format_report_line(word, *frequency))
        .collect();

    (actual, get_expected_lines(&raw_text))
}

/// Runs the full pipeline against `file_path` and captures what it writes.
pub fn run_to_string(file_path: &str, top_n: usize) -> String {
    let analyzer = WordFrequencyAnalyzer::new(WordFrequencyAnalyzerConfig {
        file_path: file_path.to_string(),
        top_n,
    });

    let mut output = Vec::new();
    analyzer
        .run(&mut output)
        .expect("Writing to an in-memory buffer should not fail");

    String::from_utf8(output).expect("Report output should be valid UTF-8")
}
