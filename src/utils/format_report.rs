use crate::types::{WordFrequency, WordRef};
use crate::Error;

/// Formats a single ranked entry.
///
/// ```
/// use word_frequency::format_report_line;
///
/// assert_eq!(format_report_line("the", 3), "Palabra: 'the' | Frecuencia: 3");
/// ```
pub fn format_report_line(word: &WordRef, frequency: WordFrequency) -> String {
    format!("Palabra: '{}' | Frecuencia: {}", word, frequency)
}

/// Formats the single line reported in place of the ranking when loading fails.
pub fn format_error_line(error: &Error) -> String {
    format!("Error: {}", error)
}
