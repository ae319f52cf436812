pub mod count_word_frequencies;
pub mod format_report;
pub mod list_stats;
pub mod load_text;
pub mod rank_top_words;

pub use count_word_frequencies::count_word_frequencies;
pub use format_report::{format_error_line, format_report_line};
pub use list_stats::{format_list_stats_report, mean, select_even};
pub use load_text::load_text;
pub use rank_top_words::rank_top_words;
