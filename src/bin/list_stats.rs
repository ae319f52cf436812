use word_frequency::{format_list_stats_report, LIST_STATS_NUMBERS};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    for line in format_list_stats_report(LIST_STATS_NUMBERS) {
        println!("{}", line);
    }
}
