use log::error;
use std::io;
use word_frequency::WordFrequencyAnalyzer;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let analyzer = WordFrequencyAnalyzer::default();

    // Loader failures are reported on stdout by `run`; only a broken stdout ends up here
    let stdout = io::stdout();
    if let Err(e) = analyzer.run(&mut stdout.lock()) {
        error!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}
