use word_frequency::{format_report_line, top_words_from_text};

fn main() {
    env_logger::init();

    let text = "the cat sat on the mat. The cat ran.";

    let results = top_words_from_text(text, 3);

    println!("Top words for the given text \"{}\"", text);
    for (word, frequency) in results {
        println!("{}", format_report_line(&word, frequency));
    }
}
