#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::constants::TEST_FILES_DIRECTORY;

use std::fs::read_dir;
use test_utils::run_test_for_file;
use word_frequency::{
    count_word_frequencies, rank_top_words, top_words_from_text, Tokenizer, WordFrequencyMap,
};

#[cfg(test)]
mod counter_tests {
    use super::*;

    #[test]
    fn test_count_word_frequencies() {
        let words: Vec<String> = vec!["a".into(), "b".into(), "a".into()];
        let frequencies = count_word_frequencies(&words);

        assert_eq!(frequencies.len(), 2);
        assert_eq!(frequencies.get("a"), Some(2));
        assert_eq!(frequencies.get("b"), Some(1));
        assert_eq!(frequencies.get("c"), None);
        assert_eq!(frequencies.total_count(), 3);
    }

    #[test]
    fn test_count_of_empty_sequence_is_empty() {
        let frequencies = count_word_frequencies(&[]);

        assert!(frequencies.is_empty());
        assert_eq!(frequencies.total_count(), 0);
    }

    #[test]
    fn test_total_count_matches_token_count() {
        let texts = [
            "",
            "one",
            "the cat sat on the mat. The cat ran.",
            "a a a a b b c, d! e? a",
            "Ñandú ñandú café",
        ];

        for text in texts {
            let words = Tokenizer::text_doc_parser().tokenize(text);
            let frequencies = count_word_frequencies(&words);
            assert_eq!(
                frequencies.total_count(),
                words.len(),
                "Count mismatch for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_upsert_word_returns_updated_count() {
        let mut frequencies = WordFrequencyMap::new();

        assert_eq!(frequencies.upsert_word("cat"), 1);
        assert_eq!(frequencies.upsert_word("dog"), 1);
        assert_eq!(frequencies.upsert_word("cat"), 2);
        assert_eq!(frequencies.get("cat"), Some(2));
    }

    #[test]
    fn test_iter_preserves_first_seen_order() {
        let frequencies: WordFrequencyMap = ["c", "a", "c", "b"].iter().collect();

        let entries: Vec<_> = frequencies.iter().collect();
        assert_eq!(entries, vec![("c", 2), ("a", 1), ("b", 1)]);
    }
}

#[cfg(test)]
mod ranker_tests {
    use super::*;

    fn build_map(counts: &[(&str, usize)]) -> WordFrequencyMap {
        let mut word_frequency_map = WordFrequencyMap::new();
        for (word, count) in counts {
            for _ in 0..*count {
                word_frequency_map.upsert_word(word);
            }
        }
        word_frequency_map
    }

    #[test]
    fn test_rank_top_two_with_tie() {
        let word_frequency_map = build_map(&[("a", 3), ("b", 5), ("c", 1), ("d", 5)]);

        let ranked = rank_top_words(&word_frequency_map, 2);

        let counts: Vec<usize> = ranked.iter().map(|(_, count)| *count).collect();
        assert_eq!(counts, vec![5, 5]);

        let words: Vec<&str> = ranked.iter().map(|(word, _)| word.as_str()).collect();
        assert_eq!(words, vec!["b", "d"]);
    }

    #[test]
    fn test_rank_zero_is_empty() {
        let word_frequency_map = build_map(&[("a", 3), ("b", 5)]);

        assert!(rank_top_words(&word_frequency_map, 0).is_empty());
    }

    #[test]
    fn test_rank_more_than_available_returns_all() {
        let word_frequency_map = build_map(&[("a", 1), ("b", 2), ("c", 3)]);

        let ranked = rank_top_words(&word_frequency_map, 10);
        assert_eq!(
            ranked,
            vec![
                ("c".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_rank_empty_map() {
        assert!(rank_top_words(&WordFrequencyMap::new(), 5).is_empty());
    }

    #[test]
    fn test_rank_is_sorted_descending() {
        let word_frequency_map = build_map(&[("x", 2), ("y", 7), ("z", 4), ("w", 4), ("v", 9)]);

        let ranked = rank_top_words(&word_frequency_map, 5);
        assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_end_to_end_the_cat() {
        let ranked = top_words_from_text("the cat sat on the mat. The cat ran.", 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], ("the".to_string(), 3));
        assert_eq!(ranked[1], ("cat".to_string(), 2));
        assert_eq!(ranked[2].1, 1);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let text = "b a b a c d d d, e! f? b";

        let first = top_words_from_text(text, 4);
        for _ in 0..10 {
            assert_eq!(top_words_from_text(text, 4), first);
        }
    }

    #[test]
    fn test_fixture_files() {
        let files = read_dir(TEST_FILES_DIRECTORY)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        assert!(!files.is_empty(), "No test files found");

        for file in files {
            let file_path = file.path();
            if !file_path.is_file() {
                continue;
            }

            let (actual, expected) = run_test_for_file(&file_path);
            assert_eq!(
                actual, expected,
                "{:?} - Expected: {:?}, but got: {:?}",
                file_path, expected, actual
            );
        }
    }
}
