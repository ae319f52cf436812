pub const DEFAULT_INPUT_FILE_PATH: &str = "input.txt";

pub const DEFAULT_TOP_N: usize = 5;

/// Fixed input for the `list-stats` exercise.
pub const LIST_STATS_NUMBERS: &[i64] = &[1, 26, 2, 44, 8, 11, 19, 13, 14, 23];
