/// Returns the even numbers of `numbers`, in their original order.
///
/// ```
/// use word_frequency::select_even;
///
/// assert_eq!(select_even(&[1, 26, 2, 11, 14]), vec![26, 2, 14]);
/// ```
pub fn select_even(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Arithmetic mean of `numbers`, defined as `0.0` for an empty slice.
pub fn mean(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }

    // i128 holds the sum of any i64 slice that fits in memory
    let sum: i128 = numbers.iter().map(|&n| i128::from(n)).sum();
    sum as f64 / numbers.len() as f64
}

/// Formats the three report lines printed by the `list-stats` binary.
///
/// ```
/// use word_frequency::format_list_stats_report;
///
/// assert_eq!(
///     format_list_stats_report(&[1, 2, 3, 4]),
///     vec![
///         "Lista original: [1, 2, 3, 4]",
///         "Lista de números pares: [2, 4]",
///         "Promedio de la lista: 2.5",
///     ]
/// );
/// ```
pub fn format_list_stats_report(numbers: &[i64]) -> Vec<String> {
    vec![
        format!("Lista original: {:?}", numbers),
        format!("Lista de números pares: {:?}", select_even(numbers)),
        format!("Promedio de la lista: {}", mean(numbers)),
    ]
}
