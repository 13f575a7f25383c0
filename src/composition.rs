/// Percentage of `G`/`C` (either case) over the full sequence length.
///
/// Ambiguity codes and gaps count toward the length only. Empty input is `0.0`.
pub fn gc_content(sequence: &str) -> f64 {
    let total = sequence.chars().count();
    if total == 0 {
        return 0.0;
    }
    let gc = sequence
        .chars()
        .filter(|base| matches!(base, 'G' | 'C' | 'g' | 'c'))
        .count();
    gc as f64 / total as f64 * 100.0
}
