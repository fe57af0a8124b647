//! Contiguous token windows used as match units.

/// Every contiguous window of `tokens`, by increasing length then start.
///
/// A sequence of `n` tokens yields `n * (n + 1) / 2` windows, so callers
/// should keep queries to short phrases.
pub fn token_windows<T>(tokens: &[T]) -> Vec<&[T]> {
    (1..=tokens.len())
        .flat_map(move |len| tokens.windows(len))
        .collect()
}

/// Number of windows [`token_windows`] yields for `n` tokens.
pub const fn window_count(n: usize) -> usize {
    n * (n + 1) / 2
}
