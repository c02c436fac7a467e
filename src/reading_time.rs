//! Reading-time estimation for articles.
//!
//! Uses the common 200 words-per-minute heuristic: count whitespace-separated
//! tokens, divide by the rate, round up. The floor of 1 minute keeps the
//! badge sensible for stub articles — "0 min read" reads as broken.

const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes for a flattened article text.
///
/// Splits on whitespace runs, so punctuation sticks to its word and blank
/// input counts zero words. Always returns at least 1.
pub fn estimate(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Render a reading-time estimate for display: `"7 min read"`.
pub fn format_reading_time(minutes: usize) -> String {
    format!("{minutes} min read")
}
