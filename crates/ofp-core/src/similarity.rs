// Rust guideline compliant 2026-10-13

//! String similarity scores in the 0-100 range.
//!
//! `ratio` is the Indel-normalized similarity `2 * LCS / (|a| + |b|)`.
//! `partial_ratio` is the best `ratio` between the shorter string and any
//! same-length window of the longer one, including the partial windows
//! hanging off either end. Strings are compared as Unicode scalar values
//! and scores are rounded half-to-even. An empty input on either side
//! scores 0.

/// Indel similarity of two strings, 0-100.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    ratio_chars(&a, &b)
}

/// Best substring-alignment similarity of two strings, 0-100.
///
/// Returns 100 when the shorter string occurs verbatim in the longer one.
/// Scores 0 when either string is empty.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (needle, haystack) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let mut best = best_window(needle, haystack);

    // Equal lengths have no natural needle; try both directions.
    if best < 100 && needle.len() == haystack.len() {
        best = best.max(best_window(haystack, needle));
    }

    best
}

fn best_window(needle: &[char], haystack: &[char]) -> u8 {
    let len = needle.len();
    let mut best = 0;

    let prefixes = (1..len).map(|end| &haystack[..end]);
    let windows = haystack.windows(len);
    let suffixes = (haystack.len() - len + 1..haystack.len()).map(|start| &haystack[start..]);

    for window in prefixes.chain(windows).chain(suffixes) {
        best = best.max(ratio_chars(needle, window));
        if best == 100 {
            break;
        }
    }

    best
}

fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let common = lcs_len(a, b);
    round_half_even(200 * common, total)
}

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
fn round_half_even(numerator: usize, denominator: usize) -> u8 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    let rounded = if twice_remainder > denominator
        || (twice_remainder == denominator && quotient % 2 == 1)
    {
        quotient + 1
    } else {
        quotient
    };
    // ratio is at most 2 * min / (min + max) <= 1
    rounded.min(100) as u8
}
