//! Bigram Dice-coefficient string similarity.

use std::collections::HashMap;

/// Scores the similarity of two strings in `[0.0, 1.0]`.
///
/// Both inputs are normalized (lowercased, runs of non-alphanumeric
/// characters collapsed to single spaces, trimmed) before character bigrams
/// are built over the whitespace-stripped form. The score is the Dice
/// coefficient over bigram multisets: each matched bigram instance is
/// consumed once, so repeated bigrams only count as often as they appear on
/// both sides.
///
/// A whitespace-stripped input shorter than two characters contributes the
/// whole string as its own single pseudo-bigram, so short equal strings
/// still score `1.0`. Two empty inputs score `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "Dice coefficient is inherently a floating-point ratio; bigram counts are far below f64 precision limits"
)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let bigrams_a = bigrams(a);
    let bigrams_b = bigrams(b);
    if bigrams_a.is_empty() || bigrams_b.is_empty() {
        return 0.0;
    }

    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for bigram in &bigrams_a {
        *remaining.entry(bigram.as_str()).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for bigram in &bigrams_b {
        if let Some(count) = remaining.get_mut(bigram.as_str())
            && *count > 0
        {
            *count -= 1;
            shared += 1;
        }
    }

    (2 * shared) as f64 / (bigrams_a.len() + bigrams_b.len()) as f64
}

/// Lowercases, collapses non-alphanumeric runs to single spaces, and trims.
fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Builds the bigram multiset over the normalized, whitespace-stripped input.
fn bigrams(input: &str) -> Vec<String> {
    let stripped: Vec<char> = normalize(input)
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    match stripped.len() {
        0 => Vec::new(),
        1 => vec![stripped.iter().collect()],
        _ => stripped
            .windows(2)
            .map(|pair| pair.iter().collect())
            .collect(),
    }
}
