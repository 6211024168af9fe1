//! String similarity primitive shared by the name-based strategies.

/// Minimum token length counted by the word-overlap signal.
const MIN_WORD_LEN: usize = 3;

const WORD_WEIGHT: f64 = 0.7;
const CHAR_WEIGHT: f64 = 0.3;

/// Similarity of `a` to `b` in `[0.0, 1.0]`.
///
/// Not symmetric: `a` containing `b` scores 0.9, `b` containing `a` scores 0.85.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.contains(&b) {
        return 0.9;
    }
    if b.contains(&a) {
        return 0.85;
    }

    let score = (word_overlap(&a, &b) * WORD_WEIGHT).max(char_overlap(&a, &b) * CHAR_WEIGHT);
    debug_assert!((0.0..=1.0).contains(&score), "similarity {score} out of range [0.0, 1.0]");
    score
}

/// Fraction of words (>= 3 chars) in `a` that equal or contain / are contained
/// by some word of `b`, over the larger word count.
fn word_overlap(a: &str, b: &str) -> f64 {
    let words_a: Vec<&str> = significant_words(a);
    let words_b: Vec<&str> = significant_words(b);

    let denominator = words_a.len().max(words_b.len());
    if denominator == 0 {
        return 0.0;
    }

    let matched = words_a
        .iter()
        .filter(|wa| {
            words_b
                .iter()
                .any(|wb| wa == &wb || wa.contains(wb) || wb.contains(*wa))
        })
        .count();

    matched as f64 / denominator as f64
}

fn significant_words(s: &str) -> Vec<&str> {
    s.split_whitespace()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .collect()
}

/// Identical characters at identical positions over the shared prefix length,
/// divided by the longer length.
fn char_overlap(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();

    let longer = chars_a.len().max(chars_b.len());
    if longer == 0 {
        return 0.0;
    }

    let same = chars_a
        .iter()
        .zip(chars_b.iter())
        .filter(|(x, y)| x == y)
        .count();

    same as f64 / longer as f64
}
