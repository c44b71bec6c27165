//! String, date and category similarity primitives.
//!
//! Every function returns a value in [0.0, 1.0]. Text inputs are compared
//! case-insensitively after trimming.

use chrono::{DateTime, Utc};
use items::ItemCategory;
use strsim::levenshtein;

/// Words shorter than this never count as shared.
const MIN_SHARED_WORD_LEN: usize = 3;

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Number of words in `left` that also appear in `right`.
///
/// Each word of `left` counts at most once; words shorter than three
/// characters are ignored.
fn shared_word_count(left: &[&str], right: &[&str]) -> usize {
    left.iter()
        .filter(|word| word.chars().count() >= MIN_SHARED_WORD_LEN && right.contains(*word))
        .count()
}

/// Whitespace word overlap used for short labels such as item names.
///
/// 1.0 for equal strings, 0.8 when one contains the other, otherwise
/// `0.5 + 0.5 * shared / max(words)` when at least one word is shared.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a == b {
        return 1.0;
    }
    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return 0.8;
    }

    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();
    let shared = shared_word_count(&words_a, &words_b);
    if shared == 0 {
        return 0.0;
    }
    0.5 + 0.5 * shared as f64 / words_a.len().max(words_b.len()) as f64
}

/// Jaccard index over the sets of words, splitting on non-word characters.
pub fn jaccard(a: &str, b: &str) -> f64 {
    use std::collections::HashSet;

    fn words(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    let set_a = words(a);
    let set_b = words(b);
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// `1 - levenshtein / max(len)` over characters. Two empty strings are identical.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

/// Best of word overlap and edit similarity.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    word_overlap(a, b).max(edit_similarity(a, b))
}

/// Best of Jaccard and edit similarity.
pub fn description_similarity(a: &str, b: &str) -> f64 {
    jaccard(a, b).max(edit_similarity(a, b))
}

/// Tiered location match: exact, containment, then shared words.
pub fn location_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a == b {
        return 1.0;
    }
    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return 0.8;
    }

    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();
    let shared = shared_word_count(&words_a, &words_b);
    if shared == 0 {
        return 0.0;
    }
    0.4 + 0.4 * shared as f64 / words_a.len().max(words_b.len()) as f64
}

/// Whole days between two timestamps, ignoring direction.
pub fn day_difference(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_days().abs()
}

/// Tiered proximity for a day difference.
pub fn date_proximity(days: i64) -> f64 {
    match days.abs() {
        0 => 1.0,
        1..=3 => 0.8,
        4..=7 => 0.6,
        8..=14 => 0.4,
        15..=30 => 0.2,
        _ => 0.0,
    }
}

/// Score awarded to distinct categories from the same family.
pub const RELATED_CATEGORY_SCORE: f64 = 0.05;

/// 1.0 for equal categories, [`RELATED_CATEGORY_SCORE`] when both labels
/// contain one of `related_keywords`, otherwise 0.0.
pub fn category_similarity(
    a: &ItemCategory,
    b: &ItemCategory,
    related_keywords: &[String],
) -> f64 {
    if a == b {
        return 1.0;
    }
    let (label_a, label_b) = (a.as_str(), b.as_str());
    let related = related_keywords.iter().any(|keyword| {
        let keyword = keyword.trim().to_uppercase();
        label_a.contains(keyword.as_str()) && label_b.contains(keyword.as_str())
    });
    if related {
        RELATED_CATEGORY_SCORE
    } else {
        0.0
    }
}
