//! Pairwise string similarity in [0, 1].
//!
//! Sørensen–Dice coefficient over character bigrams, computed after
//! case-folding and whitespace removal. Symmetric, deterministic, and pure;
//! used for title, description, and location comparisons.

use std::collections::HashMap;

/// Similarity between two strings in [0, 1].
///
/// 1.0 means identical after case-folding and whitespace removal, 0.0 means
/// no shared bigram structure. Empty input compares as 0 even against itself;
/// the data-model invariant keeps empty fields out of matching, so a 0 here
/// only ever suppresses a score, never inflates one.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for w in a.windows(2) {
        *bigrams.entry((w[0], w[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for w in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(w[0], w[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / (a.len() + b.len() - 2) as f64
}

fn fold(s: &str) -> Vec<char> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("backpack", "backpack"), 1.0);
    }

    #[test]
    fn case_folding_before_comparison() {
        assert_eq!(similarity("MacBook", "macbook"), 1.0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(similarity("a b c", "abc"), 1.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "wallet"), 0.0);
        assert_eq!(similarity("wallet", "  "), 0.0);
    }

    #[test]
    fn single_char_mismatch_scores_zero() {
        assert_eq!(similarity("a", "b"), 0.0);
        assert_eq!(similarity("a", "ab"), 0.0);
    }

    #[test]
    fn known_dice_value() {
        // "night" / "nacht": one shared bigram ("ht") out of 4 + 4.
        assert!((similarity("night", "nacht") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn symmetry() {
        let pairs = [
            ("blue water bottle", "water bottle, blue"),
            ("MacBook Pro 13-inch", "Found MacBook Pro"),
            ("keys", "keychain"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "pair {a:?} / {b:?}");
        }
    }

    #[test]
    fn reflexivity_for_non_empty_strings() {
        for s in ["x", "id card", "University Library, 2nd Floor"] {
            assert_eq!(similarity(s, s), 1.0, "string {s:?}");
        }
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abcd", "wxyz"), 0.0);
    }

    #[test]
    fn bounded_in_unit_interval() {
        let samples = [
            ("silver laptop with stickers", "silver apple laptop"),
            ("gym locker room", "university library"),
            ("umbrella", "umbrellas"),
        ];
        for (a, b) in samples {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a:?} / {b:?} scored {s}");
        }
    }
}
