//! Property-based tests for the string metrics.
//!
//! Levenshtein is checked against a full-table reference implementation;
//! the Jaro family is checked for symmetry, bounds and agreement between the
//! buffered and allocating entry points.

use proptest::prelude::*;
use simetra::{
    jaro, jaro_winkler, jaro_winkler_units, levenshtein, levenshtein_units, Jaro, JaroWinkler,
    Levenshtein,
};

/// Full `(n+1) x (m+1)` Wagner-Fischer table, no shortcuts.
fn levenshtein_reference(a: &[u8], b: &[u8]) -> usize {
    let mut cost = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in cost.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        cost[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            cost[i][j] = if a[i - 1] == b[j - 1] {
                cost[i - 1][j - 1]
            } else {
                1 + cost[i - 1][j].min(cost[i][j - 1]).min(cost[i - 1][j - 1])
            };
        }
    }
    cost[a.len()][b.len()]
}

/// Short strings over a small alphabet, so matches and transpositions are common.
fn arb_word() -> impl Strategy<Value = String> {
    "[abcd]{0,12}"
}

/// Mixed-length printable strings.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // Jaro / Jaro-Winkler
    // ─────────────────────────────────────────────────────────────────────────

    /// Both metrics are exactly symmetric.
    #[test]
    fn jaro_family_symmetric(a in arb_word(), b in arb_word()) {
        let mut j = Jaro::new();
        let mut jw = JaroWinkler::new();
        prop_assert_eq!(j.distance(&a, &b), j.distance(&b, &a));
        prop_assert_eq!(jw.distance(&a, &b), jw.distance(&b, &a));
    }

    /// Scores stay within [0, 1].
    #[test]
    fn jaro_family_bounded(a in arb_text(), b in arb_text()) {
        let j = jaro(&a, &b);
        let jw = jaro_winkler(&a, &b);
        prop_assert!((0.0..=1.0).contains(&j), "jaro out of range: {}", j);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&jw), "jaro-winkler out of range: {}", jw);
    }

    /// A string of two or more units is identical to itself.
    #[test]
    fn jaro_family_identity(a in "[a-z]{2,40}") {
        prop_assert_eq!(jaro(&a, &a), 1.0);
        prop_assert_eq!(jaro_winkler(&a, &a), 1.0);
    }

    /// The prefix bonus never lowers the score.
    #[test]
    fn winkler_at_least_jaro(a in arb_word(), b in arb_word()) {
        prop_assert!(jaro_winkler(&a, &b) >= jaro(&a, &b));
    }

    /// Reused buffers give the same answer as fresh allocations, whatever
    /// the previous call left behind.
    #[test]
    fn buffered_matches_stateless(
        warmup in arb_text(),
        a in arb_word(),
        b in arb_word(),
    ) {
        let mut jw = JaroWinkler::new();
        let _ = jw.distance(&warmup, &warmup);
        prop_assert_eq!(jw.distance(&a, &b), jaro_winkler(&a, &b));
    }

    /// Generic unit entry points agree with the `&str` ones on ASCII.
    #[test]
    fn units_match_str(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(jaro_winkler_units(a.as_bytes(), b.as_bytes()), jaro_winkler(&a, &b));
        prop_assert_eq!(levenshtein_units(a.as_bytes(), b.as_bytes()), levenshtein(&a, &b));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Levenshtein
    // ─────────────────────────────────────────────────────────────────────────

    /// Row-reduced implementation matches the full table.
    #[test]
    fn levenshtein_matches_reference(a in arb_text(), b in arb_text()) {
        prop_assert_eq!(
            levenshtein(&a, &b),
            levenshtein_reference(a.as_bytes(), b.as_bytes())
        );
    }

    /// Distance is symmetric and zero exactly on equal inputs.
    #[test]
    fn levenshtein_symmetric_and_identity(a in arb_word(), b in arb_word()) {
        let lev = Levenshtein::new();
        prop_assert_eq!(lev.distance(&a, &b), lev.distance(&b, &a));
        prop_assert_eq!(lev.distance(&a, &a), 0);
        prop_assert_eq!(lev.distance(&a, &b) == 0, a == b);
    }

    /// Bounded below by the length difference and above by the longer length.
    #[test]
    fn levenshtein_length_bounds(a in arb_text(), b in arb_text()) {
        let d = levenshtein(&a, &b);
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    /// Triangle inequality.
    #[test]
    fn levenshtein_triangle(a in arb_word(), b in arb_word(), c in arb_word()) {
        let ab = levenshtein(&a, &b);
        let bc = levenshtein(&b, &c);
        let ac = levenshtein(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)+d(b,c)={}+{}", ac, ab, bc);
    }

    /// Normalized similarity stays in [0, 1].
    #[test]
    fn levenshtein_normalized_bounded(a in arb_text(), b in arb_text()) {
        let s = Levenshtein::new().normalized_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "normalized similarity out of range: {}", s);
    }
}
