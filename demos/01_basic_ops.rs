//! Basic String Metrics
//!
//! The minimal example: Jaro, Jaro-Winkler, Levenshtein.
//!
//! # Metric Selection Guide
//!
//! | Metric       | Range        | Use Case                                  |
//! |--------------|--------------|-------------------------------------------|
//! | Jaro         | [0, 1]       | Short strings, names, transposed letters  |
//! | Jaro-Winkler | [0, 1]       | Names where the start is most reliable    |
//! | Levenshtein  | [0, max len] | Typos, edit budgets, spell checking       |
//!
//! ```bash
//! RUST_LOG=simetra=trace cargo run --example 01_basic_ops
//! ```

use simetra::{Jaro, JaroWinkler, Levenshtein, MAX_SEQUENCE_LEN};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut jaro = Jaro::new();
    let mut jw = JaroWinkler::new();
    let lev = Levenshtein::new();

    let pairs = [
        ("martha", "marhta"),
        ("dixon", "dicksonx"),
        ("jones", "johnson"),
        ("kitten", "sitting"),
        ("foo", "bar"),
    ];

    println!("{:<10} {:<10} {:>8} {:>8} {:>5}", "s1", "s2", "jaro", "jw", "lev");
    for (a, b) in pairs {
        println!(
            "{:<10} {:<10} {:>8.4} {:>8.4} {:>5}",
            a,
            b,
            jaro.distance(a, b),
            jw.distance(a, b),
            lev.distance(a, b)
        );
    }

    // Transposition "rh" -> "hr" costs Jaro a little and Levenshtein two edits.
    assert_eq!(lev.distance("martha", "marhta"), 2);
    assert_eq!(jw.distance("martha", "marhta"), 0.9611111111111111);

    // Inputs beyond the buffer size are cut; the scored variant says so.
    let long = "a".repeat(MAX_SEQUENCE_LEN + 100);
    let score = jw.distance_scored(&long, "aaa");
    println!(
        "\nlong input: score = {:.4}, truncated = {}",
        score.value, score.truncated
    );
}
