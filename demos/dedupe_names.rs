//! Fuzzy Deduplication of Names
//!
//! Groups near-duplicate customer names with Jaro-Winkler, fanning the work
//! out over threads. Each worker owns its calculator since scoring reuses
//! internal buffers.
//!
//! ```bash
//! cargo run --example dedupe_names --release
//! ```

use simetra::{JaroWinkler, Levenshtein};
use tracing_subscriber::EnvFilter;

const THRESHOLD: f64 = 0.9;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let names = [
        "jonathan smith",
        "jonathon smith",
        "jon smith",
        "martha stewart",
        "marhta stewart",
        "dwayne johnson",
        "duane johnson",
        "kathryn jones",
        "catherine jones",
    ];

    let workers = 3;
    let chunk = names.len().div_ceil(workers);
    let lev = Levenshtein::new();

    let mut matches: Vec<(usize, usize, f64, usize)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                let names = &names;
                let lev = &lev;
                s.spawn(move || {
                    let mut jw = JaroWinkler::new();
                    let mut found = Vec::new();
                    let start = w * chunk;
                    let end = (start + chunk).min(names.len());
                    for i in start..end {
                        for j in (i + 1)..names.len() {
                            let score = jw.distance(names[i], names[j]);
                            if score >= THRESHOLD {
                                found.push((i, j, score, lev.distance(names[i], names[j])));
                            }
                        }
                    }
                    found
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_default())
            .collect()
    });

    matches.sort_by(|a, b| b.2.total_cmp(&a.2));

    println!("pairs with jaro-winkler >= {THRESHOLD}:");
    for (i, j, score, edits) in matches {
        println!(
            "  {:<16} ~ {:<16} jw = {:.4}  edits = {}",
            names[i], names[j], score, edits
        );
    }
}
