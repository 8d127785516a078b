//! Allocation vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prizefund_core::reward::{allocate, ScoreSet};

mod vector_loader;

#[test]
fn allocation_vectors() {
    let files = [
        "public_defaults.json",
        "internal_defaults.json",
        "zero_scores.json",
        "ties_round_down.json",
        "tie_with_zero_third.json",
        "ascending_scores.json",
        "only_third.json",
    ];

    for f in files {
        let v = vector_loader::load(f);
        let [a, b, c] = v.scores;
        let got = allocate(v.pool, ScoreSet::new(a, b, c));

        assert_eq!(got.as_array(), v.expect, "vector={}", v.description);
        if a + b + c > 0 {
            assert_eq!(got.total(), u128::from(v.pool), "vector={}", v.description);
        }
    }
}
