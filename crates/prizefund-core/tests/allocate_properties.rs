//! Allocator properties over bounded grids.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prizefund_core::reward::{allocate, round_div, ScoreSet};

const POOLS: [u64; 8] = [0, 1, 2, 3, 10, 999, 5850, 3150];

/// |reward - pool * score / total| <= 1, checked without division.
fn within_one_unit(reward: u64, pool: u64, score: u64, total: u128) -> bool {
    let lhs = u128::from(reward) * total;
    let exact = u128::from(pool) * u128::from(score);
    lhs.abs_diff(exact) <= total
}

#[test]
fn conserves_pool_and_stays_near_exact_share() {
    for pool in POOLS {
        for a in 0..12u64 {
            for b in 0..12u64 {
                for c in 0..12u64 {
                    let scores = ScoreSet::new(a, b, c);
                    let r = allocate(pool, scores);
                    let total = scores.total();

                    if total == 0 {
                        assert_eq!(r.as_array(), [0, 0, 0]);
                        continue;
                    }

                    assert_eq!(r.total(), u128::from(pool), "pool={pool} scores={scores:?}");
                    for (reward, score) in r.as_array().into_iter().zip(scores.as_array()) {
                        assert!(
                            within_one_unit(reward, pool, score, total),
                            "pool={pool} scores={scores:?} rewards={r:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn zero_scores_allocate_nothing_for_any_pool() {
    for pool in [0, 1, 7, 9000, u64::MAX] {
        assert_eq!(allocate(pool, ScoreSet::default()).as_array(), [0, 0, 0]);
    }
}

#[test]
fn raising_first_score_never_lowers_first_reward() {
    for pool in POOLS {
        for b in 0..8u64 {
            for c in 0..8u64 {
                let mut prev = 0;
                for a in 0..40u64 {
                    let r = allocate(pool, ScoreSet::new(a, b, c)).first;
                    assert!(r >= prev, "pool={pool} a={a} b={b} c={c}");
                    prev = r;
                }
            }
        }
    }
}

#[test]
fn large_values_do_not_overflow() {
    let r = allocate(u64::MAX, ScoreSet::new(u64::MAX, u64::MAX, 1));
    assert_eq!(r.total(), u128::from(u64::MAX));

    let r = allocate(u64::MAX, ScoreSet::new(u64::MAX, 0, 0));
    assert_eq!(r.as_array(), [u64::MAX, 0, 0]);
}

#[test]
fn default_marks_example() {
    let r = allocate(5850, ScoreSet::new(589, 550, 480));
    assert_eq!(r.total(), 5850);
    assert_eq!((r.first, r.second, r.third), (2128, 1987, 1735));
}

#[test]
fn round_div_ties_go_down() {
    assert_eq!(round_div(5, 2), 2);
    assert_eq!(round_div(7, 2), 3);
    assert_eq!(round_div(8, 3), 3);
    assert_eq!(round_div(7, 3), 2);
    assert_eq!(round_div(10, 0), 0);
}
