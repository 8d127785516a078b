//! Proportional reward allocator.
//!
//! `allocate(pool, scores)` splits `pool` among three ranked entries in
//! proportion to their scores. The first two shares are rounded to the
//! nearest unit (ties down); the third is the residual, so the three payouts
//! always sum to `pool` exactly.

use serde::{Deserialize, Serialize};

use super::rate::round_div;

/// Scores of the 1st, 2nd, and 3rd ranked entries.
///
/// No ordering is enforced: the "1st" score may be lower than the "2nd".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSet {
    pub first: u64,
    pub second: u64,
    pub third: u64,
}

impl ScoreSet {
    pub const fn new(first: u64, second: u64, third: u64) -> Self {
        Self { first, second, third }
    }

    pub fn as_array(&self) -> [u64; 3] {
        [self.first, self.second, self.third]
    }

    /// Sum of the three scores (128-bit so it cannot overflow).
    pub fn total(&self) -> u128 {
        u128::from(self.first) + u128::from(self.second) + u128::from(self.third)
    }
}

impl From<(u64, u64, u64)> for ScoreSet {
    fn from((first, second, third): (u64, u64, u64)) -> Self {
        Self::new(first, second, third)
    }
}

/// Payouts of the 1st, 2nd, and 3rd ranked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RewardSet {
    pub first: u64,
    pub second: u64,
    pub third: u64,
}

impl RewardSet {
    pub fn as_array(&self) -> [u64; 3] {
        [self.first, self.second, self.third]
    }

    pub fn total(&self) -> u128 {
        u128::from(self.first) + u128::from(self.second) + u128::from(self.third)
    }
}

/// Allocate `pool` proportionally to `scores`.
///
/// All-zero scores produce an all-zero allocation.
pub fn allocate(pool: u64, scores: ScoreSet) -> RewardSet {
    let total = scores.total();
    if total == 0 {
        return RewardSet::default();
    }

    let share = |score: u64| -> u64 {
        let v = round_div(u128::from(pool) * u128::from(score), total);
        // score <= total, so the share never exceeds pool
        u64::try_from(v).unwrap_or(pool)
    };

    let first = share(scores.first);
    let second = share(scores.second);
    // ties round down, so first + second <= pool
    let third = pool.saturating_sub(first).saturating_sub(second);

    RewardSet { first, second, third }
}
