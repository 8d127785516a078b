//! Labelled reward rows for one pool, plus the totals check.

use serde::Serialize;

use super::allocate::{allocate, RewardSet, ScoreSet};

/// Podium position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::First, Rank::Second, Rank::Third];

    /// Display label used in tables.
    pub fn label(self) -> &'static str {
        match self {
            Rank::First => "🥇 1st",
            Rank::Second => "🥈 2nd",
            Rank::Third => "🥉 3rd",
        }
    }

    /// Ordinal without the medal, used in form labels.
    pub fn ordinal(self) -> &'static str {
        match self {
            Rank::First => "1st",
            Rank::Second => "2nd",
            Rank::Third => "3rd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardRow {
    pub rank: Rank,
    pub label: &'static str,
    pub score: u64,
    pub reward: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardTable {
    pub pool: u64,
    pub rows: [RewardRow; 3],
}

impl RewardTable {
    /// Allocate `pool` over `scores` and label the result.
    pub fn compute(pool: u64, scores: ScoreSet) -> Self {
        let rewards: RewardSet = allocate(pool, scores);
        let scores = scores.as_array();
        let rewards = rewards.as_array();

        let rows = [0, 1, 2].map(|i| {
            let rank = Rank::ALL[i];
            RewardRow {
                rank,
                label: rank.label(),
                score: scores[i],
                reward: rewards[i],
            }
        });

        Self { pool, rows }
    }

    /// Sum of the reward column.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.reward).sum()
    }

    /// Whether the reward column adds up to the pool.
    ///
    /// Only an all-zero score set leaves a non-empty pool unbalanced.
    pub fn is_balanced(&self) -> bool {
        self.total() == self.pool
    }
}
