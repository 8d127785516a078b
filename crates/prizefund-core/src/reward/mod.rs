//! Reward arithmetic.
//!
//! - `rate`: fixed-point rates and the shared rounding division.
//! - `allocate`: proportional split of one pool among three ranked scores.
//! - `split`: annual fund derivation and its public/internal pools.
//! - `table`: labelled reward rows and the totals check.
//!
//! Every derived amount that must add up to a known total is computed by
//! residual assignment: all parts but the last are rounded, the last one is
//! whatever is left.

pub mod allocate;
pub mod rate;
pub mod split;
pub mod table;

pub use allocate::{allocate, RewardSet, ScoreSet};
pub use rate::{round_div, Rate};
pub use split::{AnnualFund, FundSplit};
pub use table::{Rank, RewardRow, RewardTable};
