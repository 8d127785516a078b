//! Annual fund derivation.
//!
//! The principal is never paid out; only its yearly interest is. That
//! interest is divided between the public pool and the internal pool, with
//! the internal pool taking the residual so both always add up to the fund.

use serde::Serialize;

use crate::error::{FundError, Result};

use super::rate::Rate;

/// Fixed inputs of the fund: principal, yearly interest, and public share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundSplit {
    pub principal: u64,
    pub interest_rate: Rate,
    pub public_share: Rate,
}

impl Default for FundSplit {
    fn default() -> Self {
        Self {
            principal: 100_000,
            interest_rate: Rate::from_bps(900),
            public_share: Rate::from_bps(6_500),
        }
    }
}

/// Derived amounts for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualFund {
    pub principal: u64,
    pub interest_rate: Rate,
    pub public_share: Rate,
    /// Interest earned on the principal for the year.
    pub total: u64,
    pub public_pool: u64,
    pub internal_pool: u64,
}

impl AnnualFund {
    /// Share of the fund that goes to the internal pool.
    pub fn internal_share(&self) -> Rate {
        self.public_share.complement().unwrap_or(Rate::ZERO)
    }
}

impl FundSplit {
    pub fn compute(&self) -> Result<AnnualFund> {
        if self.public_share > Rate::WHOLE {
            return Err(FundError::BadRequest(format!(
                "public share {} exceeds 100%",
                self.public_share
            )));
        }

        let total = self.interest_rate.of(self.principal);
        let public_pool = self.public_share.of(total);
        let internal_pool = total - public_pool;

        tracing::trace!(total, public_pool, internal_pool, "annual fund computed");

        Ok(AnnualFund {
            principal: self.principal,
            interest_rate: self.interest_rate,
            public_share: self.public_share,
            total,
            public_pool,
            internal_pool,
        })
    }
}
