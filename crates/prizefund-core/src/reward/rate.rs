//! Fixed-point rates and integer rounding.

use std::fmt;

use serde::Serialize;

/// Number of parts per million in a whole.
pub const PPM_WHOLE: u32 = 1_000_000;

/// Parts per million in one basis point.
const PPM_PER_BPS: u32 = 100;

/// Integer division rounded to the nearest integer, ties rounded down.
///
/// With ties going down each result is strictly less than half a unit above
/// the exact quotient, so two rounded shares never add up to more than the
/// whole they were taken from. A zero denominator yields zero.
pub fn round_div(num: u128, den: u128) -> u128 {
    let Some(quot) = num.checked_div(den) else {
        return 0;
    };
    let rem = num % den;
    if rem > den - rem {
        quot + 1
    } else {
        quot
    }
}

/// A non-negative fraction in parts per million.
///
/// Config values are whole basis points; environment overrides keep six
/// decimal places so `principal * rate` is rounded only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    pub const ZERO: Rate = Rate(0);
    pub const WHOLE: Rate = Rate(PPM_WHOLE);

    pub const fn from_bps(bps: u32) -> Self {
        Self(bps.saturating_mul(PPM_PER_BPS))
    }

    pub const fn from_ppm(ppm: u32) -> Self {
        Self(ppm)
    }

    pub const fn ppm(self) -> u32 {
        self.0
    }

    /// Convert a decimal fraction (`0.09` for 9%) to the nearest part per million.
    ///
    /// Negative, non-finite, and out-of-range inputs yield `None`.
    pub fn from_fraction(fraction: f64) -> Option<Self> {
        if !fraction.is_finite() || fraction < 0.0 {
            return None;
        }
        let ppm = (fraction * f64::from(PPM_WHOLE)).round();
        if ppm > f64::from(u32::MAX) {
            return None;
        }
        Some(Self(ppm as u32))
    }

    /// The complement `1 - self`, or `None` when the rate exceeds a whole.
    pub fn complement(self) -> Option<Self> {
        PPM_WHOLE.checked_sub(self.0).map(Self)
    }

    /// Apply the rate to an amount, rounded with [`round_div`].
    /// Saturates at `u64::MAX`.
    pub fn of(self, amount: u64) -> u64 {
        let scaled = u128::from(amount) * u128::from(self.0);
        let v = round_div(scaled, u128::from(PPM_WHOLE));
        u64::try_from(v).unwrap_or(u64::MAX)
    }
}

/// Percent form: 9% renders as `9%`, 9.125% as `9.125%`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one percent is 10_000 ppm
        let whole = self.0 / 10_000;
        let frac = self.0 % 10_000;
        if frac == 0 {
            return write!(f, "{whole}%");
        }
        let digits = format!("{frac:04}");
        write!(f, "{whole}.{}%", digits.trim_end_matches('0'))
    }
}
