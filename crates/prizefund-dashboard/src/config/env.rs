//! Environment overrides for the interest rate and the default marks.
//!
//! Every value is optional and malformed values fall back silently to the
//! built-in defaults. Lookup is injectable so tests need not touch the
//! process environment.
//!
//! Priority for marks, per pool:
//! 1. `PUBLIC_MARKS="589,550,480"` / `INTERNAL_MARKS=...`
//! 2. `PUBLIC_M1`..`PUBLIC_M3` / `INTERNAL_M1`..`INTERNAL_M3`
//! 3. hard defaults

use prizefund_core::reward::{Rate, ScoreSet};

pub const DEFAULT_PUBLIC_MARKS: ScoreSet = ScoreSet::new(589, 550, 480);
pub const DEFAULT_INTERNAL_MARKS: ScoreSet = ScoreSet::new(585, 545, 480);

/// Startup defaults resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvDefaults {
    /// `INTEREST_RATE`, when set and valid.
    pub interest_rate: Option<Rate>,
    pub public_marks: ScoreSet,
    pub internal_marks: ScoreSet,
}

impl Default for EnvDefaults {
    fn default() -> Self {
        Self {
            interest_rate: None,
            public_marks: DEFAULT_PUBLIC_MARKS,
            internal_marks: DEFAULT_INTERNAL_MARKS,
        }
    }
}

impl EnvDefaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let interest_rate = non_empty(&lookup, "INTEREST_RATE").and_then(|v| {
            let rate = v.parse::<f64>().ok().and_then(Rate::from_fraction);
            if rate.is_none() {
                tracing::debug!(value = %v, "INTEREST_RATE malformed, using config value");
            }
            rate
        });

        Self {
            interest_rate,
            public_marks: marks_from(&lookup, "PUBLIC", DEFAULT_PUBLIC_MARKS),
            internal_marks: marks_from(&lookup, "INTERNAL", DEFAULT_INTERNAL_MARKS),
        }
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn marks_from<F>(lookup: &F, prefix: &str, hard: ScoreSet) -> ScoreSet
where
    F: Fn(&str) -> Option<String>,
{
    let csv_key = format!("{prefix}_MARKS");
    if let Some(v) = non_empty(lookup, &csv_key) {
        match parse_marks_csv(&v) {
            Some(marks) => return marks,
            None => tracing::debug!(key = %csv_key, value = %v, "marks list malformed, trying per-rank keys"),
        }
    }

    let field = |n: u8, default: u64| {
        let key = format!("{prefix}_M{n}");
        match non_empty(lookup, &key) {
            None => default,
            Some(v) => parse_score(&v).unwrap_or_else(|| {
                tracing::debug!(key = %key, value = %v, "score malformed, using default");
                default
            }),
        }
    };

    ScoreSet::new(field(1, hard.first), field(2, hard.second), field(3, hard.third))
}

/// Parse `"589,550,480"`: exactly three numbers, empty segments ignored.
pub fn parse_marks_csv(v: &str) -> Option<ScoreSet> {
    let parts: Vec<&str> = v.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };
    Some(ScoreSet::new(parse_score(a)?, parse_score(b)?, parse_score(c)?))
}

/// Parse a score as a decimal number truncated toward zero (`"589.9"` is 589).
pub fn parse_score(v: &str) -> Option<u64> {
    let f: f64 = v.trim().parse().ok()?;
    if !f.is_finite() || f < 0.0 || f >= u64::MAX as f64 {
        return None;
    }
    Some(f.trunc() as u64)
}
