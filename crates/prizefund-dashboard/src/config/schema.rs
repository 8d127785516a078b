use serde::Deserialize;
use prizefund_core::error::{FundError, Result};
use prizefund_core::reward::{FundSplit, Rate};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub fund: FundSection,

    #[serde(default)]
    pub site: SiteSection,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            fund: FundSection::default(),
            site: SiteSection::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FundError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.fund.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,

    /// Upper bound of an editable score.
    #[serde(default = "default_max_score")]
    pub max_score: u64,

    /// Live sessions kept before the least recently seen is evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            session_idle_secs: default_session_idle_secs(),
            max_score: default_max_score(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if !(60..=86_400).contains(&self.session_idle_secs) {
            return Err(FundError::BadRequest(
                "server.session_idle_secs must be between 60 and 86400".into(),
            ));
        }
        if !(1..=100_000).contains(&self.max_score) {
            return Err(FundError::BadRequest(
                "server.max_score must be between 1 and 100000".into(),
            ));
        }
        if !(1..=1_000_000).contains(&self.max_sessions) {
            return Err(FundError::BadRequest(
                "server.max_sessions must be between 1 and 1000000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8501".into()
}
fn default_session_idle_secs() -> u64 {
    3600
}
fn default_max_score() -> u64 {
    1000
}
fn default_max_sessions() -> usize {
    10_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundSection {
    #[serde(default = "default_principal")]
    pub principal: u64,

    #[serde(default = "default_interest_rate_bps")]
    pub interest_rate_bps: u32,

    #[serde(default = "default_public_share_bps")]
    pub public_share_bps: u32,
}

impl Default for FundSection {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            interest_rate_bps: default_interest_rate_bps(),
            public_share_bps: default_public_share_bps(),
        }
    }
}

impl FundSection {
    pub fn validate(&self) -> Result<()> {
        if self.interest_rate_bps > 10_000 {
            return Err(FundError::BadRequest(
                "fund.interest_rate_bps must be between 0 and 10000".into(),
            ));
        }
        if self.public_share_bps > 10_000 {
            return Err(FundError::BadRequest(
                "fund.public_share_bps must be between 0 and 10000".into(),
            ));
        }
        Ok(())
    }

    /// Fund inputs, with an optional interest rate taken from the environment.
    pub fn split(&self, interest_override: Option<Rate>) -> FundSplit {
        FundSplit {
            principal: self.principal,
            interest_rate: interest_override.unwrap_or(Rate::from_bps(self.interest_rate_bps)),
            public_share: Rate::from_bps(self.public_share_bps),
        }
    }
}

fn default_principal() -> u64 {
    100_000
}
fn default_interest_rate_bps() -> u32 {
    900
}
fn default_public_share_bps() -> u32 {
    6_500
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

fn default_title() -> String {
    "Performance Reward Distribution".into()
}
fn default_subtitle() -> String {
    "Tagira High School, Ranital, Bhadrak, Odisha".into()
}
