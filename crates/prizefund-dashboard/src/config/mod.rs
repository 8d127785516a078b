//! Dashboard config loader (strict YAML) and environment defaults.

pub mod env;
pub mod schema;

use std::fs;
use std::io::ErrorKind;

use prizefund_core::error::{FundError, Result};

pub use env::EnvDefaults;
pub use schema::{DashboardConfig, FundSection, ServerSection, SiteSection};

/// Config path used when `PRIZEFUND_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "prizefund.yaml";

pub fn load_from_file(path: &str) -> Result<DashboardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FundError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DashboardConfig> {
    let cfg: DashboardConfig = serde_yaml::from_str(s)
        .map_err(|e| FundError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `PRIZEFUND_CONFIG` if set, else `prizefund.yaml` if present, else
/// built-in defaults. An explicitly named file must exist.
pub fn load() -> Result<DashboardConfig> {
    if let Ok(path) = std::env::var("PRIZEFUND_CONFIG") {
        return load_from_file(&path);
    }

    match fs::read_to_string(DEFAULT_CONFIG_PATH) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            Ok(DashboardConfig::default())
        }
        Err(e) => Err(FundError::Internal(format!("read config failed: {e}"))),
    }
}
