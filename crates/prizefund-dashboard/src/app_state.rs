//! Shared application state for the dashboard.
//!
//! - Fund amounts are computed once at startup and never change.
//! - Per-visitor scores live in the session store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use prizefund_core::error::Result;
use prizefund_core::reward::{AnnualFund, RewardTable};

use crate::config::{DashboardConfig, EnvDefaults};
use crate::obs::metrics::DashboardMetrics;
use crate::session::{SessionMarks, SessionStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    sessions: Arc<SessionStore>,
    metrics: Arc<DashboardMetrics>,
}

struct AppStateInner {
    cfg: DashboardConfig,
    defaults: EnvDefaults,
    fund: AnnualFund,
    draining: AtomicBool,
}

/// A session resolved for the current request.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub id: String,
    pub marks: SessionMarks,
    /// True when the request carried no live session and a new one was started.
    pub created: bool,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: DashboardConfig, defaults: EnvDefaults) -> Result<Self> {
        let fund = cfg.fund.split(defaults.interest_rate).compute()?;

        tracing::info!(
            principal = fund.principal,
            interest = %fund.interest_rate,
            total = fund.total,
            public_pool = fund.public_pool,
            internal_pool = fund.internal_pool,
            "annual fund ready"
        );

        let sessions = SessionStore::new(
            Duration::from_secs(cfg.server.session_idle_secs),
            cfg.server.max_sessions,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                defaults,
                fund,
                draining: AtomicBool::new(false),
            }),
            sessions: Arc::new(sessions),
            metrics: Arc::new(DashboardMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &DashboardConfig {
        &self.inner.cfg
    }

    pub fn fund(&self) -> &AnnualFund {
        &self.inner.fund
    }

    pub fn defaults(&self) -> &EnvDefaults {
        &self.inner.defaults
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    /// Scores a new session starts from.
    pub fn fresh_marks(&self) -> SessionMarks {
        let d = self.defaults();
        SessionMarks::new(d.public_marks, d.internal_marks)
    }

    /// The caller's live session, if any. Never starts one.
    pub fn live_session(&self, id: Option<&str>) -> Option<ResolvedSession> {
        let id = id?;
        let marks = self.sessions.get(id)?;
        Some(ResolvedSession { id: id.to_string(), marks, created: false })
    }

    /// Look up the caller's session, starting a new one if it is unknown or expired.
    pub fn resolve_session(&self, id: Option<&str>) -> ResolvedSession {
        if let Some(live) = self.live_session(id) {
            return live;
        }

        let marks = self.fresh_marks();
        let id = self.sessions.create(marks);
        self.metrics.sessions_created.inc(&[]);
        tracing::debug!(session = %id, "session started");
        ResolvedSession { id, marks, created: true }
    }

    /// Scores for a read-only view: the live session's, or the defaults.
    pub fn peek_marks(&self, id: Option<&str>) -> SessionMarks {
        id.and_then(|id| self.sessions.get(id))
            .unwrap_or_else(|| self.fresh_marks())
    }

    /// Reward tables for the given scores, public first.
    pub fn reward_tables(&self, marks: &SessionMarks) -> (RewardTable, RewardTable) {
        let fund = self.fund();
        (
            RewardTable::compute(fund.public_pool, marks.public),
            RewardTable::compute(fund.internal_pool, marks.internal),
        )
    }

    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }

    /// Gauge lines appended to the metrics output.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("prizefund_sessions_active", self.sessions.len() as u64),
            ("prizefund_draining", u64::from(self.is_draining())),
        ]
    }
}
