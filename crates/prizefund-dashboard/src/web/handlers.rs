//! Dashboard handlers.
//!
//! Responsibilities:
//! - Resolve the caller's session from the cookie (page and toggle start one when missing)
//! - Render the page or the JSON view from the session's scores
//! - Apply the editing toggle and score edits, then redirect back to `/`

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use prizefund_core::error::{FundError, Result};
use prizefund_core::reward::{AnnualFund, RewardTable, ScoreSet};

use crate::app_state::{AppState, ResolvedSession};
use crate::web::cookie;
use crate::web::error::ApiError;
use crate::web::page::{self, DashboardView};

// --------------------
// Forms
// --------------------
#[derive(Debug, Deserialize)]
pub struct EditingForm {
    /// Present (`on`) when the checkbox is ticked, absent otherwise.
    #[serde(default)]
    pub enabled: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarksForm {
    pub public_m1: u64,
    pub public_m2: u64,
    pub public_m3: u64,
    pub internal_m1: u64,
    pub internal_m2: u64,
    pub internal_m3: u64,
}

impl MarksForm {
    /// Public and internal score sets, each score checked against `max_score`.
    pub fn validate(&self, max_score: u64) -> Result<(ScoreSet, ScoreSet)> {
        let fields = [
            ("public_m1", self.public_m1),
            ("public_m2", self.public_m2),
            ("public_m3", self.public_m3),
            ("internal_m1", self.internal_m1),
            ("internal_m2", self.internal_m2),
            ("internal_m3", self.internal_m3),
        ];
        for (name, v) in fields {
            if v > max_score {
                return Err(FundError::BadRequest(format!(
                    "{name} must be between 0 and {max_score}"
                )));
            }
        }
        Ok((
            ScoreSet::new(self.public_m1, self.public_m2, self.public_m3),
            ScoreSet::new(self.internal_m1, self.internal_m2, self.internal_m3),
        ))
    }
}

// --------------------
// JSON view
// --------------------
#[derive(Debug, Serialize)]
pub struct TotalsCheck {
    pub public_total: u64,
    pub public_expected: u64,
    pub internal_total: u64,
    pub internal_expected: u64,
    pub grand_total: u64,
    pub grand_expected: u64,
    pub balanced: bool,
}

impl TotalsCheck {
    pub fn new(fund: &AnnualFund, public: &RewardTable, internal: &RewardTable) -> Self {
        let public_total = public.total();
        let internal_total = internal.total();
        let grand_total = public_total + internal_total;
        Self {
            public_total,
            public_expected: fund.public_pool,
            internal_total,
            internal_expected: fund.internal_pool,
            grand_total,
            grand_expected: fund.total,
            balanced: grand_total == fund.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RewardsView {
    pub fund: AnnualFund,
    pub editing: bool,
    pub public: RewardTable,
    pub internal: RewardTable,
    pub totals: TotalsCheck,
}

// --------------------
// Helpers
// --------------------
fn with_cookie(mut resp: Response, value: &str) -> Result<Response> {
    let v = HeaderValue::from_str(value)
        .map_err(|e| FundError::Internal(format!("bad cookie header: {e}")))?;
    resp.headers_mut().append(header::SET_COOKIE, v);
    Ok(resp)
}

/// Attach the session cookie when the session was just started.
fn finish(resp: Response, session: &ResolvedSession) -> Result<Response> {
    if session.created {
        with_cookie(resp, &cookie::set_cookie(&session.id))
    } else {
        Ok(resp)
    }
}

// --------------------
// Entry points
// --------------------
pub async fn dashboard(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> std::result::Result<Response, ApiError> {
    let sid = cookie::session_id(&headers);
    let session = app.resolve_session(sid.as_deref());
    let (public, internal) = app.reward_tables(&session.marks);

    let body = page::render(&DashboardView {
        site: &app.cfg().site,
        fund: app.fund(),
        marks: session.marks,
        max_score: app.cfg().server.max_score,
        public: &public,
        internal: &internal,
    });
    app.metrics().page_renders.inc(&[("view", "html")]);

    Ok(finish(Html(body).into_response(), &session)?)
}

pub async fn rewards_json(State(app): State<AppState>, headers: HeaderMap) -> Json<RewardsView> {
    let sid = cookie::session_id(&headers);
    let marks = app.peek_marks(sid.as_deref());
    let (public, internal) = app.reward_tables(&marks);
    let fund = *app.fund();
    app.metrics().page_renders.inc(&[("view", "json")]);

    Json(RewardsView {
        totals: TotalsCheck::new(&fund, &public, &internal),
        fund,
        editing: marks.editing,
        public,
        internal,
    })
}

pub async fn toggle_editing(
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EditingForm>,
) -> std::result::Result<Response, ApiError> {
    let sid = cookie::session_id(&headers);
    let session = app.resolve_session(sid.as_deref());
    let enabled = form.enabled.is_some();

    app.sessions()
        .update(&session.id, |m| m.editing = enabled)
        .ok_or_else(|| FundError::Internal("session vanished during update".into()))?;
    app.metrics()
        .editing_toggles
        .inc(&[("enabled", if enabled { "true" } else { "false" })]);
    tracing::debug!(session = %session.id, enabled, "editing toggled");

    Ok(finish(Redirect::to("/").into_response(), &session)?)
}

pub async fn update_marks(
    State(app): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<MarksForm>, FormRejection>,
) -> std::result::Result<Response, ApiError> {
    let sid = cookie::session_id(&headers);
    // no session is started here: a fresh one could never have editing on
    let session = app.live_session(sid.as_deref());

    let outcome = apply_marks(&app, session.as_ref(), form);
    app.metrics().score_edits.inc(&[(
        "outcome",
        match &outcome {
            Ok(()) => "ok",
            Err(e) => e.code().as_str(),
        },
    )]);
    if let Err(e) = outcome {
        tracing::warn!(session = ?sid, error = %e, "score edit rejected");
        return Err(e.into());
    }

    Ok(Redirect::to("/").into_response())
}

fn apply_marks(
    app: &AppState,
    session: Option<&ResolvedSession>,
    form: std::result::Result<Form<MarksForm>, FormRejection>,
) -> Result<()> {
    let Some(session) = session.filter(|s| s.marks.editing) else {
        return Err(FundError::NotAllowed("enable editing before changing marks".into()));
    };
    let Form(form) = form.map_err(|e| FundError::BadRequest(format!("invalid marks form: {e}")))?;
    let (public, internal) = form.validate(app.cfg().server.max_score)?;

    app.sessions()
        .update(&session.id, |m| {
            m.public = public;
            m.internal = internal;
        })
        .ok_or_else(|| FundError::NotAllowed("session expired".into()))?;
    Ok(())
}

pub async fn reset_session(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> std::result::Result<Response, ApiError> {
    if let Some(sid) = cookie::session_id(&headers) {
        if app.sessions().remove(&sid) {
            app.metrics().sessions_reset.inc(&[]);
            tracing::debug!(session = %sid, "session ended");
        }
    }

    Ok(with_cookie(Redirect::to("/").into_response(), &cookie::clear_cookie())?)
}
