//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, web::handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/editing", post(handlers::toggle_editing))
        .route("/marks", post(handlers::update_marks))
        .route("/session/reset", post(handlers::reset_session))
        .route("/v1/rewards", get(handlers::rewards_json))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
