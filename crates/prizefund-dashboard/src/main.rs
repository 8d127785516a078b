//! prizefund dashboard server.
//!
//! - Strict YAML config, then environment overrides for rate and marks
//! - Single page at `/`, edits via form POSTs, JSON view at `/v1/rewards`
//! - Idle sessions pruned in the background
//! - Graceful shutdown on Ctrl-C (readiness flips to draining first)

use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use prizefund_core::error::{FundError, Result};
use prizefund_dashboard::{app_state::AppState, config, router};

const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.code().as_str(), "prizefund-dashboard failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| FundError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}")))?;

    let state = AppState::new(cfg, config::EnvDefaults::from_env())?;

    let pruner = state.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            tick.tick().await;
            let dropped = pruner.sessions().prune_idle();
            if dropped > 0 {
                tracing::debug!(dropped, active = pruner.sessions().len(), "idle sessions pruned");
            }
        }
    });

    let app = router::build_router(state.clone());

    tracing::info!(%listen, "prizefund-dashboard starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FundError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            state.set_draining();
            tracing::info!("shutdown requested, draining");
        })
        .await
        .map_err(|e| FundError::Internal(format!("server failed: {e}")))
}
