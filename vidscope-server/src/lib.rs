//! HTTP front end for vidscope.
//!
//! `GET /aggregate` returns selected video data as one JSON document and
//! `GET /report` returns a plain-text analysis report for a single video.
#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod telemetry;

use tracing::info;

use crate::config::Settings;
use crate::error::ServerError;
use crate::state::AppState;

/// Load settings, wire the Invidious connector, and serve until shutdown.
///
/// # Errors
/// Any configuration, wiring, or bind failure.
pub async fn run() -> Result<(), ServerError> {
    let settings = Settings::from_env()?;
    telemetry::init_tracing(settings.json_logs);
    info!(
        upstream = %settings.upstream_url,
        top_comments = settings.top_comments,
        "Loaded settings"
    );

    let state = AppState::from_settings(&settings)?;
    let app = router::app_router(state);
    server::serve(app, &settings.bind_address()).await
}
