use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handler::aggregate::aggregate_handler;
use crate::handler::health::health_handler;
use crate::handler::report::report_handler;
use crate::state::AppState;

/// Build the HTTP router: aggregation, report, and health endpoints plus
/// the deployment aliases.
pub fn app_router(state: AppState) -> Router {
    let data_router = Router::new()
        .route("/aggregate", get(aggregate_handler))
        .route("/api/fetch", get(aggregate_handler))
        .route("/report", get(report_handler))
        .route("/api/analyze_video", get(report_handler))
        .with_state(state);

    Router::new()
        .route("/health", get(health_handler))
        .merge(data_router)
        .layer(TraceLayer::new_for_http())
}
