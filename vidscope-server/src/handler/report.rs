use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    pub id: Option<String>,
}

/// Handler for GET /report (alias /api/analyze_video).
///
/// Always answers `text/plain`. Upstream failures are embedded in a 200 body.
pub async fn report_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> (StatusCode, String) {
    let Some(id) = params
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        warn!("report requested without a video id");
        return (
            StatusCode::BAD_REQUEST,
            "Error: A video 'id' parameter is required.".to_string(),
        );
    };

    info!(video_id = %id, "Received report request");
    (StatusCode::OK, state.vidscope.generate_report(id).await)
}
