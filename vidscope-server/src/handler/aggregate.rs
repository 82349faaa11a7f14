use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use vidscope::{AggregateResult, FetchRequest, VidscopeError};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AggregateParams {
    pub id: Option<String>,
    pub channel: Option<String>,
    pub search: Option<String>,
    pub fields: Option<String>,
}

impl AggregateParams {
    fn to_request(&self) -> FetchRequest {
        FetchRequest::from_params(
            self.id.as_deref(),
            self.channel.as_deref(),
            self.search.as_deref(),
            self.fields.as_deref(),
        )
    }
}

fn client_error_body(e: &VidscopeError) -> &'static str {
    match e {
        VidscopeError::MissingIdentifier => {
            "An 'id', 'channel', or 'search' parameter is required."
        }
        VidscopeError::NoTasksPlanned => "No valid fields or parameters provided.",
        _ => "Invalid request parameters.",
    }
}

fn failure_response(e: &VidscopeError) -> Response {
    if e.is_client_error() {
        warn!(error = %e, "rejected aggregate request");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": client_error_body(e) })),
        )
            .into_response();
    }
    error!(error = %e, "aggregate fetch failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to fetch data.", "details": e.to_string() })),
    )
        .into_response()
}

/// Handler for GET /aggregate (alias /api/fetch).
pub async fn aggregate_handler(
    State(state): State<AppState>,
    query: Result<Query<AggregateParams>, QueryRejection>,
) -> Response {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(error = %rejection, "rejected aggregate query string");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid query parameters.",
                    "details": rejection.body_text()
                })),
            )
                .into_response();
        }
    };
    let req = params.to_request();
    info!(
        id = ?params.id,
        channel = ?params.channel,
        search = ?params.search,
        fields = ?params.fields,
        "Received aggregate request"
    );

    match state
        .vidscope
        .aggregate(&req)
        .await
        .and_then(AggregateResult::into_body)
    {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => failure_response(&e),
    }
}
