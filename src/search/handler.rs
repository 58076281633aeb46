use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::handler::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
    pub page_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn bad_request(msg: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

pub async fn search_videos(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Response {
    match state
        .youtube
        .search_videos(&payload.search_term, payload.page_token.as_deref())
        .await
    {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(SearchError::EmptySearchTerm) => bad_request("Search term is required"),
        Err(e) => {
            tracing::error!(error = %crate::unpack_error(&e), "failed to fetch videos");
            internal_error("Error fetching videos")
        }
    }
}
