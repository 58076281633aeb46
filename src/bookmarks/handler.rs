//! HTTP Handlers for the Bookmarks API

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use super::Bookmarks;
use crate::error::BookmarkError;
use crate::handler::AppState;
use crate::model::{BookmarkRecord, RemoveBookmark};
use crate::session::resolve_session;

#[derive(Debug, Deserialize)]
pub struct BookmarkQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn message(msg: &str) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: msg.to_string(),
        }),
    )
        .into_response()
}

fn not_found(msg: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
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

pub async fn add_bookmark(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<BookmarkRecord>,
) -> Response {
    let resolution = resolve_session(&jar, state.secure_cookies);
    let store = Bookmarks::new(state.db.connection());

    let result = if resolution.session_id.is_empty() {
        Err(BookmarkError::MissingSession)
    } else {
        store.add(&resolution.session_id, &payload).await.map(|_| ())
    };

    let response = match result {
        Ok(()) => message("Video bookmarked successfully!"),
        Err(BookmarkError::MissingSession) => bad_request("Session ID is missing"),
        Err(BookmarkError::MissingVideoId) => bad_request("Video ID is required"),
        Err(BookmarkError::Duplicate(_)) => bad_request("This video is already bookmarked"),
        Err(e) => {
            tracing::error!(error = %crate::unpack_error(&e), "failed to save bookmark");
            internal_error("Failed to bookmark the video")
        }
    };

    match resolution.cookie {
        Some(cookie) => (jar.add(cookie), response).into_response(),
        None => response,
    }
}

pub async fn remove_bookmark(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RemoveBookmark>,
) -> Response {
    let resolution = resolve_session(&jar, state.secure_cookies);
    let store = Bookmarks::new(state.db.connection());

    let result = if resolution.session_id.is_empty() {
        Err(BookmarkError::MissingSession)
    } else {
        store.remove(&resolution.session_id, &payload.video_id).await
    };

    let response = match result {
        Ok(()) => message("Bookmark removed successfully!"),
        Err(BookmarkError::MissingSession) => bad_request("Session ID is missing"),
        Err(BookmarkError::MissingVideoId) => {
            bad_request("Video ID is required to remove bookmark")
        }
        Err(BookmarkError::NoBookmarks) => not_found("No bookmarks found for this session"),
        Err(BookmarkError::NotFound(_)) => not_found("Bookmark not found"),
        Err(e) => {
            tracing::error!(error = %crate::unpack_error(&e), "failed to remove bookmark");
            internal_error("Failed to remove the bookmark")
        }
    };

    match resolution.cookie {
        Some(cookie) => (jar.add(cookie), response).into_response(),
        None => response,
    }
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(params): Query<BookmarkQuery>,
) -> Response {
    let session_id = match params.session_id {
        Some(id) if !id.is_empty() => id,
        _ => return bad_request("Session ID is required"),
    };

    let store = Bookmarks::new(state.db.connection());
    match store.list(&session_id).await {
        Ok(bookmarks) if bookmarks.is_empty() => message("No bookmarks found for this session"),
        Ok(bookmarks) => (StatusCode::OK, Json(bookmarks)).into_response(),
        Err(e) => {
            tracing::error!(error = %crate::unpack_error(&e), "failed to fetch bookmarks");
            internal_error("Failed to fetch bookmarks")
        }
    }
}
