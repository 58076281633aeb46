use axum::{Router, routing::get};
use std::error::Error;

pub mod bookmarks;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod search;
pub mod session;

use handler::AppState;

/// Assembles the full application router. Shared with the integration
/// tests so they exercise the same routes the binary serves.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::healthcheck))
        .merge(bookmarks::routes())
        .merge(search::routes())
        .with_state(state)
}

pub fn unpack_error(err: &(dyn Error)) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
