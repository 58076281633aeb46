use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookmark",
            post(handler::add_bookmark).delete(handler::remove_bookmark),
        )
        .route("/mybookmarks", get(handler::list_bookmarks))
}
