use std::sync::Arc;

use axum::{Json, response::IntoResponse};
use tracing::info;

use crate::db::Database;
use crate::search::YouTubeClient;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub youtube: Arc<YouTubeClient>,
    pub secure_cookies: bool,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(serde_json::json!({ "status": "ok" }))
}
