use axum::Json;
use serde_json::{Value, json};

use super::PROJECTS_BASE_PATH;
use crate::error::AppError;

pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "operational",
        "message": "Portfolio Management System Backend is Running",
        "timestamp": chrono::Utc::now(),
        "documentation": PROJECTS_BASE_PATH,
    }))
}

pub async fn fallback() -> AppError {
    AppError::RouteNotFound
}
