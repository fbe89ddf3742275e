use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_client;

/// GET /api/client
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a001_client::aggregate::Client>>, axum::http::StatusCode> {
    match a001_client::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/client/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a001_client::aggregate::Client>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_client::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/client
pub async fn create(
    Json(dto): Json<contracts::domain::a001_client::aggregate::ClientDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_client::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// PUT /api/client
pub async fn update(
    Json(dto): Json<contracts::domain::a001_client::aggregate::ClientDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    if dto.id.is_none() {
        return Err(axum::http::StatusCode::BAD_REQUEST);
    }
    match a001_client::service::update(dto).await {
        Ok(()) => Ok(Json(json!({"id": uuid::Uuid::nil().to_string()}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/client/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_client::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
