use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a002_product;

/// GET /api/product
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a002_product::aggregate::Product>>, axum::http::StatusCode>
{
    match a002_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/product/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a002_product::aggregate::Product>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_product::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/product
pub async fn create(
    Json(dto): Json<contracts::domain::a002_product::aggregate::ProductDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a002_product::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// PUT /api/product
pub async fn update(
    Json(dto): Json<contracts::domain::a002_product::aggregate::ProductDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    if dto.id.is_none() {
        return Err(axum::http::StatusCode::BAD_REQUEST);
    }
    match a002_product::service::update(dto).await {
        Ok(()) => Ok(Json(json!({"id": uuid::Uuid::nil().to_string()}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_product::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
