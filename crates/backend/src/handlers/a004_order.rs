use axum::{extract::Path, response::Response, Json};
use serde_json::json;

use contracts::domain::a004_order::aggregate::CreateOrderRequest;
use contracts::domain::common::DocumentView;

use crate::domain::a004_order;
use crate::pdf::{self, PdfKind};
use crate::system::auth::extractor::CurrentEmployee;

/// GET /api/order
pub async fn list_all() -> Result<Json<Vec<DocumentView>>, axum::http::StatusCode> {
    match a004_order::service::list_views().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/order/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<DocumentView>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_order::service::get_view(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/order (protected by require_order_creator)
pub async fn create(
    CurrentEmployee(employee): CurrentEmployee,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a004_order::service::create_from_offer(request, employee.id).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => Err(e.status_code()),
    }
}

/// DELETE /api/order/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_order::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/order/:id/pdf
pub async fn get_pdf(Path(id): Path<String>) -> Result<Response, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    let path = pdf::create_document_pdf(PdfKind::Order, uuid)
        .await
        .map_err(|e| e.status_code())?;
    super::serve_pdf(&path)
}
