use axum::{extract::Path, Json};
use serde_json::json;

use contracts::domain::a006_invoice::aggregate::CreateInvoiceRequest;
use contracts::domain::common::DocumentView;

use crate::domain::a006_invoice;
use crate::system::auth::extractor::CurrentEmployee;

/// GET /api/invoice
pub async fn list_all() -> Result<Json<Vec<DocumentView>>, axum::http::StatusCode> {
    match a006_invoice::service::list_views().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/invoice/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<DocumentView>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a006_invoice::service::get_view(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/invoice
pub async fn create(
    CurrentEmployee(employee): CurrentEmployee,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a006_invoice::service::create_from_delivery_note(request, employee.id).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => Err(e.status_code()),
    }
}

/// DELETE /api/invoice/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a006_invoice::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
