use axum::{extract::Path, http::StatusCode, Json};
use contracts::system::auth::{EmployeeInfo, UpdateEmployeeDto};

use crate::system::employees::service;

/// GET /api/system/employees (admin)
pub async fn list() -> Result<Json<Vec<EmployeeInfo>>, StatusCode> {
    match service::list_all().await {
        Ok(employees) => Ok(Json(employees.into_iter().map(Into::into).collect())),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/system/employees/:id (admin)
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<EmployeeInfo>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(employee)) => Ok(Json(employee.into())),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /api/system/employees/:id (admin)
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UpdateEmployeeDto>,
) -> Result<StatusCode, StatusCode> {
    match service::update(&id, dto).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/system/employees/:id (admin)
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    match service::delete(&id).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
