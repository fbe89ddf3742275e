use axum::{http::StatusCode, Json};
use contracts::system::auth::EmployeeInfo;

use crate::system::auth::extractor::CurrentClaims;
use crate::system::employees::service as employee_service;

/// GET /api/system/auth/me (protected by require_token)
///
/// Returns the employee bound to the verified token, creating the
/// record on first login.
pub async fn current_user(
    CurrentClaims(claims): CurrentClaims,
) -> Result<Json<EmployeeInfo>, StatusCode> {
    let employee = employee_service::retrieve_or_create(&claims)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(employee.into()))
}
