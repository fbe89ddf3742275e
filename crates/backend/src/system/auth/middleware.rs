use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use contracts::system::auth::{Employee, EmployeeRole, GoogleClaims};

use super::google::{self, VerifyError};
use crate::shared::config::get_config;
use crate::system::employees;

#[allow(dead_code)]
fn _assert_send() {
    fn is_send<T: Send>(_: T) {}
    let req: Request<Body> = Request::new(Body::empty());
    is_send(async move {
        let _ = verify_bearer(&req).await;
    });
}

fn verify_error_status(err: &VerifyError) -> StatusCode {
    match err {
        VerifyError::MissingClientId => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::UNAUTHORIZED,
    }
}

/// Extract the bearer token from the Authorization header. Kept
/// synchronous so the (non-`Sync`) request reference is never held
/// across an await point inside the middleware futures.
fn bearer_token(req: &Request<Body>) -> Result<String, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.to_owned())
        .ok_or(StatusCode::UNAUTHORIZED)
}

async fn verify_bearer(token: &str) -> Result<GoogleClaims, StatusCode> {
    let client_id = &get_config().auth.google_client_id;
    google::verify_id_token(token, client_id).await.map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        verify_error_status(&e)
    })
}

async fn load_employee(claims: &GoogleClaims) -> Result<Employee, StatusCode> {
    employees::repository::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::FORBIDDEN)
}

/// Middleware that only requires a verified Google ID token. Used by
/// the /me endpoint, which provisions the employee record itself.
pub async fn require_token(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?;
    let claims = verify_bearer(&token).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires a verified token belonging to a known employee
pub async fn require_employee(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?;
    let claims = verify_bearer(&token).await?;
    let employee = load_employee(&claims).await?;

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(employee);
    Ok(next.run(req).await)
}

/// Middleware that requires the admin role
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?;
    let claims = verify_bearer(&token).await?;
    let employee = load_employee(&claims).await?;

    if employee.role() != EmployeeRole::Admin {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(employee);
    Ok(next.run(req).await)
}

/// Middleware for product create/update/delete (admin or sales)
pub async fn require_product_manager(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?;
    let claims = verify_bearer(&token).await?;
    let employee = load_employee(&claims).await?;

    if !employee.role().can_manage_products() {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(employee);
    Ok(next.run(req).await)
}

/// Middleware for turning offers into orders (admin, manager or sales)
pub async fn require_order_creator(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(&req)?;
    let claims = verify_bearer(&token).await?;
    let employee = load_employee(&claims).await?;

    if !employee.role().can_create_orders() {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    req.extensions_mut().insert(employee);
    Ok(next.run(req).await)
}
