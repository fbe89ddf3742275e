use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::{Employee, GoogleClaims};

/// Extractor for the verified token claims
/// Usage in handlers: `async fn handler(CurrentClaims(claims): CurrentClaims) -> Response`
pub struct CurrentClaims(pub GoogleClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentClaims
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by the auth middleware
        parts
            .extensions
            .get::<GoogleClaims>()
            .cloned()
            .map(CurrentClaims)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// Extractor for the authenticated employee record
pub struct CurrentEmployee(pub Employee);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentEmployee
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Employee>()
            .cloned()
            .map(CurrentEmployee)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
