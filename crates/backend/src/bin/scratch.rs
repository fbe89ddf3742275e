use axum::{async_trait, body::Body, extract::{FromRequestParts, Path, Request}, http::{request::Parts, StatusCode}, middleware::{self, Next}, response::Response, routing::{get, post}, Json, Router};
use tower_http::cors::{Any, CorsLayer};

struct CurrentClaims(String);
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentClaims {
    type Rejection = StatusCode;
    async fn from_request_parts(p: &mut Parts, _s: &S) -> Result<Self, StatusCode> {
        p.extensions.get::<String>().cloned().map(CurrentClaims).ok_or(StatusCode::UNAUTHORIZED)
    }
}

async fn res_mw(r: Request<Body>, next: Next) -> Result<Response, StatusCode> { Ok(next.run(r).await) }
async fn logger(r: Request<Body>, next: Next) -> Response { next.run(r).await }

async fn me(CurrentClaims(_c): CurrentClaims) -> Result<Json<String>, StatusCode> { Err(StatusCode::UNAUTHORIZED) }
async fn list() -> Result<Json<Vec<String>>, StatusCode> { Ok(Json(vec![])) }
async fn get_one(Path(_id): Path<String>) -> Result<Json<String>, StatusCode> { Err(StatusCode::NOT_FOUND) }
async fn create(CurrentClaims(_c): CurrentClaims, Json(_b): Json<String>) -> Result<Json<serde_json::Value>, StatusCode> { Err(StatusCode::BAD_REQUEST) }

fn main() {
    let cors = CorsLayer::new().allow_origin(Any);
    let _app: Router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/me", get(me).layer(middleware::from_fn(res_mw)))
        .route("/list", get(list).layer(middleware::from_fn(res_mw)))
        .route("/one/:id", get(get_one).layer(middleware::from_fn(res_mw)))
        .route("/create", post(create).layer(middleware::from_fn(res_mw)))
        .layer(middleware::from_fn(logger))
        .layer(cors);
}
