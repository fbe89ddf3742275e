pub mod a001_client;
pub mod a002_product;
pub mod a003_offer;
pub mod a004_order;
pub mod a005_delivery_note;
pub mod a006_invoice;

use axum::http::{header, StatusCode};
use axum::response::Response;

/// Read a generated PDF back and stream it as a download
pub(crate) fn serve_pdf(path: &std::path::Path) -> Result<Response, StatusCode> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::error!("Failed to read generated PDF {}: {}", path.display(), e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    Response::builder()
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(axum::body::Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
