pub mod document;

use std::path::PathBuf;

use contracts::domain::common::DocumentView;
use uuid::Uuid;

use crate::domain::{a001_client, a003_offer, a004_order, a005_delivery_note};
use crate::shared::error::DomainError;

/// Printable document kinds (invoices are not rendered)
#[derive(Debug, Clone, Copy)]
pub enum PdfKind {
    Offer,
    Order,
    DeliveryNote,
}

impl PdfKind {
    fn title(&self) -> &'static str {
        match self {
            Self::Offer => "Offer",
            Self::Order => "Order",
            Self::DeliveryNote => "Delivery note",
        }
    }
}

/// Render the document with the given id into target/pdf and return
/// the path of the generated file. Stale PDFs are removed first so the
/// directory only ever holds the latest download.
pub async fn create_document_pdf(kind: PdfKind, id: Uuid) -> Result<PathBuf, DomainError> {
    let view = load_view(kind, id).await?;

    let client = match Uuid::parse_str(&view.client_id) {
        Ok(uuid) => a001_client::repository::get_by_id(uuid)
            .await
            .map_err(DomainError::Other)?,
        Err(_) => None,
    };

    let bytes = document::render(kind.title(), &view, client.as_ref())
        .map_err(|e| DomainError::Other(anyhow::anyhow!("PDF rendering failed: {}", e)))?;

    let dir = PathBuf::from("target").join("pdf");
    std::fs::create_dir_all(&dir).map_err(|e| DomainError::Other(e.into()))?;
    clear_stale_pdfs(&dir);

    let filename = format!("{}_{}.pdf", view.code, view.date);
    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|e| DomainError::Other(e.into()))?;

    tracing::info!("Generated PDF: {}", path.display());
    Ok(path)
}

async fn load_view(kind: PdfKind, id: Uuid) -> Result<DocumentView, DomainError> {
    let view = match kind {
        PdfKind::Offer => a003_offer::service::get_view(id).await,
        PdfKind::Order => a004_order::service::get_view(id).await,
        PdfKind::DeliveryNote => a005_delivery_note::service::get_view(id).await,
    }
    .map_err(DomainError::Other)?;

    view.ok_or_else(|| DomainError::NotFound(format!("{} with ID {} not found", kind.title(), id)))
}

fn clear_stale_pdfs(dir: &std::path::Path) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "pdf").unwrap_or(false) {
                let _ = std::fs::remove_file(path);
            }
        }
    }
}
