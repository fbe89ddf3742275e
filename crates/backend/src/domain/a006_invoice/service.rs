use super::repository;
use contracts::domain::a006_invoice::aggregate::{CreateInvoiceRequest, Invoice};
use contracts::domain::common::{derive_document_code, DocumentView};
use uuid::Uuid;

use crate::domain::{a005_delivery_note, views};
use crate::shared::error::DomainError;

/// Bill a delivery note. The invoice inherits the note's suffix
/// ("dn-xxxxxx" -> "in-xxxxxx") and copies its date, total and product
/// table; a second invoice for the same note is rejected.
pub async fn create_from_delivery_note(
    request: CreateInvoiceRequest,
    employee_id: String,
) -> Result<Uuid, DomainError> {
    let note_id = Uuid::parse_str(&request.delivery_note_id)
        .map_err(|_| DomainError::Validation("Invalid delivery note ID".into()))?;

    let note = a005_delivery_note::repository::get_by_id(note_id)
        .await
        .map_err(DomainError::Other)?
        .ok_or_else(|| {
            DomainError::NotFound(format!(
                "Delivery note with ID {} not found",
                request.delivery_note_id
            ))
        })?;

    let invoice_code =
        derive_document_code(&note.base.code, "in").map_err(DomainError::Validation)?;
    if repository::exists_by_code(&invoice_code)
        .await
        .map_err(DomainError::Other)?
    {
        return Err(DomainError::Conflict(format!(
            "Invoice {} already exists",
            invoice_code
        )));
    }

    let mut invoice =
        Invoice::new_from_delivery_note(&note, employee_id).map_err(DomainError::Validation)?;
    invoice.before_write();

    repository::insert(&invoice)
        .await
        .map_err(DomainError::Other)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_view(id: Uuid) -> anyhow::Result<Option<DocumentView>> {
    match repository::get_by_id(id).await? {
        Some(invoice) => Ok(Some(to_view(&invoice).await?)),
        None => Ok(None),
    }
}

pub async fn list_views() -> anyhow::Result<Vec<DocumentView>> {
    let invoices = repository::list_all().await?;
    let mut result = Vec::with_capacity(invoices.len());
    for invoice in &invoices {
        result.push(to_view(invoice).await?);
    }
    Ok(result)
}

pub(crate) async fn to_view(invoice: &Invoice) -> anyhow::Result<DocumentView> {
    views::assemble(
        invoice.to_string_id(),
        invoice.base.code.clone(),
        invoice.employee_id.clone(),
        invoice.client_id.clone(),
        invoice.document_date.clone(),
        invoice.total_price,
        invoice.parse_lines(),
    )
    .await
}
