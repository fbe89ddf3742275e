use super::repository;
use contracts::domain::a005_delivery_note::aggregate::{CreateDeliveryNoteRequest, DeliveryNote};
use contracts::domain::common::{derive_document_code, DocumentView};
use uuid::Uuid;

use crate::domain::{a002_product, a004_order, views};
use crate::shared::error::DomainError;

/// Turn an order into a delivery note. The note inherits the order's
/// suffix ("or-xxxxxx" -> "dn-xxxxxx"); delivering the same order twice
/// is rejected. The listed quantities leave the warehouse: every
/// product's stock is reduced, and the whole creation fails when any
/// product would fall below its minimum stock.
pub async fn create_from_order(
    request: CreateDeliveryNoteRequest,
    employee_id: String,
) -> Result<Uuid, DomainError> {
    let order_id = Uuid::parse_str(&request.order_id)
        .map_err(|_| DomainError::Validation("Invalid order ID".into()))?;

    let order = a004_order::repository::get_by_id(order_id)
        .await
        .map_err(DomainError::Other)?
        .ok_or_else(|| {
            DomainError::NotFound(format!("Order with ID {} not found", request.order_id))
        })?;

    let note_code =
        derive_document_code(&order.base.code, "dn").map_err(DomainError::Validation)?;
    if repository::exists_by_code(&note_code)
        .await
        .map_err(DomainError::Other)?
    {
        return Err(DomainError::Conflict(format!(
            "Delivery note {} already exists",
            note_code
        )));
    }

    // Check all stock movements before applying any of them
    let lines = order.parse_lines();
    let mut updated_products = Vec::with_capacity(lines.len());
    for line in &lines {
        let product_id = Uuid::parse_str(&line.product_id).map_err(|_| {
            DomainError::Validation(format!("Invalid product ID: {}", line.product_id))
        })?;
        let mut product = a002_product::repository::get_by_id(product_id)
            .await
            .map_err(DomainError::Other)?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Product with ID {} not found", line.product_id))
            })?;
        product
            .subtract_stock(line.quantity)
            .map_err(DomainError::Validation)?;
        product.before_write();
        updated_products.push(product);
    }

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let mut note = DeliveryNote::new_from_order(&order, employee_id, today)
        .map_err(DomainError::Validation)?;
    note.before_write();

    let id = repository::insert(&note).await.map_err(DomainError::Other)?;

    for product in &updated_products {
        a002_product::repository::update(product)
            .await
            .map_err(DomainError::Other)?;
    }

    Ok(id)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_view(id: Uuid) -> anyhow::Result<Option<DocumentView>> {
    match repository::get_by_id(id).await? {
        Some(note) => Ok(Some(to_view(&note).await?)),
        None => Ok(None),
    }
}

pub async fn list_views() -> anyhow::Result<Vec<DocumentView>> {
    let notes = repository::list_all().await?;
    let mut result = Vec::with_capacity(notes.len());
    for note in &notes {
        result.push(to_view(note).await?);
    }
    Ok(result)
}

pub(crate) async fn to_view(note: &DeliveryNote) -> anyhow::Result<DocumentView> {
    views::assemble(
        note.to_string_id(),
        note.base.code.clone(),
        note.employee_id.clone(),
        note.client_id.clone(),
        note.document_date.clone(),
        note.total_price,
        note.parse_lines(),
    )
    .await
}
