use super::repository;
use contracts::domain::a004_order::aggregate::{CreateOrderRequest, Order};
use contracts::domain::common::{derive_document_code, DocumentView};
use uuid::Uuid;

use crate::domain::{a003_offer, views};
use crate::shared::error::DomainError;

/// Turn an accepted offer into an order. The order inherits the
/// offer's suffix ("of-xxxxxx" -> "or-xxxxxx"); a second order for the
/// same offer is rejected.
pub async fn create_from_offer(
    request: CreateOrderRequest,
    employee_id: String,
) -> Result<Uuid, DomainError> {
    let offer_id = Uuid::parse_str(&request.offer_id)
        .map_err(|_| DomainError::Validation("Invalid offer ID".into()))?;

    let offer = a003_offer::repository::get_by_id(offer_id)
        .await
        .map_err(DomainError::Other)?
        .ok_or_else(|| {
            DomainError::NotFound(format!("Offer with ID {} not found", request.offer_id))
        })?;

    let order_code =
        derive_document_code(&offer.base.code, "or").map_err(DomainError::Validation)?;
    if repository::exists_by_code(&order_code)
        .await
        .map_err(DomainError::Other)?
    {
        return Err(DomainError::Conflict(format!(
            "Order {} already exists",
            order_code
        )));
    }

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let mut order =
        Order::new_from_offer(&offer, employee_id, today).map_err(DomainError::Validation)?;
    order.before_write();

    repository::insert(&order).await.map_err(DomainError::Other)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_view(id: Uuid) -> anyhow::Result<Option<DocumentView>> {
    match repository::get_by_id(id).await? {
        Some(order) => Ok(Some(to_view(&order).await?)),
        None => Ok(None),
    }
}

pub async fn list_views() -> anyhow::Result<Vec<DocumentView>> {
    let orders = repository::list_all().await?;
    let mut result = Vec::with_capacity(orders.len());
    for order in &orders {
        result.push(to_view(order).await?);
    }
    Ok(result)
}

pub(crate) async fn to_view(order: &Order) -> anyhow::Result<DocumentView> {
    views::assemble(
        order.to_string_id(),
        order.base.code.clone(),
        order.employee_id.clone(),
        order.client_id.clone(),
        order.document_date.clone(),
        order.total_price,
        order.parse_lines(),
    )
    .await
}
