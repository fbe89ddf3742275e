use super::repository;
use contracts::domain::a003_offer::aggregate::{CreateOfferRequest, Offer, UpdateOfferRequest};
use contracts::domain::common::{DocumentLine, DocumentView, LineRequest};
use uuid::Uuid;

use crate::domain::{a002_product, views};
use crate::shared::error::DomainError;

/// Resolve request lines against the product catalog, capturing the
/// product name and current sell price into each line.
pub(crate) async fn resolve_lines(
    requests: &[LineRequest],
) -> Result<Vec<DocumentLine>, DomainError> {
    if requests.is_empty() {
        return Err(DomainError::Validation(
            "At least one product is required".into(),
        ));
    }

    let mut lines = Vec::with_capacity(requests.len());
    for request in requests {
        if request.quantity <= 0 {
            return Err(DomainError::Validation(
                "Product quantity must be greater than 0".into(),
            ));
        }
        let product_id = Uuid::parse_str(&request.id).map_err(|_| {
            DomainError::Validation(format!("Invalid product ID: {}", request.id))
        })?;
        let product = a002_product::repository::get_by_id(product_id)
            .await
            .map_err(DomainError::Other)?
            .ok_or_else(|| {
                DomainError::NotFound(format!("Product with ID {} not found", request.id))
            })?;

        lines.push(DocumentLine {
            product_id: product.to_string_id(),
            product_name: product.base.description.clone(),
            quantity: request.quantity,
            unit_price: product.sell_price,
        });
    }
    Ok(lines)
}

pub async fn create(request: CreateOfferRequest, employee_id: String) -> Result<Uuid, DomainError> {
    if request.client_id.trim().is_empty() {
        return Err(DomainError::Validation("Client is required".into()));
    }
    let client_uuid = Uuid::parse_str(&request.client_id)
        .map_err(|_| DomainError::Validation("Invalid client ID".into()))?;
    crate::domain::a001_client::repository::get_by_id(client_uuid)
        .await
        .map_err(DomainError::Other)?
        .ok_or_else(|| {
            DomainError::NotFound(format!("Client with ID {} not found", request.client_id))
        })?;

    let lines = resolve_lines(&request.lines).await?;
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut offer = Offer::new_for_insert(employee_id, request.client_id, today, lines);
    offer
        .validate()
        .map_err(DomainError::Validation)?;
    offer.before_write();

    repository::insert(&offer).await.map_err(DomainError::Other)
}

/// Replace the product table of an existing offer and recompute its total
pub async fn update_lines(request: UpdateOfferRequest) -> Result<(), DomainError> {
    let id = Uuid::parse_str(&request.offer_id)
        .map_err(|_| DomainError::Validation("Invalid offer ID".into()))?;

    let mut offer = repository::get_by_id(id)
        .await
        .map_err(DomainError::Other)?
        .ok_or_else(|| {
            DomainError::NotFound(format!("Offer with ID {} not found", request.offer_id))
        })?;

    let lines = resolve_lines(&request.lines).await?;
    offer.set_lines(lines);
    offer
        .validate()
        .map_err(DomainError::Validation)?;
    offer.before_write();

    repository::update(&offer).await.map_err(DomainError::Other)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_view(id: Uuid) -> anyhow::Result<Option<DocumentView>> {
    match repository::get_by_id(id).await? {
        Some(offer) => Ok(Some(to_view(&offer).await?)),
        None => Ok(None),
    }
}

pub async fn list_views() -> anyhow::Result<Vec<DocumentView>> {
    let offers = repository::list_all().await?;
    let mut result = Vec::with_capacity(offers.len());
    for offer in &offers {
        result.push(to_view(offer).await?);
    }
    Ok(result)
}

pub(crate) async fn to_view(offer: &Offer) -> anyhow::Result<DocumentView> {
    views::assemble(
        offer.to_string_id(),
        offer.base.code.clone(),
        offer.employee_id.clone(),
        offer.client_id.clone(),
        offer.document_date.clone(),
        offer.total_price,
        offer.parse_lines(),
    )
    .await
}
