use contracts::domain::common::{DocumentLine, DocumentLineView, DocumentView};
use uuid::Uuid;

use crate::domain::a001_client;
use crate::system::employees;

/// Assemble the read model of a sales document, resolving the client
/// and employee display names. Unresolvable references degrade to the
/// raw id instead of failing the whole listing.
pub async fn assemble(
    id: String,
    code: String,
    employee_id: String,
    client_id: String,
    date: String,
    total_price: f64,
    lines: Vec<DocumentLine>,
) -> anyhow::Result<DocumentView> {
    let client_name = match Uuid::parse_str(&client_id) {
        Ok(uuid) => a001_client::repository::get_by_id(uuid)
            .await?
            .map(|c| c.base.description)
            .unwrap_or_else(|| client_id.clone()),
        Err(_) => client_id.clone(),
    };

    let employee_name = employees::repository::get_by_id(&employee_id)
        .await?
        .map(|e| e.display_name())
        .unwrap_or_else(|| employee_id.clone());

    Ok(DocumentView {
        id,
        code,
        employee_id,
        employee_name,
        client_id,
        client_name,
        date,
        total_price,
        lines: lines
            .into_iter()
            .map(|l| DocumentLineView {
                id: l.product_id,
                name: l.product_name,
                quantity: l.quantity,
                unit_price: l.unit_price,
            })
            .collect(),
    })
}
