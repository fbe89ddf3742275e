use crate::domain::a004_order::aggregate::Order;
use crate::domain::common::{
    calculate_total, derive_document_code, encode_lines, AggregateId, AggregateRoot,
    BaseAggregate, DocumentLine, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the delivery note document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryNoteId(pub Uuid);

impl DeliveryNoteId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DeliveryNoteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DeliveryNoteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Delivery note, always derived from an order. Creating one moves the
/// listed quantities out of product stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryNote {
    #[serde(flatten)]
    pub base: BaseAggregate<DeliveryNoteId>,

    /// Google subject of the employee who created the document
    pub employee_id: String,

    /// UUID of the client (a001_client)
    pub client_id: String,

    /// Document date (YYYY-MM-DD)
    pub document_date: String,

    /// JSON array of document lines
    pub lines_json: Option<String>,

    /// Sum of unit price × quantity over all lines
    pub total_price: f64,
}

impl DeliveryNote {
    /// Build a delivery note out of an order: client and product table
    /// are copied, the total is recomputed from the copied lines.
    pub fn new_from_order(
        order: &Order,
        employee_id: String,
        document_date: String,
    ) -> Result<Self, String> {
        let code = derive_document_code(&order.base.code, "dn")?;
        let lines = order.parse_lines();
        let total_price = calculate_total(&lines);
        let description = format!("{} dated {}", code, document_date);
        let base = BaseAggregate::new(DeliveryNoteId::new_v4(), code, description);

        Ok(Self {
            base,
            employee_id,
            client_id: order.client_id.clone(),
            document_date,
            lines_json: encode_lines(&lines),
            total_price,
        })
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Deserialize lines_json into a vector of lines
    pub fn parse_lines(&self) -> Vec<DocumentLine> {
        self.lines_json
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for DeliveryNote {
    type Id = DeliveryNoteId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "delivery_note"
    }

    fn element_name() -> &'static str {
        "Delivery note"
    }

    fn list_name() -> &'static str {
        "Delivery notes"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeliveryNoteRequest {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_offer::aggregate::Offer;

    #[test]
    fn test_delivery_note_keeps_the_chain_suffix() {
        let offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            vec![DocumentLine {
                product_id: "p1".into(),
                product_name: "Widget".into(),
                quantity: 1,
                unit_price: 9.99,
            }],
        );
        let order = Order::new_from_offer(&offer, "sub-1".into(), "2025-03-02".into()).unwrap();
        let note =
            DeliveryNote::new_from_order(&order, "sub-3".into(), "2025-03-03".into()).unwrap();

        assert_eq!(&note.base.code[..3], "dn-");
        assert_eq!(&note.base.code[3..], &offer.base.code[3..]);
        assert_eq!(note.total_price, 9.99);
    }
}
