use crate::domain::a003_offer::aggregate::Offer;
use crate::domain::common::{
    calculate_total, derive_document_code, encode_lines, AggregateId, AggregateRoot,
    BaseAggregate, DocumentLine, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the order document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Order document, always derived from an accepted offer. The code
/// keeps the offer's suffix with the "or-" prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

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

impl Order {
    /// Build an order out of an offer: the client and the product table
    /// are copied, the total is recomputed from the copied lines.
    pub fn new_from_offer(
        offer: &Offer,
        employee_id: String,
        document_date: String,
    ) -> Result<Self, String> {
        let code = derive_document_code(&offer.base.code, "or")?;
        let lines = offer.parse_lines();
        let total_price = calculate_total(&lines);
        let description = format!("{} dated {}", code, document_date);
        let base = BaseAggregate::new(OrderId::new_v4(), code, description);

        Ok(Self {
            base,
            employee_id,
            client_id: offer.client_id.clone(),
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

impl AggregateRoot for Order {
    type Id = OrderId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "offerId")]
    pub offer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_copies_offer_lines_and_derives_code() {
        let offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            vec![DocumentLine {
                product_id: "p1".into(),
                product_name: "Widget".into(),
                quantity: 4,
                unit_price: 2.5,
            }],
        );
        let order = Order::new_from_offer(&offer, "sub-2".into(), "2025-03-05".into()).unwrap();

        assert_eq!(&order.base.code[..3], "or-");
        assert_eq!(&order.base.code[3..], &offer.base.code[3..]);
        assert_eq!(order.client_id, "client-1");
        assert_eq!(order.employee_id, "sub-2");
        assert_eq!(order.total_price, 10.0);
        assert_eq!(order.parse_lines(), offer.parse_lines());
    }
}
