use crate::domain::common::{
    calculate_total, encode_lines, AggregateId, AggregateRoot, BaseAggregate, DocumentLine,
    EntityMetadata, LineRequest,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the offer document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub Uuid);

impl OfferId {
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

impl AggregateId for OfferId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OfferId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Offer document (head of the offer -> order -> delivery note ->
/// invoice chain). `base.code` is the document number "of-xxxxxx"
/// whose suffix the downstream documents inherit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(flatten)]
    pub base: BaseAggregate<OfferId>,

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

impl Offer {
    pub fn new_for_insert(
        employee_id: String,
        client_id: String,
        document_date: String,
        lines: Vec<DocumentLine>,
    ) -> Self {
        let id = OfferId::new_v4();
        let code = generate_offer_code(id.value());
        let total_price = calculate_total(&lines);
        let description = format!("{} dated {}", code, document_date);
        let base = BaseAggregate::new(id, code, description);

        Self {
            base,
            employee_id,
            client_id,
            document_date,
            lines_json: encode_lines(&lines),
            total_price,
        }
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

    /// Replace the product table and recompute the total
    pub fn set_lines(&mut self, lines: Vec<DocumentLine>) {
        self.total_price = calculate_total(&lines);
        self.lines_json = encode_lines(&lines);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.trim().is_empty() {
            return Err("Client is required".into());
        }
        if self.parse_lines().is_empty() {
            return Err("At least one product line is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Offer {
    type Id = OfferId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "offer"
    }

    fn element_name() -> &'static str {
        "Offer"
    }

    fn list_name() -> &'static str {
        "Offers"
    }
}

/// Document number from the aggregate UUID: "of-" plus the first six
/// hex digits of the simple form.
pub fn generate_offer_code(id: Uuid) -> String {
    let simple = id.simple().to_string();
    format!("of-{}", &simple[..6])
}

// ============================================================================
// Requests
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOfferRequest {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub lines: Vec<LineRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOfferRequest {
    #[serde(rename = "offerId")]
    pub offer_id: String,
    pub lines: Vec<LineRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<DocumentLine> {
        vec![
            DocumentLine {
                product_id: "p1".into(),
                product_name: "Widget".into(),
                quantity: 2,
                unit_price: 10.0,
            },
            DocumentLine {
                product_id: "p2".into(),
                product_name: "Gadget".into(),
                quantity: 1,
                unit_price: 5.5,
            },
        ]
    }

    #[test]
    fn test_new_offer_totals_and_code() {
        let offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            lines(),
        );
        assert_eq!(offer.total_price, 25.5);
        assert!(offer.base.code.starts_with("of-"));
        assert_eq!(offer.base.code.len(), 9);
        assert_eq!(offer.parse_lines().len(), 2);
    }

    #[test]
    fn test_set_lines_recomputes_total() {
        let mut offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            lines(),
        );
        offer.set_lines(vec![DocumentLine {
            product_id: "p1".into(),
            product_name: "Widget".into(),
            quantity: 3,
            unit_price: 10.0,
        }]);
        assert_eq!(offer.total_price, 30.0);
        assert_eq!(offer.parse_lines().len(), 1);
    }

    #[test]
    fn test_validate_requires_lines() {
        let offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            vec![],
        );
        assert!(offer.validate().is_err());
    }
}
