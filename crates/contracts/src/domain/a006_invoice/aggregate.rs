use crate::domain::a005_delivery_note::aggregate::DeliveryNote;
use crate::domain::common::{
    derive_document_code, AggregateId, AggregateRoot, BaseAggregate, DocumentLine, EntityMetadata,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for the invoice document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
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

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Invoice, always derived from a delivery note. An invoice bills
/// exactly what was delivered: date, total and product table are
/// copied from the note rather than recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(flatten)]
    pub base: BaseAggregate<InvoiceId>,

    /// Google subject of the employee who created the document
    pub employee_id: String,

    /// UUID of the client (a001_client)
    pub client_id: String,

    /// Document date, taken from the delivery note (YYYY-MM-DD)
    pub document_date: String,

    /// JSON array of document lines
    pub lines_json: Option<String>,

    /// Total copied from the delivery note
    pub total_price: f64,
}

impl Invoice {
    pub fn new_from_delivery_note(
        note: &DeliveryNote,
        employee_id: String,
    ) -> Result<Self, String> {
        let code = derive_document_code(&note.base.code, "in")?;
        let description = format!("{} dated {}", code, note.document_date);
        let base = BaseAggregate::new(InvoiceId::new_v4(), code, description);

        Ok(Self {
            base,
            employee_id,
            client_id: note.client_id.clone(),
            document_date: note.document_date.clone(),
            lines_json: note.lines_json.clone(),
            total_price: note.total_price,
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

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(rename = "deliveryNoteId")]
    pub delivery_note_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_offer::aggregate::Offer;
    use crate::domain::a004_order::aggregate::Order;

    #[test]
    fn test_invoice_copies_date_and_total_from_note() {
        let offer = Offer::new_for_insert(
            "sub-1".into(),
            "client-1".into(),
            "2025-03-01".into(),
            vec![DocumentLine {
                product_id: "p1".into(),
                product_name: "Widget".into(),
                quantity: 3,
                unit_price: 4.0,
            }],
        );
        let order = Order::new_from_offer(&offer, "sub-1".into(), "2025-03-02".into()).unwrap();
        let note =
            DeliveryNote::new_from_order(&order, "sub-1".into(), "2025-03-03".into()).unwrap();
        let invoice = Invoice::new_from_delivery_note(&note, "sub-9".into()).unwrap();

        assert_eq!(&invoice.base.code[..3], "in-");
        assert_eq!(&invoice.base.code[3..], &offer.base.code[3..]);
        assert_eq!(invoice.document_date, "2025-03-03");
        assert_eq!(invoice.total_price, note.total_price);
        assert_eq!(invoice.lines_json, note.lines_json);
    }
}
