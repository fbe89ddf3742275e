use serde::{Deserialize, Serialize};

/// Line of the product table shared by all sales documents
/// (offer, order, delivery note, invoice)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentLine {
    /// UUID of the product (a002_product)
    pub product_id: String,

    /// Product name at the time the line was written
    pub product_name: String,

    /// Quantity
    pub quantity: i64,

    /// Unit sell price at the time the line was written
    pub unit_price: f64,
}

impl DocumentLine {
    /// Line total (unit price × quantity)
    pub fn amount(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Total of a document: sum of unit price × quantity over all lines
pub fn calculate_total(lines: &[DocumentLine]) -> f64 {
    lines.iter().map(|l| l.amount()).sum()
}

/// Serialize lines for the `lines_json` column; empty tables are NULL
pub fn encode_lines(lines: &[DocumentLine]) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        serde_json::to_string(lines).ok()
    }
}

/// Derive a downstream document code by substituting the two-letter
/// prefix of an upstream one: "of-1a2b3c" + "or" -> "or-1a2b3c".
///
/// The suffix after the dash is shared along the whole chain
/// offer -> order -> delivery note -> invoice.
pub fn derive_document_code(source: &str, target_prefix: &str) -> Result<String, String> {
    let (prefix, suffix) = source
        .split_once('-')
        .ok_or_else(|| format!("Malformed document code: {}", source))?;
    if prefix.len() != 2 || suffix.is_empty() {
        return Err(format!("Malformed document code: {}", source));
    }
    Ok(format!("{}-{}", target_prefix, suffix))
}

/// Product reference as sent by document create/update requests;
/// resolved against a002_product before a line is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    pub id: String,
    pub quantity: i64,
}

/// Read model for document lists, detail endpoints and PDF rendering.
/// Carries the display names resolved from the employee and client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentView {
    pub id: String,
    pub code: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "employeeName")]
    pub employee_name: String,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub date: String,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    pub lines: Vec<DocumentLineView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLineView {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, quantity: i64) -> DocumentLine {
        DocumentLine {
            product_id: "p1".into(),
            product_name: "Widget".into(),
            quantity,
            unit_price: price,
        }
    }

    #[test]
    fn test_calculate_total() {
        assert_eq!(calculate_total(&[]), 0.0);
        assert_eq!(calculate_total(&[line(10.0, 2)]), 20.0);
        assert_eq!(calculate_total(&[line(10.0, 2), line(2.5, 4)]), 30.0);
    }

    #[test]
    fn test_derive_document_code_chain() {
        assert_eq!(derive_document_code("of-1a2b3c", "or").unwrap(), "or-1a2b3c");
        assert_eq!(derive_document_code("or-1a2b3c", "dn").unwrap(), "dn-1a2b3c");
        assert_eq!(derive_document_code("dn-1a2b3c", "in").unwrap(), "in-1a2b3c");
    }

    #[test]
    fn test_derive_document_code_rejects_malformed() {
        assert!(derive_document_code("1a2b3c", "or").is_err());
        assert!(derive_document_code("of-", "or").is_err());
        assert!(derive_document_code("offer-1a2b3c", "or").is_err());
    }
}
