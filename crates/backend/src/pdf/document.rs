use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::DocumentView;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::shared::format::format_money;

// A4 in points
const PAGE_WIDTH: f64 = 595.28;
const PAGE_HEIGHT: f64 = 841.89;
const MARGIN: f64 = 30.0;

/// Column x positions of the product table
const COL_ID: f64 = MARGIN;
const COL_NAME: f64 = 110.0;
const COL_QTY: f64 = 330.0;
const COL_UNIT: f64 = 390.0;
const COL_TOTAL: f64 = 480.0;

/// Render a sales document as a single-page A4 PDF: company header,
/// document info block, client block, product table and grand total.
pub fn render(
    title: &str,
    view: &DocumentView,
    client: Option<&Client>,
) -> Result<Vec<u8>, lopdf::Error> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let content = build_content(title, view, client);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn build_content(title: &str, view: &DocumentView, client: Option<&Client>) -> Content {
    let mut ops = Vec::new();

    // Company header
    text(&mut ops, "F2", 20.0, MARGIN, PAGE_HEIGHT - 50.0, "sellcontrol");

    // Document info block (right side)
    let info_x = 345.0;
    let mut y = PAGE_HEIGHT - 100.0;
    text(&mut ops, "F2", 11.0, info_x, y, &format!("{} information", title));
    y -= 16.0;
    text(&mut ops, "F1", 10.0, info_x, y, &format!("Creation date: {}", view.date));
    y -= 14.0;
    text(&mut ops, "F1", 10.0, info_x, y, &format!("Document ID: {}", view.code));
    y -= 14.0;
    text(&mut ops, "F1", 10.0, info_x, y, &format!("Created by: {}", view.employee_name));

    // Client block
    let mut y = PAGE_HEIGHT - 190.0;
    text(&mut ops, "F2", 11.0, MARGIN, y, "Client");
    y -= 16.0;
    text(&mut ops, "F1", 10.0, MARGIN, y, &format!("Company name: {}", view.client_name));
    if let Some(client) = client {
        y -= 14.0;
        text(&mut ops, "F1", 10.0, MARGIN, y, &format!("Address: {}", client.address));
        y -= 14.0;
        text(&mut ops, "F1", 10.0, MARGIN, y, &format!("Phone: {}", client.phone));
    }

    // Product table
    let mut y = PAGE_HEIGHT - 290.0;
    text(&mut ops, "F2", 10.0, COL_ID, y, "Product ID");
    text(&mut ops, "F2", 10.0, COL_NAME, y, "Product name");
    text(&mut ops, "F2", 10.0, COL_QTY, y, "Quantity");
    text(&mut ops, "F2", 10.0, COL_UNIT, y, "Unit price");
    text(&mut ops, "F2", 10.0, COL_TOTAL, y, "Total");
    y -= 6.0;
    rule(&mut ops, MARGIN, y, PAGE_WIDTH - MARGIN);

    for line in &view.lines {
        y -= 16.0;
        let short_id: String = line.id.chars().take(8).collect();
        let line_total = line.unit_price * line.quantity as f64;
        text(&mut ops, "F1", 9.0, COL_ID, y, &short_id);
        text(&mut ops, "F1", 9.0, COL_NAME, y, &line.name);
        text(&mut ops, "F1", 9.0, COL_QTY, y, &line.quantity.to_string());
        text(&mut ops, "F1", 9.0, COL_UNIT, y, &format_money(line.unit_price));
        text(&mut ops, "F1", 9.0, COL_TOTAL, y, &format_money(line_total));
    }
    y -= 8.0;
    rule(&mut ops, MARGIN, y, PAGE_WIDTH - MARGIN);

    // Grand total
    text(
        &mut ops,
        "F2",
        14.0,
        COL_QTY,
        100.0,
        &format!(
            "TOTAL {} PRICE: {}",
            title.to_uppercase(),
            format_money(view.total_price)
        ),
    );

    Content { operations: ops }
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f64, x: f64, y: f64, s: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(s)]));
    ops.push(Operation::new("ET", vec![]));
}

fn rule(ops: &mut Vec<Operation>, x1: f64, y: f64, x2: f64) {
    ops.push(Operation::new("m", vec![x1.into(), y.into()]));
    ops.push(Operation::new("l", vec![x2.into(), y.into()]));
    ops.push(Operation::new("S", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::DocumentLineView;

    fn sample_view() -> DocumentView {
        DocumentView {
            id: "11111111-2222-3333-4444-555555555555".into(),
            code: "or-1a2b3c".into(),
            employee_id: "sub-1".into(),
            employee_name: "John Doe".into(),
            client_id: "22222222-3333-4444-5555-666666666666".into(),
            client_name: "Acme SL".into(),
            date: "2025-03-05".into(),
            total_price: 25.0,
            lines: vec![DocumentLineView {
                id: "33333333-4444-5555-6666-777777777777".into(),
                name: "Widget".into(),
                quantity: 5,
                unit_price: 5.0,
            }],
        }
    }

    #[test]
    fn test_render_produces_pdf_with_document_data() {
        let bytes = render("Order", &sample_view(), None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        // Uncompressed content stream keeps the literals readable
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("sellcontrol"));
        assert!(haystack.contains("or-1a2b3c"));
        assert!(haystack.contains("John Doe"));
        assert!(haystack.contains("Widget"));
        assert!(haystack.contains("25.00"));
    }
}
