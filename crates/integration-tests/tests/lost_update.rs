//! The accepted concurrency hazard, demonstrated end to end.
//!
//! Order submission appends to the document as the submitting session holds
//! it in memory, without a fresh remote read, and then replaces the remote
//! document wholesale. Two sessions working from the same loaded document
//! therefore overwrite each other: the last writer wins and the earlier
//! order is lost. This is a deliberate simplicity trade-off of the system,
//! not a bug - these tests pin the behavior down so a future change to it
//! is a conscious one.

#![allow(clippy::unwrap_used)]

use lumen_core::{Document, Product, ProductId};
use lumen_integration_tests::RemoteStub;
use lumen_site::sync::OrderRequest;
use rust_decimal::Decimal;

fn seeded_document() -> Document {
    let mut doc = Document::default();
    doc.products.push(Product {
        id: ProductId::new("p-1"),
        name: "Art print".to_string(),
        amount: Decimal::new(2500, 2),
        currency: "USD".to_string(),
        description: "A3 print".to_string(),
        image: String::new(),
    });
    doc
}

fn order_from(customer: &str) -> OrderRequest {
    OrderRequest {
        product_id: ProductId::new("p-1"),
        customer_name: customer.to_string(),
        customer_contact: format!("{}@example.com", customer.to_lowercase()),
        customer_country: "UK".to_string(),
    }
}

#[tokio::test]
async fn test_interleaved_orders_lose_the_earlier_write() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(serde_json::to_value(seeded_document()).unwrap());

    // Both sessions load the same document D0
    let session_a = stub.engine();
    let session_b = stub.engine();
    session_a.load().await;
    session_b.load().await;

    // A submits o1 successfully
    let o1 = session_a.submit_order(order_from("Alice")).await.unwrap();
    let after_a: Document = serde_json::from_value(stub.value().unwrap()).unwrap();
    assert!(after_a.order(&o1.id).is_some());

    // B, still holding D0, submits o2 successfully - and silently
    // overwrites A's order
    let o2 = session_b.submit_order(order_from("Bob")).await.unwrap();

    let final_doc: Document = serde_json::from_value(stub.value().unwrap()).unwrap();
    assert!(final_doc.order(&o2.id).is_some(), "o2 must be present");
    assert!(final_doc.order(&o1.id).is_none(), "o1 is lost to the race");
    assert_eq!(final_doc.orders.len(), 1);
}

#[tokio::test]
async fn test_publish_discards_a_writer_who_landed_after_load() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(serde_json::to_value(seeded_document()).unwrap());

    // The owner's session loads
    let owner = stub.engine();
    owner.load().await;

    // A visitor session loads the same document and records an order
    let visitor = stub.engine();
    visitor.load().await;
    let order = visitor.submit_order(order_from("Alice")).await.unwrap();

    // The owner publishes an edit made against the pre-order document
    let mut draft = owner.document();
    draft.name = "Edited Offline".to_string();
    owner.publish(draft).await.unwrap();

    // The visitor's order is gone - last writer wins, no merge
    let final_doc: Document = serde_json::from_value(stub.value().unwrap()).unwrap();
    assert_eq!(final_doc.name, "Edited Offline");
    assert!(final_doc.order(&order.id).is_none());
}
