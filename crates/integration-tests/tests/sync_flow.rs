//! Full load / publish / order flows through the engine over real HTTP.

#![allow(clippy::unwrap_used)]

use lumen_core::{Document, OrderStatus, Product, ProductId};
use lumen_integration_tests::RemoteStub;
use lumen_site::store::MemoryStore;
use lumen_site::sync::{LoadSource, OrderRequest};
use rust_decimal::Decimal;
use serde_json::json;

fn seeded_document() -> Document {
    let mut doc = Document::default();
    doc.products.push(Product {
        id: ProductId::new("p-1"),
        name: "Art print".to_string(),
        amount: Decimal::new(2500, 2),
        currency: "USD".to_string(),
        description: "A3 print".to_string(),
        image: "https://picsum.photos/600/600".to_string(),
    });
    doc
}

fn order_request() -> OrderRequest {
    OrderRequest {
        product_id: ProductId::new("p-1"),
        customer_name: "Ada".to_string(),
        customer_contact: "ada@example.com".to_string(),
        customer_country: "UK".to_string(),
    }
}

#[tokio::test]
async fn test_load_merges_partial_remote_document_over_defaults() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(json!({ "name": "Jane" }));

    let engine = stub.engine();
    let report = engine.load().await;
    assert_eq!(report.source, LoadSource::Remote);

    let doc = engine.document();
    assert_eq!(doc.name, "Jane");
    assert_eq!(doc.skills, Document::default().skills);
}

#[tokio::test]
async fn test_degraded_load_recovers_from_the_cache_over_http() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(json!({ "name": "Published Name" }));

    // First session loads successfully and fills its on-device store
    let store = MemoryStore::new();
    let engine = stub.engine_with_store(store.clone());
    engine.load().await;

    // The store goes down; a restart over the same device recovers
    stub.set_fail(true);
    let restarted = stub.engine_with_store(store);
    let report = restarted.load().await;

    assert_eq!(report.source, LoadSource::Cache);
    assert!(restarted.degraded());
    assert_eq!(restarted.document().name, "Published Name");
}

#[tokio::test]
async fn test_first_run_offline_serves_schema_defaults() {
    let stub = RemoteStub::spawn().await;
    stub.set_fail(true);

    let engine = stub.engine();
    let report = engine.load().await;

    assert_eq!(report.source, LoadSource::Defaults);
    assert_eq!(engine.document(), Document::default());
}

#[tokio::test]
async fn test_publish_replaces_the_remote_document_wholesale() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(json!({ "name": "Before" }));

    let engine = stub.engine();
    engine.load().await;

    let mut draft = engine.document();
    draft.name = "After".to_string();
    engine.publish(draft.clone()).await.unwrap();

    let stored: Document = serde_json::from_value(stub.value().unwrap()).unwrap();
    assert_eq!(stored, draft);
}

#[tokio::test]
async fn test_order_submission_lands_on_the_remote_store() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(serde_json::to_value(seeded_document()).unwrap());

    let engine = stub.engine();
    engine.load().await;

    let order = engine.submit_order(order_request()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    let stored: Document = serde_json::from_value(stub.value().unwrap()).unwrap();
    assert_eq!(stored.orders.len(), 1);
    assert_eq!(stored.order(&order.id), Some(&order));
}

#[tokio::test]
async fn test_failed_order_submission_leaves_remote_untouched() {
    let stub = RemoteStub::spawn().await;
    stub.set_value(serde_json::to_value(seeded_document()).unwrap());

    let engine = stub.engine();
    engine.load().await;
    let remote_before = stub.value();

    stub.set_fail(true);
    assert!(engine.submit_order(order_request()).await.is_err());

    stub.set_fail(false);
    assert_eq!(stub.value(), remote_before);
    assert!(engine.document().orders.is_empty());
}
