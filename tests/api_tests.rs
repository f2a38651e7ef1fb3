// Integration tests for the receipt REST API
#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use receipt_points::api::router;
use receipt_points::ReceiptRegistry;

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2023-01-01",
        "purchaseTime": "10:00",
        "total": "6.49",
        "items": [
            { "description": "abc", "unitPrice": "25.01" },
            { "description": "ab", "unitPrice": "1.00" },
            { "description": "abcd", "unitPrice": "3.35" },
            { "description": "abcde", "unitPrice": "2.25" }
        ]
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "14:33",
        "total": "35.00",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ]
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn submit(app: &Router, receipt: Value) -> String {
    let (status, body) = post_json(app, "/receipts/process", receipt.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let app = router(ReceiptRegistry::new());

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], receipt_points::VERSION);
}

#[tokio::test]
async fn test_list_items() {
    let app = router(ReceiptRegistry::new());

    let (status, body) = get(&app, "/items").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), receipt_points::demo_items().len());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["description"], "Milk");
    assert_eq!(items[0]["unitPrice"], "2.99");
    assert_eq!(items[1]["description"], "Pepsi - 12-oz");
}

#[tokio::test]
async fn test_submit_then_points() {
    let app = router(ReceiptRegistry::new());
    let id = submit(&app, target_receipt()).await;

    let uri = format!("/receipts/{}/points", id);
    let (status, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, json!({ "points": 28 }));
    assert_eq!(second, json!({ "points": 28 }));
}

#[tokio::test]
async fn test_corner_market_points() {
    let app = router(ReceiptRegistry::new());
    let id = submit(&app, corner_market_receipt()).await;

    let (status, body) = get(&app, &format!("/receipts/{}/points", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], 109);
}

#[tokio::test]
async fn test_breakdown() {
    let app = router(ReceiptRegistry::new());
    let id = submit(&app, corner_market_receipt()).await;

    let (status, body) = get(&app, &format!("/receipts/{}/breakdown", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 109);
    assert_eq!(body["rules"].as_array().unwrap().len(), 7);
    assert_eq!(body["rules"][1]["rule"], "round_dollar");
    assert_eq!(body["rules"][1]["points"], 50);
}

#[tokio::test]
async fn test_unknown_id_not_found() {
    let app = router(ReceiptRegistry::new());
    submit(&app, target_receipt()).await;

    let (status, body) = get(&app, "/receipts/does-not-exist/points").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("points").is_none());
    assert!(body["error"].as_str().unwrap().contains("does-not-exist"));

    let (status, _) = get(&app, "/receipts/does-not-exist/breakdown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_submission_rejected() {
    let registry = ReceiptRegistry::new();
    let app = router(registry.clone());

    let (status, body) = post_json(&app, "/receipts/process", "{ not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let missing_items = json!({
        "retailer": "Target",
        "purchaseDate": "2023-01-01",
        "purchaseTime": "10:00",
        "total": "6.49"
    });
    let (status, _) = post_json(&app, "/receipts/process", missing_items.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_submission_without_content_type_rejected() {
    let app = router(ReceiptRegistry::new());

    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .body(Body::from(target_receipt().to_string()))
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_identical_submissions_get_distinct_ids() {
    let app = router(ReceiptRegistry::new());

    let first = submit(&app, target_receipt()).await;
    let second = submit(&app, target_receipt()).await;
    assert_ne!(first, second);

    let (_, receipts) = get(&app, "/receipts").await;
    let receipts = receipts.as_object().unwrap();

    assert_eq!(receipts.len(), 2);
    assert_eq!(receipts[&first]["retailer"], "Target");
    assert_eq!(receipts[&second]["purchaseDate"], "2023-01-01");
}

#[tokio::test]
async fn test_huge_prices_still_score() {
    let app = router(ReceiptRegistry::new());
    let id = submit(
        &app,
        json!({
            "retailer": "Target",
            "purchaseDate": "2023-01-01",
            "purchaseTime": "10:00",
            "total": "1.00",
            "items": [
                { "description": "abc", "unitPrice": "92233720368547758075" },
                { "description": "def", "unitPrice": "92233720368547758075" }
            ]
        }),
    )
    .await;

    let (status, body) = get(&app, &format!("/receipts/{}/points", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"], u64::MAX);
}

#[tokio::test]
async fn test_empty_items_receipt() {
    let app = router(ReceiptRegistry::new());
    let id = submit(
        &app,
        json!({
            "retailer": "Target",
            "purchaseDate": "2023-01-01",
            "purchaseTime": "14:00",
            "total": "1.00",
            "items": []
        }),
    )
    .await;

    let (status, body) = get(&app, &format!("/receipts/{}/points", id)).await;

    assert_eq!(status, StatusCode::OK);
    // 6 + 50 + 25 + 0 + 0 + 6 + 10
    assert_eq!(body["points"], 97);
}
