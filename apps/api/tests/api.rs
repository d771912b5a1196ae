//! HTTP integration tests.
//!
//! Every test builds the real router over a fresh in-memory database and
//! drives it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use kasir_api::{create_router, ApiConfig, AppState};
use kasir_db::{Database, DbConfig};

// ============================================================================
// Harness
// ============================================================================

async fn app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let config = ApiConfig::from_lookup(|key| match key {
        "API_ENV" => Some("test".to_string()),
        _ => None,
    })
    .unwrap();
    (create_router(AppState::new(db.clone(), config)), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create_product(app: &Router, name: &str, price: i64, stock: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/product",
        Some(json!({ "name": name, "price": price, "stock": stock })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn stock_of(app: &Router, id: i64) -> i64 {
    let (status, body) = send(app, Method::GET, &format!("/api/product/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    body["stock"].as_i64().unwrap()
}

// ============================================================================
// Health & Info
// ============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK", "message": "API is running" }));
}

#[tokio::test]
async fn health_reports_unavailable_after_close() {
    let (app, db) = app().await;
    db.close().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "UNAVAILABLE");
}

#[tokio::test]
async fn info_lists_endpoints() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["message"], "simple API");
    assert_eq!(body["endpoint"]["POST"]["checkout"]["path"], "/api/checkout");
    assert_eq!(body["endpoint"]["DELETE"]["delete_product"]["path"], "/api/product/{id}");
}

#[tokio::test]
async fn cors_follows_configured_origins() {
    let (app, _db) = app().await;
    let req = Request::get("/health")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");

    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let config = ApiConfig::from_lookup(|key| match key {
        "CORS_ORIGINS" => Some("https://kasir.example".to_string()),
        _ => None,
    })
    .unwrap();
    let app = create_router(AppState::new(db, config));

    let allowed = Request::get("/health")
        .header("origin", "https://kasir.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "https://kasir.example"
    );

    let other = Request::get("/health")
        .header("origin", "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(other).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn product_crud_round() {
    let (app, _db) = app().await;

    let id = create_product(&app, "Indomie Goreng", 3500, 10).await;

    let (status, list) = send(&app, Method::GET, "/api/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Indomie Goreng");
    assert_eq!(list[0]["category_name"], "");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/product/{id}"),
        Some(json!({
            "name": "Indomie Soto",
            "price": 3300,
            "stock": 12,
            "category_id": 1,
            "category_name": "Makanan"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["price"], 3300);
    assert_eq!(updated["category_name"], "Makanan");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/product/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/product/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn product_list_reads_are_idempotent() {
    let (app, _db) = app().await;
    let kopi = create_product(&app, "Kopi", 2000, 5).await;
    create_product(&app, "Gula", 15000, 3).await;
    send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [{ "product_id": kopi, "quantity": 2 }] })),
    )
    .await;

    let (status, first) = send(&app, Method::GET, "/api/product", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, Method::GET, "/api/product", None).await;

    assert_eq!(first, second);
    assert_eq!(first[0]["stock"], 3);
    assert_eq!(first[1]["name"], "Gula");
}

#[tokio::test]
async fn product_errors() {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/product",
        Some(json!({ "name": "", "price": 1000, "stock": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "name is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/product",
        Some(json!({ "name": "Kopi" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, Method::GET, "/api/product/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, "/api/product/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/product/42",
        Some(json!({ "name": "Kopi", "price": 2000, "stock": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Checkout
// ============================================================================

#[tokio::test]
async fn checkout_records_transaction() {
    let (app, _db) = app().await;
    let indomie = create_product(&app, "Indomie", 3500, 10).await;
    let teh = create_product(&app, "Teh Botol", 6000, 20).await;

    let (status, txn) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [
            { "product_id": indomie, "quantity": 2 },
            { "product_id": teh, "quantity": 1 }
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(txn["total_amount"], 13000);
    assert!(txn["created_at"].is_string());
    let details = txn["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["product_name"], "Indomie");
    assert_eq!(details[0]["subtotal"], 7000);
    assert_eq!(details[1]["subtotal"], 6000);
    assert_eq!(details[1]["transaction_id"], txn["id"]);

    assert_eq!(stock_of(&app, indomie).await, 8);
    assert_eq!(stock_of(&app, teh).await, 19);

    let (status, loaded) = send(
        &app,
        Method::GET,
        &format!("/api/transaction/{}", txn["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["total_amount"], 13000);
    assert_eq!(loaded["details"], txn["details"]);
}

#[tokio::test]
async fn checkout_unknown_product_is_404_and_changes_nothing() {
    let (app, _db) = app().await;
    let a = create_product(&app, "Indomie", 3500, 10).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [
            { "product_id": a, "quantity": 2 },
            { "product_id": 999, "quantity": 1 }
        ]})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "product id 999 not found");
    assert_eq!(stock_of(&app, a).await, 10);

    let (_, summary) = send(&app, Method::GET, "/api/sales/summary/today", None).await;
    assert_eq!(summary["total_transaction"], 0);
}

#[tokio::test]
async fn checkout_insufficient_stock_is_409() {
    let (app, _db) = app().await;
    let a = create_product(&app, "Gula", 15000, 2).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [{ "product_id": a, "quantity": 3 }] })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INSUFFICIENT_STOCK");
    assert_eq!(stock_of(&app, a).await, 2);
}

#[tokio::test]
async fn checkout_rejects_bad_input() {
    let (app, _db) = app().await;
    let a = create_product(&app, "Kopi", 2000, 5).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [{ "product_id": a, "quantity": 0 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "items[0].quantity must be positive");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert_eq!(stock_of(&app, a).await, 5);
}

#[tokio::test]
async fn unknown_transaction_is_404() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/api/transaction/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "transaction id 5 not found");
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn summary_today() {
    let (app, _db) = app().await;

    let (status, empty) = send(&app, Method::GET, "/api/sales/summary/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        empty,
        json!({
            "total_transaction": 0,
            "total_revenue": 0,
            "mostselling_product": { "name": "", "quantity": 0 }
        })
    );

    let a = create_product(&app, "Indomie", 3500, 10).await;
    let b = create_product(&app, "Teh Botol", 6000, 20).await;
    send(
        &app,
        Method::POST,
        "/api/checkout",
        Some(json!({ "items": [
            { "product_id": a, "quantity": 2 },
            { "product_id": b, "quantity": 1 }
        ]})),
    )
    .await;

    let (_, summary) = send(&app, Method::GET, "/api/sales/summary/today", None).await;
    assert_eq!(summary["total_transaction"], 1);
    assert_eq!(summary["total_revenue"], 13000);
    assert_eq!(summary["mostselling_product"]["name"], "Indomie");
    assert_eq!(summary["mostselling_product"]["quantity"], 2);
}

#[tokio::test]
async fn summary_range_validation() {
    let (app, _db) = app().await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/sales/summary?start=2026-01-01&end=2026-01-31",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_transaction"], 0);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/sales/summary?start=2026-02-01&end=2026-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, Method::GET, "/api/sales/summary?start=yesterday&end=2026-01-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/sales/summary", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "start is required");
}
