//! 下单全流程集成测试
//!
//! 使用 ServerState::initialize 完整初始化 (tempfile 下的 RocksDB)，
//! 通过 tower oneshot 直接驱动路由，不开真实端口。

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::RecordId;
use tower::ServiceExt;

use grocer_server::core::server::build_app;
use grocer_server::db::models::ProductCreate;
use grocer_server::db::repository::{OrderRepository, ProductRepository, SlotRepository};
use grocer_server::{Config, ServerState};

async fn test_state() -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let db_path = tmp.path().join("db");
    let config = Config::with_overrides(db_path.to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await;
    (state, tmp)
}

fn app(state: &ServerState) -> Router {
    build_app().with_state(state.clone())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("non-JSON response body")
    };
    (status, value)
}

/// 返回演示数据里指定商品的 id ("product:...")
async fn product_id_by_name(app: &Router, name: &str) -> String {
    let (status, products) = send(app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("product {name} not seeded"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// 返回第一个时段的 (id, booked)
async fn first_slot(app: &Router) -> (String, i64) {
    let (status, slots) = send(app, "GET", "/slots", None).await;
    assert_eq!(status, StatusCode::OK);
    let slot = &slots.as_array().unwrap()[0];
    (
        slot["id"].as_str().unwrap().to_string(),
        slot["booked"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn seed_is_idempotent() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);

    let (status, body) = send(&app, "POST", "/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seed complete");

    // Second run must not duplicate anything
    let (status, _) = send(&app, "POST", "/seed", None).await;
    assert_eq!(status, StatusCode::OK);

    let products = ProductRepository::new(state.db.clone());
    let slots = SlotRepository::new(state.db.clone());
    assert_eq!(products.count().await.unwrap(), 4);
    assert_eq!(slots.count().await.unwrap(), 5);
}

#[tokio::test]
async fn products_lists_only_in_stock() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    // One discontinued product alongside the demo catalog
    let repo = ProductRepository::new(state.db.clone());
    repo.create(ProductCreate {
        name: "Quinoa".into(),
        price: 4.99,
        unit: "500g".into(),
        stock: Some(0),
        image: None,
        category: Some("Pantry".into()),
        in_stock: Some(false),
    })
    .await
    .unwrap();

    let (status, products) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert!(products.iter().all(|p| p["in_stock"] == true));
    assert!(products.iter().all(|p| p["name"] != "Quinoa"));
}

#[tokio::test]
async fn slots_expose_available() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let (status, slots) = send(&app, "GET", "/slots", None).await;
    assert_eq!(status, StatusCode::OK);
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 5);
    for slot in slots {
        assert_eq!(slot["booked"], 0);
        assert_eq!(
            slot["available"].as_i64().unwrap(),
            slot["capacity"].as_i64().unwrap()
        );
    }
}

#[tokio::test]
async fn place_order_computes_total_and_books_slot() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let bananas = product_id_by_name(&app, "Bananas").await;
    let milk = product_id_by_name(&app, "Milk").await;
    let (slot_id, _) = first_slot(&app).await;

    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id,
        "items": [
            {"product_id": bananas, "qty": 3},
            {"product_id": milk, "qty": 2},
        ],
        "note": "No plastic bags please",
    });

    let (status, receipt) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    // 0.79 × 3 + 2.49 × 2 = 7.35
    assert_eq!(receipt["total"].as_f64().unwrap(), 7.35);
    assert_eq!(receipt["status"], "confirmed");

    // Exactly the target slot gained one booking
    let (_, slots) = send(&app, "GET", "/slots", None).await;
    for slot in slots.as_array().unwrap() {
        let expected = if slot["id"] == Value::String(slot_id.clone()) {
            1
        } else {
            0
        };
        assert_eq!(slot["booked"].as_i64().unwrap(), expected);
    }

    // The persisted order snapshots name/unit/price per line
    let order_id: RecordId = receipt["order_id"].as_str().unwrap().parse().unwrap();
    let orders = OrderRepository::new(state.db.clone());
    let order = orders.find_by_id(&order_id).await.unwrap().expect("order persisted");
    assert_eq!(order.items.len(), 2);
    let line = order.items.iter().find(|i| i.name == "Bananas").unwrap();
    assert_eq!(line.unit, "each");
    assert_eq!(line.price, 0.79);
    assert_eq!(line.qty, 3);
    assert_eq!(line.line_total, 2.37);
    assert_eq!(order.total, 7.35);
    assert!(chrono::DateTime::parse_from_rfc3339(&order.created_at).is_ok());
}

#[tokio::test]
async fn full_slot_rejected_without_writes() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let bananas = product_id_by_name(&app, "Bananas").await;

    // A slot already at capacity
    let slots = SlotRepository::new(state.db.clone());
    let full = slots
        .create(grocer_server::db::models::SlotCreate {
            label: "Today 6:00–6:30".into(),
            capacity: 10,
            booked: Some(10),
        })
        .await
        .unwrap();
    let full_id = full.id.unwrap().to_string();

    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": full_id,
        "items": [{"product_id": bananas, "qty": 1}],
    });

    let (status, body) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Selected slot is full");

    let orders = OrderRepository::new(state.db.clone());
    assert_eq!(orders.count().await.unwrap(), 0);

    let (_, slots_json) = send(&app, "GET", "/slots", None).await;
    let full_after = slots_json
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["label"] == "Today 6:00–6:30")
        .unwrap();
    assert_eq!(full_after["booked"], 10);
    assert_eq!(full_after["available"], 0);
}

#[tokio::test]
async fn unknown_product_rejects_whole_order() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let bananas = product_id_by_name(&app, "Bananas").await;
    let (slot_id, _) = first_slot(&app).await;

    // 合法商品 + 不存在的商品：整单拒绝，无部分下单
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id,
        "items": [
            {"product_id": bananas, "qty": 1},
            {"product_id": "product:missing", "qty": 1},
        ],
    });

    let (status, body) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found: product:missing");

    let orders = OrderRepository::new(state.db.clone());
    assert_eq!(orders.count().await.unwrap(), 0);

    let (_, booked_after) = first_slot(&app).await;
    assert_eq!(booked_after, 0);
}

#[tokio::test]
async fn out_of_stock_product_rejected() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let repo = ProductRepository::new(state.db.clone());
    let discontinued = repo
        .create(ProductCreate {
            name: "Quinoa".into(),
            price: 4.99,
            unit: "500g".into(),
            stock: Some(0),
            image: None,
            category: None,
            in_stock: Some(false),
        })
        .await
        .unwrap();
    let discontinued_id = discontinued.id.unwrap().to_string();

    let (slot_id, _) = first_slot(&app).await;
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id,
        "items": [{"product_id": discontinued_id, "qty": 1}],
    });

    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let orders = OrderRepository::new(state.db.clone());
    assert_eq!(orders.count().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_ids_rejected() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let bananas = product_id_by_name(&app, "Bananas").await;
    let (slot_id, _) = first_slot(&app).await;

    // Malformed slot id
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": "not-an-id",
        "items": [{"product_id": bananas.clone(), "qty": 1}],
    });
    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Wrong table prefix on a product id
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id,
        "items": [{"product_id": "slot:abc", "qty": 1}],
    });
    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let orders = OrderRepository::new(state.db.clone());
    assert_eq!(orders.count().await.unwrap(), 0);
}

#[tokio::test]
async fn invalid_payload_shapes_rejected() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);
    send(&app, "POST", "/seed", None).await;

    let bananas = product_id_by_name(&app, "Bananas").await;
    let (slot_id, _) = first_slot(&app).await;

    // Empty items
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id.clone(),
        "items": [],
    });
    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Zero quantity
    let payload = json!({
        "customer_name": "Ana",
        "phone": "912345678",
        "slot_id": slot_id.clone(),
        "items": [{"product_id": bananas, "qty": 0}],
    });
    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Blank customer name
    let payload = json!({
        "customer_name": "   ",
        "phone": "912345678",
        "slot_id": slot_id,
        "items": [],
    });
    let (status, _) = send(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, booked_after) = first_slot(&app).await;
    assert_eq!(booked_after, 0);
}

#[tokio::test]
async fn liveness_and_diagnostics() {
    let (state, _tmp) = test_state().await;
    let app = app(&state);

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Grocer API running");

    send(&app, "POST", "/seed", None).await;

    let (status, body) = send(&app, "GET", "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["connection_status"], "Connected");
    let collections: Vec<&str> = body["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert!(collections.contains(&"product"));
    assert!(collections.contains(&"slot"));
}
