//! End-to-end tests of the HTTP boundary, driven through the router with
//! `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use ironmonger_api::{build_router, AppState};
use ironmonger_db::{Database, DbConfig};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    _web: TempDir,
}

impl TestApp {
    async fn new() -> Self {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let web = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(web.path().join("pages")).unwrap();
        std::fs::write(web.path().join("pages/products.html"), "<h1>Products</h1>").unwrap();
        std::fs::write(web.path().join("pages/sales.html"), "<h1>Sales</h1>").unwrap();

        TestApp {
            router: build_router(AppState::new(db), web.path()),
            _web: web,
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Body>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder.body(body.unwrap_or_else(Body::empty)).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(Body::from(body.to_string())))
            .await
    }

    async fn create_client(&self, national_id: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/clients",
                json!({"name": "Ana Torres", "national_id": national_id, "email": "ana@example.com"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    async fn create_product(&self, name: &str, stock: i64, price_cents: i64) -> i64 {
        let (status, body) = self
            .post(
                "/api/products",
                json!({"name": name, "stock": stock, "price_cents": price_cents}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }
}

#[tokio::test]
async fn sale_lifecycle() {
    let app = TestApp::new().await;
    let client = app.create_client("0912345678").await;
    let a = app.create_product("Box of nails", 10, 500).await;
    let b = app.create_product("Paint 1gal", 2, 2000).await;

    // Not enough paint: nothing changes.
    let (status, body) = app
        .post(
            "/api/sales",
            json!({"client_id": client, "items": [
                {"product_id": a, "quantity": 3, "unit_price_cents": 500},
                {"product_id": b, "quantity": 5, "unit_price_cents": 2000}
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INSUFFICIENT_STOCK");
    assert_eq!(app.get(&format!("/api/products/{a}")).await.1["stock"], 10);

    // Client-sent subtotals are ignored.
    let (status, sale) = app
        .post(
            "/api/sales",
            json!({"client_id": client, "items": [
                {"product_id": a, "quantity": 3, "unit_price_cents": 500, "subtotal_cents": 1},
                {"product_id": b, "quantity": 2, "unit_price_cents": 2000}
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(sale["total_cents"], 5500);
    assert_eq!(sale["items"][0]["subtotal_cents"], 1500);
    assert_eq!(sale["client_name"], "Ana Torres");

    assert_eq!(app.get(&format!("/api/products/{a}")).await.1["stock"], 7);
    assert_eq!(app.get(&format!("/api/products/{b}")).await.1["stock"], 0);

    let id = sale["id"].as_i64().unwrap();
    let (status, detail) = app.get(&format!("/api/sales/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["items"][0]["product_id"], a);
    assert_eq!(detail["items"][1]["product_id"], b);

    let (_, listed) = app.get("/api/sales").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, today) = app.get("/api/reports/sales-today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(today, json!({"count": 1, "total_cents": 5500}));

    let (status, top) = app.get("/api/reports/top-products?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(top, json!([{"product_id": a, "name": "Box of nails", "quantity": 3}]));
}

#[tokio::test]
async fn rejects_bad_input() {
    let app = TestApp::new().await;
    let client = app.create_client("0912345678").await;

    let (status, body) = app
        .post("/api/sales", json!({"client_id": client, "items": []}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = app
        .post(
            "/api/products",
            json!({"name": "Hand saw", "stock": -1, "price_cents": 1890}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = app
        .request(Method::POST, "/api/clients", Some(Body::from("{not json")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = app.get("/api/sales/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_and_conflicting_records() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/clients/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let p = app.create_product("Hacksaw", 4, 1120).await;
    let (status, _) = app
        .post(
            "/api/sales",
            json!({"client_id": 42, "items": [{"product_id": p, "quantity": 1, "unit_price_cents": 1120}]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let client = app.create_client("0912345678").await;
    let (status, body) = app
        .post(
            "/api/clients",
            json!({"name": "Other", "national_id": "0912345678", "email": "o@example.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (status, _) = app
        .post(
            "/api/sales",
            json!({"client_id": client, "items": [{"product_id": p, "quantity": 1, "unit_price_cents": 1120}]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .request(Method::DELETE, &format!("/api/products/{p}"), None)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn update_and_delete_product() {
    let app = TestApp::new().await;
    let p = app.create_product("Spirit level", 5, 1340).await;

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/products/{p}"),
            Some(Body::from(
                json!({"name": "Spirit level 60cm", "stock": 8, "price_cents": 1490}).to_string(),
            )),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock"], 8);

    let (status, body) = app
        .request(Method::DELETE, &format!("/api/products/{p}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": p}));

    let (status, _) = app.get(&format!("/api/products/{p}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_redirect_and_static_files() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/pages/products.html"
    );

    let request = Request::builder()
        .uri("/pages/products.html")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/pages/sales.html")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = app.get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn bundled_web_ui_is_served() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let web_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../web");
    let router = build_router(AppState::new(db), &web_dir);

    for page in ["products", "clients", "sales", "reports"] {
        let request = Request::builder()
            .uri(format!("/pages/{page}.html"))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{page}.html");

        let html = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(html.to_vec()).unwrap();
        assert!(html.contains(r#"src="/app.js""#), "{page}.html loads the client");
    }

    for asset in ["/app.js", "/styles.css"] {
        let request = Request::builder().uri(asset).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{asset}");
    }
}
