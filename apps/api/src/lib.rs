//! # Ironmonger API
//!
//! HTTP/JSON boundary for the hardware store backend.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /api/health                          GET                               │
//! │  /api/clients        /{id}            GET POST | GET PUT DELETE         │
//! │  /api/products       /{id}            GET POST | GET PUT DELETE         │
//! │  /api/sales          /{id}            GET POST | GET                    │
//! │  /api/reports/sales-today             GET                               │
//! │  /api/reports/top-products?limit=N    GET                               │
//! │                                                                         │
//! │  /                   → 303 /pages/products.html                         │
//! │  anything else       → static file from the web directory              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `IRONMONGER_HTTP_PORT` - listen port (default: 8080)
//! - `IRONMONGER_BIND_ADDR` - listen interface (default: 0.0.0.0)
//! - `IRONMONGER_DB_PATH` - SQLite file (default: data.db)
//! - `IRONMONGER_DB_MAX_CONNECTIONS` - pool size (default: 5)
//! - `IRONMONGER_WEB_DIR` - static files (default: web)

pub mod config;
pub mod error;
pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::get,
    Router,
};
use ironmonger_core::service::{ClientService, ProductService, SaleService};
use ironmonger_db::{ClientRepository, Database, ProductRepository, SaleRepository};
use tower_http::{services::ServeDir, trace::TraceLayer};

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

/// Shared application state. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub clients: ClientService<ClientRepository>,
    pub products: ProductService<ProductRepository>,
    pub sales: SaleService<SaleRepository>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            clients: ClientService::new(db.clients()),
            products: ProductService::new(db.products()),
            sales: SaleService::new(db.sales()),
            db,
        }
    }
}

/// Builds the full router: JSON API, root redirect, static files.
pub fn build_router(state: AppState, web_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/", get(|| async { Redirect::to("/pages/products.html") }))
        .fallback_service(ServeDir::new(web_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    use routes::{clients, health, products, reports, sales};

    Router::new()
        .route("/health", get(health::health))
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/{id}",
            get(clients::get).put(clients::update).delete(clients::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get).put(products::update).delete(products::delete),
        )
        .route("/sales", get(sales::list).post(sales::create))
        .route("/sales/{id}", get(sales::detail))
        .route("/reports/sales-today", get(reports::sales_today))
        .route("/reports/top-products", get(reports::top_products))
        .fallback(|| async { ApiError::not_found("no such API route") })
}
