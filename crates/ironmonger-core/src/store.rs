//! # Store Capabilities
//!
//! The storage operations the services depend on. The database crate
//! implements these against SQLite; services never see SQL.
//!
//! ```text
//! SaleService<S: SaleStore> ──► S::record_sale(priced) ──► SaleRepository (SQLite)
//! ```
//!
//! Every future is `Send` so services can run inside multi-threaded
//! request handlers.

use std::future::Future;

use crate::error::CoreResult;
use crate::pricing::PricedSale;
use crate::types::{Client, NewClient, NewProduct, Product, Sale, SalesSummary, TopProduct};

/// Client persistence.
pub trait ClientStore: Send + Sync {
    fn create(&self, client: &NewClient) -> impl Future<Output = CoreResult<Client>> + Send;

    /// All clients, newest first.
    fn list(&self) -> impl Future<Output = CoreResult<Vec<Client>>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = CoreResult<Option<Client>>> + Send;

    /// Full replace. `NotFound` if no such client.
    fn update(&self, id: i64, client: &NewClient)
        -> impl Future<Output = CoreResult<Client>> + Send;

    /// `NotFound` if no such client.
    fn delete(&self, id: i64) -> impl Future<Output = CoreResult<()>> + Send;
}

/// Product persistence.
pub trait ProductStore: Send + Sync {
    fn create(&self, product: &NewProduct) -> impl Future<Output = CoreResult<Product>> + Send;

    /// All products, newest first.
    fn list(&self) -> impl Future<Output = CoreResult<Vec<Product>>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = CoreResult<Option<Product>>> + Send;

    /// Full replace. `NotFound` if no such product.
    fn update(
        &self,
        id: i64,
        product: &NewProduct,
    ) -> impl Future<Output = CoreResult<Product>> + Send;

    /// `NotFound` if no such product.
    fn delete(&self, id: i64) -> impl Future<Output = CoreResult<()>> + Send;
}

/// Sale persistence and reporting.
pub trait SaleStore: Send + Sync {
    fn client_exists(&self, id: i64) -> impl Future<Output = CoreResult<bool>> + Send;

    fn product_exists(&self, id: i64) -> impl Future<Output = CoreResult<bool>> + Send;

    /// Persists a priced sale atomically.
    ///
    /// Implementations must insert the header, then for each item in order
    /// apply a guarded decrement (`stock >= quantity`, evaluated by the store
    /// against the latest committed value) and insert the item, all in one
    /// transaction. A failed guard rolls everything back and returns
    /// `InsufficientStock`.
    fn record_sale(&self, sale: &PricedSale) -> impl Future<Output = CoreResult<Sale>> + Send;

    /// Header plus items in insertion order.
    fn sale_detail(&self, id: i64) -> impl Future<Output = CoreResult<Option<Sale>>> + Send;

    /// All sale headers, newest first, with client names.
    fn list_sales(&self) -> impl Future<Output = CoreResult<Vec<Sale>>> + Send;

    /// Count and total of sales with `from <= created_at < to`.
    fn sales_between(
        &self,
        from: chrono::DateTime<chrono::Utc>,
        to: chrono::DateTime<chrono::Utc>,
    ) -> impl Future<Output = CoreResult<SalesSummary>> + Send;

    /// Products by cumulative quantity sold, descending, ties by name then id.
    fn top_products(&self, limit: u32) -> impl Future<Output = CoreResult<Vec<TopProduct>>> + Send;
}
