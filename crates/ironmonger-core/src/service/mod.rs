//! # Services
//!
//! Business operations, generic over the [`store`](crate::store) traits.
//!
//! - [`SaleService`] - the Stock Ledger: atomic sale creation, sale queries, reports
//! - [`ClientService`] - client CRUD with validation
//! - [`ProductService`] - product CRUD with validation

pub mod client;
pub mod product;
pub mod sale;

pub use client::ClientService;
pub use product::ProductService;
pub use sale::SaleService;
