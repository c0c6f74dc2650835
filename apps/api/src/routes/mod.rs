//! HTTP route handlers, one module per resource.

pub mod clients;
pub mod health;
pub mod products;
pub mod reports;
pub mod sales;

use serde::Serialize;

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: i64,
}
