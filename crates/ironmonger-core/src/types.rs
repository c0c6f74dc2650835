//! # Domain Types
//!
//! Core domain types used throughout Ironmonger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Client       │   │      Sale       │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  client_id      │   │  id             │       │
//! │  │  name           │   │  created_at     │   │  name           │       │
//! │  │  national_id    │   │  total_cents    │   │  stock          │       │
//! │  │  email          │   │  items ─────────┼──►│  price_cents    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Requests (what callers send):  NewClient, NewProduct, NewSale/SaleLine │
//! │  Reports:                       SalesSummary, TopProduct                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identities are surrogate integers assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Client
// =============================================================================

/// A store customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// National identity document number, unique per client.
    pub national_id: String,
    pub email: String,
}

/// Client fields supplied on create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub national_id: String,
    pub email: String,
}

// =============================================================================
// Product
// =============================================================================

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Units on hand. Never negative.
    pub stock: i64,
    /// Current unit price in cents.
    pub price_cents: i64,
}

/// Product fields supplied on create and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub stock: i64,
    pub price_cents: i64,
}

// =============================================================================
// Sale Request
// =============================================================================

/// One requested line of a sale.
///
/// There is no subtotal field: subtotals are always computed server-side,
/// so anything a caller sends besides these three values is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// A request to record a sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub client_id: i64,
    pub items: Vec<SaleLine>,
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a recorded sale.
///
/// `unit_price_cents` is a snapshot taken at sale time and does not follow
/// later changes to the product's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price_cents: i64,
    /// quantity × unit_price_cents.
    pub subtotal_cents: i64,
}

/// A recorded sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub client_id: i64,
    /// Client display name, joined at read time.
    pub client_name: String,
    pub created_at: DateTime<Utc>,
    /// Σ items.subtotal_cents.
    pub total_cents: i64,
    /// Line items in insertion order. Empty in sale listings.
    pub items: Vec<SaleItem>,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Count and amount of the sales made today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub count: i64,
    pub total_cents: i64,
}

/// A product with its cumulative quantity sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TopProduct {
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_line_ignores_client_subtotals() {
        let json = r#"{"product_id":1,"quantity":3,"unit_price_cents":500,"subtotal_cents":1}"#;
        let line: SaleLine = serde_json::from_str(json).unwrap();
        assert_eq!(
            line,
            SaleLine {
                product_id: 1,
                quantity: 3,
                unit_price_cents: 500,
            }
        );
    }
}
