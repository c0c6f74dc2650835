//! # ironmonger-core: Pure Business Logic for Ironmonger
//!
//! Domain types, money arithmetic, validation, sale pricing, and the
//! services that drive them. No I/O: storage is reached only through the
//! traits in [`store`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ironmonger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/api (axum HTTP boundary)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ ironmonger-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌──────────────────────────┐  ┌──────────────────────────┐  │   │
//! │  │   │ service (Stock Ledger,   │  │ store (capability traits)│  │   │
//! │  │   │ clients, products)       │──►                          │  │   │
//! │  │   └──────────────────────────┘  └────────────┬─────────────┘  │   │
//! │  └──────────────────────────────────────────────┼─────────────────┘   │
//! │                                                 │ implemented by       │
//! │  ┌──────────────────────────────────────────────▼─────────────────┐   │
//! │  │                 ironmonger-db (SQLite repositories)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Client, Product, Sale, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`pricing`] - Server-side subtotal and total computation
//! - [`store`] - Storage capability traits
//! - [`service`] - Business operations

pub mod error;
pub mod money;
pub mod pricing;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of names, national ids and emails.
pub const MAX_NAME_LEN: usize = 200;

/// Number of entries in the top-products report when no limit is given.
pub const DEFAULT_TOP_PRODUCTS: u32 = 5;

/// Upper bound for a requested top-products limit.
pub const MAX_TOP_PRODUCTS: u32 = 50;
