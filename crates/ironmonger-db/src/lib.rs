//! # ironmonger-db: Database Layer for Ironmonger
//!
//! SQLite storage for clients, products, and sales, using sqlx for async
//! operations. The repositories implement the store traits from
//! `ironmonger_core::store`, so services run directly on top of them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ironmonger Data Flow                             │
//! │                                                                         │
//! │  POST /api/sales ──► SaleService::create_sale                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  ironmonger-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ ClientRepo    │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 0001_initial │  │   │
//! │  │   │ WAL, FKs on   │    │ SaleRepo      │    │ _schema.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (data.db)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types and their classification
//! - [`repository`] - Repository implementations (client, product, sale)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ironmonger_core::service::SaleService;
//! use ironmonger_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("data.db")).await?;
//! let sales = SaleService::new(db.sales());
//! let today = sales.sales_today().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
