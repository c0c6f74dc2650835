//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CoreError ← What the services return                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the api app) ← Status code + JSON body                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ironmonger_core::CoreError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Updating or deleting an id that doesn't exist
    /// - `fetch_one` returns no rows
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Registering a national id twice
    #[error("Duplicate value for {field}")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Deleting a product or client referenced by a sale
    /// - Inserting a sale for a client deleted moments before
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// The guarded stock decrement matched no row.
    #[error("Insufficient stock for product {product_id}: requested {requested}")]
    InsufficientStock { product_id: i64, requested: i64 },

    /// SQLite raised "integer overflow" while aggregating.
    ///
    /// ## When This Occurs
    /// - `SUM(total_cents)` over sales whose combined total exceeds `i64`
    #[error("Integer overflow: {message}")]
    Overflow { message: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Classified by constraint kind
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: 0,
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // "UNIQUE constraint failed: <table>.<column>"
                if db_err.is_unique_violation() || msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if db_err.is_foreign_key_violation()
                    || msg.contains("FOREIGN KEY constraint failed")
                {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else if msg.contains("integer overflow") {
                    DbError::Overflow {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Classifies database failures for the services.
///
/// ```text
/// NotFound             → CoreError::NotFound
/// UniqueViolation      → CoreError::Conflict
/// ForeignKeyViolation  → CoreError::Conflict
/// InsufficientStock    → CoreError::InsufficientStock
/// Overflow             → CoreError::Overflow
/// everything else      → CoreError::Storage
/// ```
impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CoreError::NotFound { entity, id },
            DbError::UniqueViolation { field } => {
                CoreError::Conflict(format!("{field} is already registered"))
            }
            DbError::ForeignKeyViolation { .. } => {
                CoreError::Conflict("record is referenced by existing sales".to_string())
            }
            DbError::InsufficientStock {
                product_id,
                requested,
            } => CoreError::InsufficientStock {
                product_id,
                requested,
            },
            DbError::Overflow { .. } => {
                CoreError::Overflow("sum of sale totals exceeds the money range".to_string())
            }
            other => CoreError::Storage(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
