//! # Sale Repository
//!
//! Database operations for sales, sale items, and sales reports.
//!
//! ## Sale Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       record()                                          │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   │                                                                     │
//! │   ├── INSERT INTO sales ...            ← takes the writer lock first    │
//! │   │                                                                     │
//! │   ├── for each item, in order:                                          │
//! │   │     UPDATE products SET stock = stock - qty                         │
//! │   │      WHERE id = ? AND stock >= qty                                  │
//! │   │        └── 0 rows? ──► drop tx (ROLLBACK) ──► InsufficientStock     │
//! │   │     INSERT INTO sale_items ...                                      │
//! │   │                                                                     │
//! │   └── COMMIT                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guard is evaluated by SQLite inside the write transaction, so two
//! concurrent sales can never both take the last unit.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::error::{DbError, DbResult};
use ironmonger_core::pricing::PricedSale;
use ironmonger_core::store::SaleStore;
use ironmonger_core::{CoreResult, Sale, SaleItem, SalesSummary, TopProduct};

/// A sale header joined with its client's name.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: i64,
    client_id: i64,
    client_name: String,
    created_at: DateTime<Utc>,
    total_cents: i64,
}

impl SaleRow {
    fn into_sale(self, items: Vec<SaleItem>) -> Sale {
        Sale {
            id: self.id,
            client_id: self.client_id,
            client_name: self.client_name,
            created_at: self.created_at,
            total_cents: self.total_cents,
            items,
        }
    }
}

/// Timestamps are stored as RFC 3339 UTC with whole seconds so that text
/// comparison in SQL matches time order.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a priced sale in a single transaction.
    ///
    /// ## Returns
    /// * `Err(DbError::InsufficientStock)` - An item's guard failed; nothing was written
    /// * `Err(DbError::ForeignKeyViolation)` - Client disappeared; nothing was written
    pub async fn record(&self, sale: &PricedSale) -> DbResult<Sale> {
        let created_at = Utc::now().trunc_subsecs(0);

        let mut tx = self.pool.begin().await?;

        let sale_id = sqlx::query(
            "INSERT INTO sales (client_id, created_at, total_cents) VALUES (?1, ?2, ?3)",
        )
        .bind(sale.client_id)
        .bind(format_timestamp(&created_at))
        .bind(sale.total.cents())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        debug!(sale_id, client_id = sale.client_id, "Sale header inserted");

        for item in &sale.items {
            Self::take_stock(&mut tx, item.product_id, item.quantity).await?;

            sqlx::query(
                r#"
                INSERT INTO sale_items (sale_id, product_id, quantity, unit_price_cents, subtotal_cents)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(sale_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price_cents)
            .bind(item.subtotal_cents)
            .execute(&mut *tx)
            .await?;
        }

        let client_name: String = sqlx::query_scalar("SELECT name FROM clients WHERE id = ?1")
            .bind(sale.client_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Sale {
            id: sale_id,
            client_id: sale.client_id,
            client_name,
            created_at,
            total_cents: sale.total.cents(),
            items: sale.items.clone(),
        })
    }

    /// Guarded decrement: succeeds only if `stock >= quantity` right now.
    async fn take_stock(
        tx: &mut Transaction<'_, Sqlite>,
        product_id: i64,
        quantity: i64,
    ) -> DbResult<()> {
        let result =
            sqlx::query("UPDATE products SET stock = stock - ?1 WHERE id = ?2 AND stock >= ?1")
                .bind(quantity)
                .bind(product_id)
                .execute(&mut **tx)
                .await?;

        if result.rows_affected() == 0 {
            debug!(product_id, quantity, "Stock guard failed, rolling back");
            return Err(DbError::InsufficientStock {
                product_id,
                requested: quantity,
            });
        }

        Ok(())
    }

    /// Gets a sale with its items in insertion order.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let header = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT s.id, s.client_id, c.name AS client_name, s.created_at, s.total_cents
            FROM sales s
            INNER JOIN clients c ON c.id = s.client_id
            WHERE s.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let items = self.get_items(id).await?;
        Ok(Some(header.into_sale(items)))
    }

    /// Gets the items of a sale in insertion order.
    pub async fn get_items(&self, sale_id: i64) -> DbResult<Vec<SaleItem>> {
        let rows: Vec<(i64, i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT product_id, quantity, unit_price_cents, subtotal_cents
            FROM sale_items
            WHERE sale_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(product_id, quantity, unit_price_cents, subtotal_cents)| SaleItem {
                    product_id,
                    quantity,
                    unit_price_cents,
                    subtotal_cents,
                },
            )
            .collect())
    }

    /// Lists all sale headers, newest first. Items are left empty.
    pub async fn list_all(&self) -> DbResult<Vec<Sale>> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT s.id, s.client_id, c.name AS client_name, s.created_at, s.total_cents
            FROM sales s
            INNER JOIN clients c ON c.id = s.client_id
            ORDER BY s.created_at DESC, s.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into_sale(Vec::new())).collect())
    }

    /// Count and total of sales with `from <= created_at < to`.
    pub async fn summary_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DbResult<SalesSummary> {
        let (count, total_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COALESCE(SUM(total_cents), 0)
            FROM sales
            WHERE created_at >= ?1 AND created_at < ?2
            "#,
        )
        .bind(format_timestamp(&from))
        .bind(format_timestamp(&to))
        .fetch_one(&self.pool)
        .await?;

        Ok(SalesSummary { count, total_cents })
    }

    /// Products by cumulative quantity sold. Ties break by name, then id.
    pub async fn top_products(&self, limit: u32) -> DbResult<Vec<TopProduct>> {
        let products = sqlx::query_as::<_, TopProduct>(
            r#"
            SELECT p.id AS product_id, p.name AS name, SUM(si.quantity) AS quantity
            FROM sale_items si
            INNER JOIN products p ON p.id = si.product_id
            GROUP BY p.id, p.name
            ORDER BY quantity DESC, p.name ASC, p.id ASC
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn exists(&self, table: Existence, id: i64) -> DbResult<bool> {
        let sql = match table {
            Existence::Client => "SELECT EXISTS(SELECT 1 FROM clients WHERE id = ?1)",
            Existence::Product => "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)",
        };

        let found: bool = sqlx::query_scalar(sql).bind(id).fetch_one(&self.pool).await?;
        Ok(found)
    }
}

#[derive(Debug, Clone, Copy)]
enum Existence {
    Client,
    Product,
}

impl SaleStore for SaleRepository {
    async fn client_exists(&self, id: i64) -> CoreResult<bool> {
        Ok(self.exists(Existence::Client, id).await?)
    }

    async fn product_exists(&self, id: i64) -> CoreResult<bool> {
        Ok(self.exists(Existence::Product, id).await?)
    }

    async fn record_sale(&self, sale: &PricedSale) -> CoreResult<Sale> {
        Ok(self.record(sale).await?)
    }

    async fn sale_detail(&self, id: i64) -> CoreResult<Option<Sale>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn list_sales(&self) -> CoreResult<Vec<Sale>> {
        Ok(self.list_all().await?)
    }

    async fn sales_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> CoreResult<SalesSummary> {
        Ok(self.summary_between(from, to).await?)
    }

    async fn top_products(&self, limit: u32) -> CoreResult<Vec<TopProduct>> {
        Ok(SaleRepository::top_products(self, limit).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
