//! # Product Repository
//!
//! Database operations for products.
//!
//! Stock is only ever decremented by the sale transaction (see
//! [`SaleRepository`](super::sale::SaleRepository)); here it is set
//! absolutely, on create and on full-replace update.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ironmonger_core::store::ProductStore;
use ironmonger_core::{CoreResult, NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let hammer = repo.insert(&NewProduct { name: "Claw hammer".into(), stock: 40, price_cents: 1250 }).await?;
/// let same = repo.get_by_id(hammer.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with its assigned id.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, stock = product.stock, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, stock, price_cents) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.stock)
            .bind(product.price_cents)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: product.name.clone(),
            stock: product.stock,
            price_cents: product.price_cents,
        })
    }

    /// Lists all products, newest first.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, stock, price_cents FROM products ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Returns the number of products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, stock, price_cents FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Replaces every field of a product.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<Product> {
        debug!(id, stock = product.stock, "Updating product");

        let result = sqlx::query(
            "UPDATE products SET name = ?2, stock = ?3, price_cents = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.price_cents)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(Product {
            id,
            name: product.name.clone(),
            stock: product.stock,
            price_cents: product.price_cents,
        })
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::ForeignKeyViolation)` - Product appears in a sale
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}

impl ProductStore for ProductRepository {
    async fn create(&self, product: &NewProduct) -> CoreResult<Product> {
        Ok(self.insert(product).await?)
    }

    async fn list(&self) -> CoreResult<Vec<Product>> {
        Ok(self.list_all().await?)
    }

    async fn get(&self, id: i64) -> CoreResult<Option<Product>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> CoreResult<Product> {
        Ok(ProductRepository::update(self, id, product).await?)
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        Ok(ProductRepository::delete(self, id).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
