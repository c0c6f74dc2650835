//! Product operations: validation in front of a [`ProductStore`].

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::store::ProductStore;
use crate::types::{NewProduct, Product};
use crate::validation::{validate_id, validate_product};

#[derive(Debug, Clone)]
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    /// Creates a new ProductService.
    pub fn new(store: S) -> Self {
        ProductService { store }
    }

    /// Validates and stores a new product (stock ≥ 0, price > 0).
    pub async fn create(&self, product: &NewProduct) -> CoreResult<Product> {
        let product = validate_product(product)?;
        debug!(name = %product.name, stock = product.stock, "Creating product");
        self.store.create(&product).await
    }

    pub async fn list(&self) -> CoreResult<Vec<Product>> {
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> CoreResult<Product> {
        validate_id("id", id)?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Product", id))
    }

    /// Replaces every field of an existing product, stock included.
    pub async fn update(&self, id: i64, product: &NewProduct) -> CoreResult<Product> {
        validate_id("id", id)?;
        let product = validate_product(product)?;
        self.store.update(id, &product).await
    }

    /// Fails with `Conflict` if the product appears in any sale.
    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        validate_id("id", id)?;
        self.store.delete(id).await
    }
}
