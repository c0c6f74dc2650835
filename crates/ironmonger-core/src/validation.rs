//! # Validation Module
//!
//! Business validators applied before any storage access.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: HTTP boundary                                                 │
//! │  └── JSON shape and types (axum extractors)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  └── Non-empty names, positive prices and quantities, id > 0           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: SQLite                                                        │
//! │  ├── CHECK (stock >= 0), CHECK (price_cents > 0)                        │
//! │  ├── UNIQUE (national_id)                                               │
//! │  └── Foreign keys                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewClient, NewProduct, NewSale};
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an entity identifier.
///
/// ## Example
/// ```rust
/// use ironmonger_core::validation::validate_id;
///
/// assert!(validate_id("sale_id", 1).is_ok());
/// assert!(validate_id("sale_id", 0).is_err());
/// ```
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Trims a required text field, rejecting blank values.
fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a client and returns it with whitespace trimmed.
///
/// ## Rules
/// - name, national_id and email are required
/// - name is at most 200 characters
/// - email contains '@'
pub fn validate_client(client: &NewClient) -> ValidationResult<NewClient> {
    let name = required_text("name", &client.name, MAX_NAME_LEN)?;
    let national_id = required_text("national_id", &client.national_id, MAX_NAME_LEN)?;
    let email = required_text("email", &client.email, MAX_NAME_LEN)?;

    if !email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }

    Ok(NewClient {
        name,
        national_id,
        email,
    })
}

/// Validates a product and returns it with the name trimmed.
///
/// ## Example
/// ```rust
/// use ironmonger_core::types::NewProduct;
/// use ironmonger_core::validation::validate_product;
///
/// let ok = NewProduct { name: "Claw hammer".into(), stock: 0, price_cents: 1299 };
/// assert!(validate_product(&ok).is_ok());
///
/// let free = NewProduct { price_cents: 0, ..ok };
/// assert!(validate_product(&free).is_err());
/// ```
pub fn validate_product(product: &NewProduct) -> ValidationResult<NewProduct> {
    let name = required_text("name", &product.name, MAX_NAME_LEN)?;

    if product.stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    if product.price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price_cents".to_string(),
        });
    }

    Ok(NewProduct {
        name,
        stock: product.stock,
        price_cents: product.price_cents,
    })
}

/// Validates the shape of a sale request.
///
/// ## Rules
/// - client_id > 0
/// - at least one item
/// - every item: product_id > 0, quantity > 0, unit_price_cents > 0
///
/// Existence of the client and products is checked by the sale service,
/// not here.
pub fn validate_sale(sale: &NewSale) -> ValidationResult<()> {
    validate_id("client_id", sale.client_id)?;

    if sale.items.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    for (index, line) in sale.items.iter().enumerate() {
        validate_id(&format!("items[{index}].product_id"), line.product_id)?;

        if line.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("items[{index}].quantity"),
            });
        }

        if line.unit_price_cents <= 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("items[{index}].unit_price_cents"),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
