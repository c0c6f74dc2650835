//! # Sale Pricing
//!
//! Computes line subtotals and the sale total from a validated request.
//!
//! ```text
//! SaleLine { qty: 3, unit: 5.00 }  ──►  SaleItem { subtotal: 15.00 } ─┐
//! SaleLine { qty: 2, unit: 20.00 } ──►  SaleItem { subtotal: 40.00 } ─┴─► total: 55.00
//! ```
//!
//! Subtotals are never taken from the caller; whatever arrives over the
//! wire, the stored amounts are the ones computed here.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{SaleItem, SaleLine};
use crate::validation::ValidationResult;

/// A sale request with every amount computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedSale {
    pub client_id: i64,
    /// Items in caller order.
    pub items: Vec<SaleItem>,
    pub total: Money,
}

/// Prices each line and sums the total.
///
/// Fails with [`ValidationError::Overflow`] if any subtotal or the running
/// total leaves the `i64` cents range.
///
/// ## Example
/// ```rust
/// use ironmonger_core::pricing::price_sale;
/// use ironmonger_core::types::SaleLine;
///
/// let lines = [
///     SaleLine { product_id: 1, quantity: 3, unit_price_cents: 500 },
///     SaleLine { product_id: 2, quantity: 2, unit_price_cents: 2000 },
/// ];
/// let priced = price_sale(7, &lines).unwrap();
/// assert_eq!(priced.total.cents(), 5500);
/// assert_eq!(priced.items[0].subtotal_cents, 1500);
/// ```
pub fn price_sale(client_id: i64, lines: &[SaleLine]) -> ValidationResult<PricedSale> {
    let mut total = Money::zero();
    let mut items = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let overflow = || ValidationError::Overflow {
            field: format!("items[{index}]"),
        };

        let subtotal = Money::from_cents(line.unit_price_cents)
            .checked_multiply_quantity(line.quantity)
            .ok_or_else(overflow)?;
        total = total.checked_add(subtotal).ok_or_else(overflow)?;

        items.push(SaleItem {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            subtotal_cents: subtotal.cents(),
        });
    }

    Ok(PricedSale {
        client_id,
        items,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, quantity: i64, unit_price_cents: i64) -> SaleLine {
        SaleLine {
            product_id,
            quantity,
            unit_price_cents,
        }
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let priced = price_sale(1, &[line(1, 3, 500), line(2, 2, 2000), line(1, 1, 499)]).unwrap();

        let sum: i64 = priced.items.iter().map(|item| item.subtotal_cents).sum();
        assert_eq!(priced.total.cents(), sum);
        assert_eq!(priced.total.cents(), 1500 + 4000 + 499);

        for item in &priced.items {
            assert_eq!(item.subtotal_cents, item.quantity * item.unit_price_cents);
        }
    }

    #[test]
    fn test_keeps_caller_order() {
        let priced = price_sale(1, &[line(9, 1, 100), line(3, 1, 100), line(5, 1, 100)]).unwrap();
        let ids: Vec<i64> = priced.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(matches!(
            price_sale(1, &[line(1, i64::MAX, 2)]),
            Err(ValidationError::Overflow { .. })
        ));
        assert_eq!(
            price_sale(1, &[line(1, 1, i64::MAX), line(2, 1, 1)]),
            Err(ValidationError::Overflow {
                field: "items[1]".to_string()
            })
        );
    }
}
