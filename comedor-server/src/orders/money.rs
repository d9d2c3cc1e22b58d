//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary values are `Decimal` end to end, rounded to 2 decimal
//! places half-up. The one rule that matters: an order total is always
//! re-derived by summing current line subtotals, never patched
//! incrementally, so it cannot drift from the lines.

use super::manager::OrderError;
use rust_decimal::prelude::*;
use shared::models::Order;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per item (€1,000,000)
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Round a monetary value to 2 decimal places, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a quantity argument for add/merge
pub fn validate_quantity(quantity: i32) -> Result<(), OrderError> {
    if quantity < 1 {
        return Err(OrderError::InvalidInput(format!(
            "quantity must be at least 1, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidInput(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Validate a unit price snapshot taken from the catalog
pub fn validate_unit_price(price: Decimal) -> Result<(), OrderError> {
    if price < Decimal::ZERO {
        return Err(OrderError::InvalidInput(format!(
            "unit price must be non-negative, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(OrderError::InvalidInput(format!(
            "unit price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    Ok(())
}

/// Line subtotal: quantity × unit price, rounded
#[inline]
pub fn line_subtotal(quantity: i32, unit_price: Decimal) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Recompute every line subtotal and the order total from scratch
///
/// Called inside the order's critical section after every line mutation.
pub fn recalculate_totals(order: &mut Order) {
    let mut total = Decimal::ZERO;
    for line in &mut order.items {
        line.subtotal = line_subtotal(line.quantity, line.unit_price);
        total += line.subtotal;
    }
    order.total = round_money(total);
}
