//! Order Model
//!
//! An order owns its line items exclusively; `total` is always derived
//! from the lines and never set independently.

use super::payment::Payment;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order status lifecycle
///
/// The guided path is strictly sequential:
/// `PENDING_PAYMENT → PAID → QUEUED → IN_PREPARATION → READY → DELIVERED`.
/// The generic status-change action used by kitchen staff accepts any
/// enumerated target without sequence checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    PendingPayment,
    Paid,
    Queued,
    InPreparation,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// All enumerated statuses, in lifecycle order
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::PendingPayment,
        OrderStatus::Paid,
        OrderStatus::Queued,
        OrderStatus::InPreparation,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// Wire representation (SCREAMING_SNAKE_CASE)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Paid => "PAID",
            Self::Queued => "QUEUED",
            Self::InPreparation => "IN_PREPARATION",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
        }
    }

    /// Whether orders in this status appear on the kitchen board
    pub fn is_kitchen_active(&self) -> bool {
        matches!(self, Self::Queued | Self::InPreparation | Self::Ready)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status value
#[derive(Debug, Error)]
#[error("invalid order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_PAYMENT" => Ok(Self::PendingPayment),
            "PAID" => Ok(Self::Paid),
            "QUEUED" => Ok(Self::Queued),
            "IN_PREPARATION" => Ok(Self::InPreparation),
            "READY" => Ok(Self::Ready),
            "DELIVERED" => Ok(Self::Delivered),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One product-quantity-price entry within an order
///
/// `unit_price` and `product_name` are snapshots captured at add time;
/// later catalog changes never rewrite an existing line retroactively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub id: String,
    pub product_id: String,
    /// Product name snapshot (kitchen display resolves names from here)
    pub product_name: String,
    pub quantity: i32,
    /// Unit price snapshot captured from the catalog at add time
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Derived: quantity × unit_price, rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Order entity with its line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-readable unique code, date+sequence based
    pub folio: String,
    /// Operator identity that opened the order
    pub created_by: String,
    /// Optional student identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<String>,
    pub status: OrderStatus,
    /// Derived: sum of line subtotals, rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

impl Order {
    /// Create a new empty order in PENDING_PAYMENT
    pub fn new(
        folio: impl Into<String>,
        created_by: impl Into<String>,
        student: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            folio: folio.into(),
            created_by: created_by.into(),
            student,
            status: OrderStatus::PendingPayment,
            total: Decimal::ZERO,
            created_at: Utc::now(),
            items: Vec::new(),
            payment: None,
        }
    }

    /// Line items are only editable before payment
    pub fn is_editable(&self) -> bool {
        self.status == OrderStatus::PendingPayment
    }

    /// Find a line by owned product
    pub fn line_for_product(&mut self, product_id: &str) -> Option<&mut OrderLine> {
        self.items.iter_mut().find(|l| l.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("CANCELLED".parse::<OrderStatus>().is_err());
        assert!("pending_payment".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_kitchen_active_statuses() {
        assert!(OrderStatus::Queued.is_kitchen_active());
        assert!(OrderStatus::InPreparation.is_kitchen_active());
        assert!(OrderStatus::Ready.is_kitchen_active());
        assert!(!OrderStatus::PendingPayment.is_kitchen_active());
        assert!(!OrderStatus::Paid.is_kitchen_active());
        assert!(!OrderStatus::Delivered.is_kitchen_active());
    }

    #[test]
    fn test_new_order_is_empty_pending() {
        let order = Order::new("C20250825-0001", "cashier-1", None);
        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert!(order.items.is_empty());
        assert_eq!(order.total, Decimal::ZERO);
        assert!(order.is_editable());
    }
}
