//! Unified error codes for the comedor POS
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Product and menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,
    /// Caller supplied no operator identity
    OperatorMissing = 8,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order line item not found
    OrderItemNotFound = 4002,
    /// Order has no line items
    OrderEmpty = 4003,
    /// Operation not legal for the order's current status
    OrderInvalidState = 4004,
    /// Folio already taken by another order
    FolioConflict = 4005,
    /// No active order bound to this session
    NoActiveOrder = 4006,
    /// Invalid order status value
    InvalidStatus = 4007,

    // ==================== 5xxx: Payment ====================
    /// Payment amount invalid
    PaymentInvalidAmount = 5001,
    /// Payment already recorded for this order
    PaymentAlreadyRecorded = 5002,

    // ==================== 6xxx: Product / Menu ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product exists but is not purchasable
    ProductUnavailable = 6002,
    /// Category not found
    CategoryNotFound = 6003,
    /// No published menu for the requested date
    MenuNotPublished = 6004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::OperatorMissing => "Operator identity missing",
            Self::OrderNotFound => "Order not found",
            Self::OrderItemNotFound => "Order item not found",
            Self::OrderEmpty => "Order has no items",
            Self::OrderInvalidState => "Operation not allowed in current order status",
            Self::FolioConflict => "Folio already taken",
            Self::NoActiveOrder => "No active order for this session",
            Self::InvalidStatus => "Invalid order status",
            Self::PaymentInvalidAmount => "Invalid payment amount",
            Self::PaymentAlreadyRecorded => "Payment already recorded",
            Self::ProductNotFound => "Product not found",
            Self::ProductUnavailable => "Product not available",
            Self::CategoryNotFound => "Category not found",
            Self::MenuNotPublished => "No published menu",
            Self::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::RequiredField),
            7 => Ok(Self::ValueOutOfRange),
            8 => Ok(Self::OperatorMissing),
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::OrderItemNotFound),
            4003 => Ok(Self::OrderEmpty),
            4004 => Ok(Self::OrderInvalidState),
            4005 => Ok(Self::FolioConflict),
            4006 => Ok(Self::NoActiveOrder),
            4007 => Ok(Self::InvalidStatus),
            5001 => Ok(Self::PaymentInvalidAmount),
            5002 => Ok(Self::PaymentAlreadyRecorded),
            6001 => Ok(Self::ProductNotFound),
            6002 => Ok(Self::ProductUnavailable),
            6003 => Ok(Self::CategoryNotFound),
            6004 => Ok(Self::MenuNotPublished),
            9001 => Ok(Self::InternalError),
            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::OrderEmpty,
            ErrorCode::FolioConflict,
            ErrorCode::ProductUnavailable,
            ErrorCode::InternalError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(1234).is_err());
    }
}
