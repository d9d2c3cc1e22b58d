use super::super::store::StoreError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Order engine errors
///
/// Every operation fails typed; nothing is partially applied. `Conflict`
/// is the only kind the engine may absorb internally (folio retry)
/// before surfacing it.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Product not available: {0}")]
    ProductUnavailable(String),

    #[error("Order has no items: {0}")]
    EmptyOrder(String),

    #[error("No active order for operator: {0}")]
    NoActiveOrder(String),

    #[error("Invalid payment amount: {0}")]
    InvalidPaymentAmount(String),

    #[error("Payment already recorded for order: {0}")]
    PaymentAlreadyRecorded(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::FolioTaken(folio) => {
                OrderError::Conflict(format!("folio already taken: {}", folio))
            }
            StoreError::OrderNotFound(id) => OrderError::OrderNotFound(id),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let (code, message) = match err {
            OrderError::InvalidInput(msg) => (ErrorCode::ValidationFailed, msg),
            OrderError::InvalidState(msg) => (ErrorCode::OrderInvalidState, msg),
            OrderError::OrderNotFound(id) => {
                (ErrorCode::OrderNotFound, format!("Order not found: {}", id))
            }
            OrderError::ItemNotFound(id) => (
                ErrorCode::OrderItemNotFound,
                format!("Order item not found: {}", id),
            ),
            OrderError::ProductNotFound(id) => (
                ErrorCode::ProductNotFound,
                format!("Product not found: {}", id),
            ),
            OrderError::ProductUnavailable(id) => (
                ErrorCode::ProductUnavailable,
                format!("Product not available: {}", id),
            ),
            OrderError::EmptyOrder(id) => {
                (ErrorCode::OrderEmpty, format!("Order has no items: {}", id))
            }
            OrderError::NoActiveOrder(operator) => (
                ErrorCode::NoActiveOrder,
                format!("No active order for operator: {}", operator),
            ),
            OrderError::InvalidPaymentAmount(msg) => (ErrorCode::PaymentInvalidAmount, msg),
            OrderError::PaymentAlreadyRecorded(id) => (
                ErrorCode::PaymentAlreadyRecorded,
                format!("Payment already recorded for order: {}", id),
            ),
            OrderError::Conflict(msg) => (ErrorCode::FolioConflict, msg),
        };
        AppError::with_message(code, message)
    }
}
