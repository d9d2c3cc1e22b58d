//! Shared domain types for the comedor POS
//!
//! This crate holds the pieces both the server and any future client need:
//! - [`models`] - catalog, menu, order and payment entities
//! - [`error`] - unified error codes, `AppError` and the API envelope

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, ErrorCode};
