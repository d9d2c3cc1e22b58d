//! Shared utilities
//!
//! - [`AppError`] / [`ApiResponse`] re-exported from `shared::error`
//! - [`logger`] - tracing setup
//! - [`result`] - common Result aliases

pub mod logger;
pub mod result;

pub use result::AppResult;
pub use shared::{ApiResponse, AppError, ErrorCode};
