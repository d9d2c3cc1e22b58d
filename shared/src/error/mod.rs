//! Unified error handling
//!
//! - [`ErrorCode`] - numeric error codes shared with clients
//! - [`AppError`] - application error carrying a code and message
//! - [`ApiResponse`] - the JSON envelope every endpoint returns

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError};
