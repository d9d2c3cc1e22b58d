//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`products`] - catalog reads
//! - [`menu`] - published menu of the day
//! - [`orders`] - order lifecycle and cart operations
//! - [`kitchen_orders`] - kitchen display queue

pub mod health;
pub mod kitchen_orders;
pub mod menu;
pub mod orders;
pub mod products;

mod operator;
pub use operator::Operator;
