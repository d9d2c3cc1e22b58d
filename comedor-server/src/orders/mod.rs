//! Order lifecycle core
//!
//! - [`money`] - decimal arithmetic and validation for totals
//! - [`store`] - in-process order book with per-order locking and the
//!   folio index
//! - [`manager`] - the [`OrdersManager`] driving every order operation

pub mod manager;
pub mod money;
pub mod store;

pub use manager::{OrderError, OrderResult, OrdersManager};
pub use store::OrderStore;
