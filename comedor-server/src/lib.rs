//! Comedor POS server
//!
//! Cafeteria point-of-sale and kitchen-display backend. The interesting
//! part lives in [`orders`]: the order lifecycle, cart/total consistency
//! and the status machine. Everything around it (catalog, sessions, HTTP
//! surface) is thin plumbing over that core.

pub mod api;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod routes;
pub mod sessions;
pub mod utils;
