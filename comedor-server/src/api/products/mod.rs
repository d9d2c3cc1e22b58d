//! Products API module
//!
//! Read side of the catalog for the point-of-sale terminal.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/products", get(handler::list))
}
