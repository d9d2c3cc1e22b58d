//! Kitchen Orders API module
//!
//! Read side for the kitchen display board.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/kitchen-orders", get(handler::list))
}
