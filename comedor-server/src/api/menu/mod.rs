//! Menu API module
//!
//! Exposes the published menu for the current business day.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu/today", get(handler::today))
}
