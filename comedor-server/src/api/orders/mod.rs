//! Orders API module
//!
//! REST endpoints for the order lifecycle:
//! - start / inspect the operator's current order
//! - cart mutations (add / remove line items)
//! - checkout, send to kitchen
//! - status changes and the payment record

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::start).get(handler::list))
        .route(
            "/current",
            get(handler::current).delete(handler::clear_current),
        )
        .route("/by-folio/{folio}", get(handler::by_folio))
        .route("/items", post(handler::add_item))
        .route("/items/{line_id}", delete(handler::remove_item))
        .route("/checkout", post(handler::checkout))
        .route("/send-to-kitchen", post(handler::send_to_kitchen))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::set_status))
        .route("/{id}/payment", post(handler::record_payment))
}
