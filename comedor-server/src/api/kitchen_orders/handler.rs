//! Kitchen Orders API handlers

use axum::{Json, extract::State};
use shared::models::Order;

use crate::core::ServerState;

/// GET /api/kitchen-orders - Active kitchen queue, oldest first
///
/// QUEUED, IN_PREPARATION and READY orders only; the board polls this
/// and drives status changes through `PATCH /api/orders/:id/status`.
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.kitchen_queue())
}
