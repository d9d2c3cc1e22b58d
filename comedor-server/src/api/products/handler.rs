//! Products API handlers

use axum::{Json, extract::State};
use shared::models::Product;

use crate::core::ServerState;

/// GET /api/products - Available products, sorted by name
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_available())
}
