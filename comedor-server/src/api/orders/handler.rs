//! Orders API handlers
//!
//! Cart endpoints resolve the order through the operator's session
//! binding ([`Operator`] extractor); board and supervisor endpoints
//! address orders by id.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Order, OrderStatus, PaymentInput};
use shared::{AppError, ErrorCode};

use crate::api::Operator;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct StartOrderRequest {
    /// Student account the order is for, free-form
    pub student: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

fn parse_status(raw: &str) -> Result<OrderStatus, AppError> {
    raw.parse().map_err(|_| {
        AppError::with_message(ErrorCode::InvalidStatus, format!("Unknown status: {}", raw))
    })
}

/// POST /api/orders - Start a new order and bind it to the operator
pub async fn start(
    State(state): State<ServerState>,
    operator: Operator,
    Json(req): Json<StartOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = state.orders.start_order(operator.id(), req.student)?;
    Ok(Json(order))
}

/// GET /api/orders?status= - List orders, optionally filtered by status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    Ok(Json(state.orders.list_orders(status)))
}

/// GET /api/orders/current - The operator's bound order, 404 when none
pub async fn current(
    State(state): State<ServerState>,
    operator: Operator,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .current_order(operator.id())
        .ok_or_else(|| AppError::new(ErrorCode::NoActiveOrder))?;
    Ok(Json(order))
}

/// DELETE /api/orders/current - Drop the binding, abandoning the order
/// in place (still queryable by folio)
pub async fn clear_current(
    State(state): State<ServerState>,
    operator: Operator,
) -> Json<shared::ApiResponse<()>> {
    state.orders.clear_binding(operator.id());
    Json(shared::ApiResponse::ok())
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.get_order(&id)?))
}

/// GET /api/orders/by-folio/:folio
pub async fn by_folio(
    State(state): State<ServerState>,
    Path(folio): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.find_by_folio(&folio)?))
}

/// POST /api/orders/items - Add a product to the bound order
pub async fn add_item(
    State(state): State<ServerState>,
    operator: Operator,
    Json(req): Json<AddItemRequest>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .add_item(operator.id(), &req.product_id, req.quantity)?;
    Ok(Json(order))
}

/// DELETE /api/orders/items/:line_id - Remove a line from the bound order
pub async fn remove_item(
    State(state): State<ServerState>,
    operator: Operator,
    Path(line_id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.remove_item(operator.id(), &line_id)?))
}

/// POST /api/orders/checkout - PENDING_PAYMENT -> PAID
pub async fn checkout(
    State(state): State<ServerState>,
    operator: Operator,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.checkout(operator.id())?))
}

/// POST /api/orders/send-to-kitchen - PAID -> QUEUED, frees the session
pub async fn send_to_kitchen(
    State(state): State<ServerState>,
    operator: Operator,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.send_to_kitchen(operator.id())?))
}

/// PATCH /api/orders/:id/status - Kitchen board / supervisor status change
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<SetStatusRequest>,
) -> AppResult<Json<Order>> {
    let target = parse_status(&req.status)?;
    Ok(Json(state.orders.set_status(&id, target)?))
}

/// POST /api/orders/:id/payment - Attach the 1:1 payment record
pub async fn record_payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<PaymentInput>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.orders.record_payment(&id, input)?))
}
