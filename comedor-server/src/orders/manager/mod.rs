//! OrdersManager - order lifecycle and cart/total consistency engine
//!
//! Every externally triggered operation runs as one short synchronous
//! unit of work under the target order's own mutex:
//!
//! ```text
//! operation(args)
//!     ├─ 1. Validate arguments (no locks held)
//!     ├─ 2. Resolve the order handle (session binding or id)
//!     ├─ 3. Lock the order
//!     ├─ 4. Check status preconditions
//!     ├─ 5. Mutate lines / status
//!     ├─ 6. Recompute subtotals and total from scratch
//!     └─ 7. Clone the result out of the lock
//! ```
//!
//! Steps 3-7 are what make concurrent adds of the same product merge into
//! one line (no lost update, no duplicate row) and keep `total` equal to
//! the sum of line subtotals at every observable point.

mod error;
pub use error::*;

use super::money;
use super::store::{OrderStore, StoreError};
use crate::catalog::CatalogService;
use crate::sessions::CartSessions;
use chrono::Utc;
use chrono_tz::Tz;
use parking_lot::Mutex;
use shared::models::{Order, OrderLine, OrderStatus, Payment, PaymentInput};
use std::sync::Arc;

/// Folio collisions are retried with the next counter value this many
/// times before the conflict surfaces to the caller
const FOLIO_RETRY_LIMIT: u32 = 3;

/// Order engine: owns the store, the session bindings and the status
/// machine
pub struct OrdersManager {
    store: OrderStore,
    sessions: CartSessions,
    catalog: Arc<CatalogService>,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("orders", &self.store.len())
            .finish()
    }
}

impl OrdersManager {
    pub fn new(catalog: Arc<CatalogService>, tz: Tz) -> Self {
        Self {
            store: OrderStore::new(tz),
            sessions: CartSessions::new(),
            catalog,
        }
    }

    // =========================================================================
    // Cart session binding
    // =========================================================================

    /// Open a fresh PENDING_PAYMENT order and bind it to the operator's
    /// session
    ///
    /// Rebinds unconditionally; a previous unfinished order is abandoned
    /// in place and stays queryable by folio. A folio collision is
    /// retried with the next counter value before surfacing as a
    /// conflict.
    pub fn start_order(
        &self,
        operator_id: &str,
        student: Option<String>,
    ) -> OrderResult<Order> {
        for _ in 0..FOLIO_RETRY_LIMIT {
            let folio = self.store.next_folio();
            let order = Order::new(folio, operator_id, student.clone());
            match self.store.insert(order) {
                Ok(handle) => {
                    let order = handle.lock().clone();
                    self.sessions.bind(operator_id, &order.id);
                    tracing::info!(
                        order_id = %order.id,
                        folio = %order.folio,
                        operator_id = %operator_id,
                        "Order started"
                    );
                    return Ok(order);
                }
                Err(StoreError::FolioTaken(folio)) => {
                    tracing::warn!(folio = %folio, "Folio collision, retrying with next value");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(OrderError::Conflict(
            "could not allocate a unique folio".to_string(),
        ))
    }

    /// The operator's bound order with its line items, or None
    pub fn current_order(&self, operator_id: &str) -> Option<Order> {
        let order_id = self.sessions.current(operator_id)?;
        match self.store.get(&order_id) {
            Some(handle) => Some(handle.lock().clone()),
            None => {
                // Stale binding; drop it
                self.sessions.clear_if_bound_to(operator_id, &order_id);
                None
            }
        }
    }

    /// Drop the operator's binding without touching the order
    pub fn clear_binding(&self, operator_id: &str) {
        self.sessions.clear(operator_id);
    }

    fn active_order(&self, operator_id: &str) -> OrderResult<Arc<Mutex<Order>>> {
        let order_id = self
            .sessions
            .current(operator_id)
            .ok_or_else(|| OrderError::NoActiveOrder(operator_id.to_string()))?;
        self.store
            .get(&order_id)
            .ok_or(OrderError::OrderNotFound(order_id))
    }

    // =========================================================================
    // Cart mutations (pre-payment only)
    // =========================================================================

    /// Add a product to the bound order, merging into an existing line
    ///
    /// A repeated add of the same product increments the line's quantity
    /// and refreshes its price snapshot to the product's current price;
    /// other lines keep their original snapshots.
    pub fn add_item(
        &self,
        operator_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> OrderResult<Order> {
        money::validate_quantity(quantity)?;

        let product = self
            .catalog
            .get_product(product_id)
            .ok_or_else(|| OrderError::ProductNotFound(product_id.to_string()))?;
        if !product.available {
            return Err(OrderError::ProductUnavailable(product_id.to_string()));
        }
        money::validate_unit_price(product.price)?;

        let handle = self.active_order(operator_id)?;
        let mut order = handle.lock();
        require_editable(&order)?;

        match order.line_for_product(product_id) {
            Some(line) => {
                // The bound holds for the merged line, not just the increment
                let merged = line.quantity + quantity;
                money::validate_quantity(merged)?;
                line.quantity = merged;
                line.unit_price = product.price;
            }
            None => {
                let line = OrderLine {
                    id: uuid::Uuid::new_v4().to_string(),
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    subtotal: rust_decimal::Decimal::ZERO,
                };
                order.items.push(line);
            }
        }
        money::recalculate_totals(&mut order);

        tracing::debug!(
            order_id = %order.id,
            product_id = %product_id,
            quantity,
            total = %order.total,
            "Item added"
        );
        Ok(order.clone())
    }

    /// Remove a line from the bound order
    pub fn remove_item(&self, operator_id: &str, line_id: &str) -> OrderResult<Order> {
        let handle = self.active_order(operator_id)?;
        let mut order = handle.lock();
        require_editable(&order)?;

        let idx = order
            .items
            .iter()
            .position(|l| l.id == line_id)
            .ok_or_else(|| OrderError::ItemNotFound(line_id.to_string()))?;
        order.items.remove(idx);
        money::recalculate_totals(&mut order);

        tracing::debug!(order_id = %order.id, line_id = %line_id, "Item removed");
        Ok(order.clone())
    }

    // =========================================================================
    // State machine
    // =========================================================================

    /// Checkout: PENDING_PAYMENT with at least one item -> PAID
    pub fn checkout(&self, operator_id: &str) -> OrderResult<Order> {
        let handle = self.active_order(operator_id)?;
        let mut order = handle.lock();
        if order.status != OrderStatus::PendingPayment {
            return Err(OrderError::InvalidState(format!(
                "order {} cannot be checked out from {}",
                order.id, order.status
            )));
        }
        if order.items.is_empty() {
            return Err(OrderError::EmptyOrder(order.id.clone()));
        }
        order.status = OrderStatus::Paid;
        tracing::info!(order_id = %order.id, folio = %order.folio, total = %order.total, "Order paid");
        Ok(order.clone())
    }

    /// Send to kitchen: PAID -> QUEUED; clears the operator's binding
    pub fn send_to_kitchen(&self, operator_id: &str) -> OrderResult<Order> {
        let handle = self.active_order(operator_id)?;
        let order = {
            let mut order = handle.lock();
            if order.status != OrderStatus::Paid {
                return Err(OrderError::InvalidState(format!(
                    "order {} must be PAID to send to kitchen, is {}",
                    order.id, order.status
                )));
            }
            order.status = OrderStatus::Queued;
            order.clone()
        };
        self.sessions.clear_if_bound_to(operator_id, &order.id);
        tracing::info!(order_id = %order.id, folio = %order.folio, "Order queued for kitchen");
        Ok(order)
    }

    /// Generic status change used by kitchen staff and supervisors
    ///
    /// Accepts any enumerated target from any current state, by design;
    /// the kitchen board may move QUEUED straight to READY. Only the
    /// guided `checkout`/`send_to_kitchen` actions enforce sequence.
    pub fn set_status(&self, order_id: &str, target: OrderStatus) -> OrderResult<Order> {
        let handle = self
            .store
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        let (order, previous) = {
            let mut order = handle.lock();
            let previous = order.status;
            order.status = target;
            (order.clone(), previous)
        };
        // The cashier's binding must not survive an order moving past the
        // cart phase under it (supervisor correction, kitchen action)
        if !matches!(target, OrderStatus::PendingPayment | OrderStatus::Paid) {
            self.sessions.clear_if_bound_to(&order.created_by, &order.id);
        }
        tracing::info!(
            order_id = %order.id,
            from = %previous,
            to = %target,
            "Order status changed"
        );
        Ok(order)
    }

    // =========================================================================
    // Payment record
    // =========================================================================

    /// Attach the 1:1 payment record to a paid order
    pub fn record_payment(&self, order_id: &str, input: PaymentInput) -> OrderResult<Order> {
        if input.amount <= rust_decimal::Decimal::ZERO {
            return Err(OrderError::InvalidPaymentAmount(format!(
                "payment amount must be positive, got {}",
                input.amount
            )));
        }
        let handle = self
            .store
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        let mut order = handle.lock();
        if order.status == OrderStatus::PendingPayment {
            return Err(OrderError::InvalidState(format!(
                "order {} is not paid yet",
                order.id
            )));
        }
        if order.payment.is_some() {
            return Err(OrderError::PaymentAlreadyRecorded(order.id.clone()));
        }
        order.payment = Some(Payment {
            method: input.method,
            amount: money::round_money(input.amount),
            recorded_at: Utc::now(),
        });
        tracing::info!(order_id = %order.id, method = ?input.method, amount = %input.amount, "Payment recorded");
        Ok(order.clone())
    }

    // =========================================================================
    // Read projections
    // =========================================================================

    /// Kitchen queue: QUEUED / IN_PREPARATION / READY, oldest first
    pub fn kitchen_queue(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .store
            .snapshot_all()
            .into_iter()
            .filter(|o| o.status.is_kitchen_active())
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.folio.cmp(&b.folio)));
        orders
    }

    /// Reporting read: all orders, optionally filtered by status, oldest
    /// first
    pub fn list_orders(&self, status: Option<OrderStatus>) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .store
            .snapshot_all()
            .into_iter()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.folio.cmp(&b.folio)));
        orders
    }

    pub fn get_order(&self, order_id: &str) -> OrderResult<Order> {
        self.store
            .get(order_id)
            .map(|handle| handle.lock().clone())
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    pub fn order_count(&self) -> usize {
        self.store.len()
    }

    pub fn find_by_folio(&self, folio: &str) -> OrderResult<Order> {
        self.store
            .find_by_folio(folio)
            .map(|handle| handle.lock().clone())
            .ok_or_else(|| OrderError::OrderNotFound(folio.to_string()))
    }
}

fn require_editable(order: &Order) -> OrderResult<()> {
    if !order.is_editable() {
        return Err(OrderError::InvalidState(format!(
            "order {} is {}, line items are only editable in PENDING_PAYMENT",
            order.id, order.status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
