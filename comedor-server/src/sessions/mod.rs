//! Cart session bindings
//!
//! Maps an operator session to at most one in-progress (pre-payment)
//! order. The binding is an explicit key-value association rather than
//! ambient session state; one operator drives one session serially, so
//! last-write-wins is acceptable for the binding itself.

use dashmap::DashMap;

/// Operator session -> active order id
#[derive(Debug, Default)]
pub struct CartSessions {
    bindings: DashMap<String, String>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }

    /// Bind an operator to an order, replacing any previous binding
    ///
    /// A previously bound unfinished order is abandoned in place; it
    /// stays in the store and remains queryable by folio.
    pub fn bind(&self, operator_id: &str, order_id: &str) {
        if let Some(previous) = self
            .bindings
            .insert(operator_id.to_string(), order_id.to_string())
            && previous != order_id
        {
            tracing::info!(
                operator_id = %operator_id,
                abandoned_order_id = %previous,
                "Previous active order abandoned by rebind"
            );
        }
    }

    /// The order id currently bound to this operator, if any
    pub fn current(&self, operator_id: &str) -> Option<String> {
        self.bindings.get(operator_id).map(|entry| entry.value().clone())
    }

    /// Remove the operator's binding
    pub fn clear(&self, operator_id: &str) {
        self.bindings.remove(operator_id);
    }

    /// Clear the binding only if it points at the given order
    ///
    /// Used when an order leaves PENDING_PAYMENT: the operator may have
    /// already rebound to a newer order, which must not be disturbed.
    pub fn clear_if_bound_to(&self, operator_id: &str, order_id: &str) {
        self.bindings
            .remove_if(operator_id, |_, bound| bound == order_id);
    }
}
