//! In-process order book
//!
//! Each order lives behind its own mutex so mutations on one order are
//! serialized without ever blocking work on another. The folio index is a
//! separate map whose atomic entry API is what makes folio claims
//! race-free; a duplicate claim surfaces as [`StoreError::FolioTaken`]
//! and the caller retries with the next counter value.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use shared::models::Order;
use std::sync::Arc;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Folio already taken: {0}")]
    FolioTaken(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

/// Per-day folio sequence state
struct FolioCounter {
    date: Option<NaiveDate>,
    next: u32,
}

/// Shared order store with per-order locking
pub struct OrderStore {
    /// Order id -> order, each behind its own lock
    orders: DashMap<String, Arc<Mutex<Order>>>,
    /// Folio -> order id uniqueness index
    folios: DashMap<String, String>,
    counter: Mutex<FolioCounter>,
    /// Business timezone for folio day boundaries
    tz: Tz,
}

impl OrderStore {
    pub fn new(tz: Tz) -> Self {
        Self {
            orders: DashMap::new(),
            folios: DashMap::new(),
            counter: Mutex::new(FolioCounter {
                date: None,
                next: 1,
            }),
            tz,
        }
    }

    /// Generate the next folio for today: `C<YYYYMMDD>-<seq>`
    ///
    /// The sequence resets at the business-day boundary, seeded from the
    /// count of orders already created today so a rollover never reuses
    /// a number.
    pub fn next_folio(&self) -> String {
        let today = Utc::now().with_timezone(&self.tz).date_naive();
        let mut counter = self.counter.lock();
        if counter.date != Some(today) {
            counter.date = Some(today);
            counter.next = self.count_created_on(today) as u32 + 1;
        }
        let folio = format!("C{}-{:04}", today.format("%Y%m%d"), counter.next);
        counter.next += 1;
        folio
    }

    fn count_created_on(&self, date: NaiveDate) -> usize {
        self.orders
            .iter()
            .filter(|entry| {
                entry.value().lock().created_at.with_timezone(&self.tz).date_naive() == date
            })
            .count()
    }

    /// Insert a new order, claiming its folio atomically
    pub fn insert(&self, order: Order) -> Result<Arc<Mutex<Order>>, StoreError> {
        match self.folios.entry(order.folio.clone()) {
            Entry::Occupied(_) => return Err(StoreError::FolioTaken(order.folio)),
            Entry::Vacant(slot) => {
                slot.insert(order.id.clone());
            }
        }
        let id = order.id.clone();
        let handle = Arc::new(Mutex::new(order));
        self.orders.insert(id, handle.clone());
        Ok(handle)
    }

    /// Get the lock handle for an order
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<Order>>> {
        self.orders.get(id).map(|entry| entry.value().clone())
    }

    /// Resolve an order by its folio
    pub fn find_by_folio(&self, folio: &str) -> Option<Arc<Mutex<Order>>> {
        let id = self.folios.get(folio)?.value().clone();
        self.get(&id)
    }

    /// Clone every order's current state
    ///
    /// Each clone is taken under that order's lock, so no snapshot ever
    /// exposes a half-applied mutation.
    pub fn snapshot_all(&self) -> Vec<Order> {
        self.orders
            .iter()
            .map(|entry| entry.value().lock().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
