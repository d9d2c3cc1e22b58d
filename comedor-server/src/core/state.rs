//! Shared server state

use crate::catalog::CatalogService;
use crate::core::Config;
use crate::orders::OrdersManager;
use std::sync::Arc;

/// Handles shared across all request handlers
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrdersManager>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(CatalogService::new());
        let orders = Arc::new(OrdersManager::new(catalog.clone(), config.timezone));
        Self {
            config: Arc::new(config),
            catalog,
            orders,
        }
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .finish()
    }
}
