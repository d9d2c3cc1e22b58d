//! Category Model

use serde::{Deserialize, Serialize};

/// Product category
///
/// Categories referenced by products are never hard-deleted, only
/// deactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub active: bool,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}
