//! Daily Menu Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Published daily menu
///
/// One menu per calendar date. Students only ever see published menus;
/// the POS sells from the full product catalog regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDay {
    pub date: NaiveDate,
    pub published: bool,
    /// Product references (String IDs)
    pub items: Vec<String>,
    /// Featured subset shown first on the student view
    #[serde(default)]
    pub featured: Vec<String>,
}

/// Upsert payload for a daily menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDayUpsert {
    pub date: NaiveDate,
    pub items: Vec<String>,
    #[serde(default)]
    pub featured: Vec<String>,
    /// Publish immediately (default false, menu stays a draft)
    #[serde(default)]
    pub published: bool,
}
