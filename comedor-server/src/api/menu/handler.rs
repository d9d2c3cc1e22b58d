//! Menu API handlers

use axum::{Json, extract::State};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared::models::Product;
use shared::{AppError, ErrorCode};

use crate::core::ServerState;
use crate::utils::AppResult;

/// Menu of the day, resolved to full product records
#[derive(Debug, Serialize)]
pub struct MenuTodayResponse {
    pub date: NaiveDate,
    /// Product ids highlighted first on the student view
    pub featured: Vec<String>,
    pub products: Vec<Product>,
}

/// GET /api/menu/today - The published menu for the current business day
///
/// 404 when no menu has been published for today. Unavailable products
/// are filtered out of the listing.
pub async fn today(State(state): State<ServerState>) -> AppResult<Json<MenuTodayResponse>> {
    let today = Utc::now().with_timezone(&state.config.timezone).date_naive();
    let menu = state.catalog.published_menu(today).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::MenuNotPublished,
            format!("No menu published for {}", today),
        )
    })?;

    let products: Vec<Product> = menu
        .items
        .iter()
        .filter_map(|id| state.catalog.get_product(id))
        .filter(|p| p.available)
        .collect();

    Ok(Json(MenuTodayResponse {
        date: menu.date,
        featured: menu.featured,
        products,
    }))
}
