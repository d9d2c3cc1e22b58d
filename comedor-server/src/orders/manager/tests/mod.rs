use super::*;
use crate::catalog::CatalogService;
use rust_decimal::Decimal;
use shared::models::{CategoryCreate, PaymentMethod, Product, ProductCreate, ProductUpdate};

mod test_boundary;
mod test_concurrency;

// ========================================================================
// Helpers
// ========================================================================

fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn test_manager() -> (Arc<CatalogService>, OrdersManager) {
    let catalog = Arc::new(CatalogService::new());
    let manager = OrdersManager::new(catalog.clone(), chrono_tz::Europe::Madrid);
    (catalog, manager)
}

fn seed_product(catalog: &CatalogService, name: &str, price: Decimal) -> Product {
    let category = catalog.create_category(CategoryCreate {
        name: format!("cat-{}", name),
    });
    catalog
        .create_product(ProductCreate {
            name: name.to_string(),
            category: category.id,
            price,
            available: Some(true),
        })
        .unwrap()
}

fn set_price(catalog: &CatalogService, product_id: &str, price: Decimal) {
    catalog
        .update_product(
            product_id,
            ProductUpdate {
                price: Some(price),
                ..Default::default()
            },
        )
        .unwrap();
}

fn set_available(catalog: &CatalogService, product_id: &str, available: bool) {
    catalog
        .update_product(
            product_id,
            ProductUpdate {
                available: Some(available),
                ..Default::default()
            },
        )
        .unwrap();
}

/// Start an order for the operator and add the given (product, quantity)
/// pairs
fn start_with_items(
    manager: &OrdersManager,
    operator: &str,
    items: &[(&str, i32)],
) -> Order {
    let mut order = manager.start_order(operator, None).unwrap();
    for (product_id, quantity) in items {
        order = manager.add_item(operator, product_id, *quantity).unwrap();
    }
    order
}
