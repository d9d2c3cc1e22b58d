//! Catalog Service - Product, category and daily menu management with
//! in-memory caching
//!
//! The order engine treats this as a read-only collaborator: it looks up
//! products (price, availability) and published menus. The mutators are
//! thin plumbing used to maintain the catalog; products referenced by
//! order lines are never removed, only marked unavailable.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{
    Category, CategoryCreate, MenuDay, MenuDayUpsert, Product, ProductCreate, ProductUpdate,
};
use shared::{AppError, ErrorCode};
use std::collections::HashMap;

/// Unified catalog service for products, categories and daily menus
pub struct CatalogService {
    /// Products cache: product id -> Product
    products: RwLock<HashMap<String, Product>>,
    /// Categories cache: category id -> Category
    categories: RwLock<HashMap<String, Category>>,
    /// Daily menus, keyed by calendar date
    menus: RwLock<HashMap<chrono::NaiveDate, MenuDay>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("products_count", &self.products.read().len())
            .field("categories_count", &self.categories.read().len())
            .field("menus_count", &self.menus.read().len())
            .finish()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            categories: RwLock::new(HashMap::new()),
            menus: RwLock::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Reads (the order engine's view)
    // =========================================================================

    /// Look up a product by id
    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.products.read().get(id).cloned()
    }

    /// All purchasable products, ordered by name
    pub fn list_available(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .read()
            .values()
            .filter(|p| p.available)
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    /// The published menu for a date, if any
    pub fn published_menu(&self, date: chrono::NaiveDate) -> Option<MenuDay> {
        self.menus.read().get(&date).filter(|m| m.published).cloned()
    }

    // =========================================================================
    // Mutators (catalog maintenance)
    // =========================================================================

    pub fn create_category(&self, payload: CategoryCreate) -> Category {
        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: payload.name,
            active: true,
        };
        self.categories
            .write()
            .insert(category.id.clone(), category.clone());
        category
    }

    pub fn create_product(&self, payload: ProductCreate) -> Result<Product, AppError> {
        validate_price(payload.price)?;
        if !self.categories.read().contains_key(&payload.category) {
            return Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", payload.category),
            )
            .with_detail("category", payload.category));
        }
        let product = Product {
            id: uuid::Uuid::new_v4().to_string(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            available: payload.available.unwrap_or(true),
        };
        self.products
            .write()
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    pub fn update_product(&self, id: &str, changes: ProductUpdate) -> Result<Product, AppError> {
        if let Some(price) = changes.price {
            validate_price(price)?;
        }
        if let Some(category) = &changes.category
            && !self.categories.read().contains_key(category)
        {
            return Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", category),
            )
            .with_detail("category", category.clone()));
        }

        let mut products = self.products.write();
        let product = products.get_mut(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
        })?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(available) = changes.available {
            product.available = available;
        }
        Ok(product.clone())
    }

    /// Upsert a daily menu; referenced products must exist
    pub fn upsert_menu(&self, payload: MenuDayUpsert) -> Result<MenuDay, AppError> {
        {
            let products = self.products.read();
            for product_id in payload.items.iter().chain(payload.featured.iter()) {
                if !products.contains_key(product_id) {
                    return Err(AppError::with_message(
                        ErrorCode::ProductNotFound,
                        format!("Product {} not found", product_id),
                    )
                    .with_detail("product_id", product_id.clone()));
                }
            }
        }
        let menu = MenuDay {
            date: payload.date,
            published: payload.published,
            items: payload.items,
            featured: payload.featured,
        };
        self.menus.write().insert(menu.date, menu.clone());
        tracing::info!(date = %menu.date, published = menu.published, "Menu upserted");
        Ok(menu)
    }
}

fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn seed(catalog: &CatalogService) -> Product {
        let category = catalog.create_category(CategoryCreate {
            name: "Bebidas".to_string(),
        });
        catalog
            .create_product(ProductCreate {
                name: "Agua".to_string(),
                category: category.id,
                price: Decimal::new(150, 2),
                available: Some(true),
            })
            .unwrap()
    }

    #[test]
    fn test_list_available_excludes_unavailable() {
        let catalog = CatalogService::new();
        let product = seed(&catalog);
        assert_eq!(catalog.list_available().len(), 1);

        catalog
            .update_product(
                &product.id,
                ProductUpdate {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(catalog.list_available().is_empty());
        // Still resolvable by id (order lines reference it)
        assert!(catalog.get_product(&product.id).is_some());
    }

    #[test]
    fn test_product_requires_known_category() {
        let catalog = CatalogService::new();
        let err = catalog
            .create_product(ProductCreate {
                name: "Orphan".to_string(),
                category: "missing".to_string(),
                price: Decimal::ONE,
                available: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.details.unwrap().get("category").unwrap(), "missing");
    }

    #[test]
    fn test_negative_price_rejected() {
        let catalog = CatalogService::new();
        let category = catalog.create_category(CategoryCreate {
            name: "Menu".to_string(),
        });
        let err = catalog
            .create_product(ProductCreate {
                name: "Bad".to_string(),
                category: category.id,
                price: Decimal::new(-100, 2),
                available: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_unpublished_menu_not_served() {
        let catalog = CatalogService::new();
        let product = seed(&catalog);
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();

        catalog
            .upsert_menu(MenuDayUpsert {
                date,
                items: vec![product.id.clone()],
                featured: vec![],
                published: false,
            })
            .unwrap();
        assert!(catalog.published_menu(date).is_none());

        catalog
            .upsert_menu(MenuDayUpsert {
                date,
                items: vec![product.id],
                featured: vec![],
                published: true,
            })
            .unwrap();
        assert!(catalog.published_menu(date).is_some());
    }
}
