//! Domain models for the comedor POS

mod category;
mod menu;
mod order;
mod payment;
mod product;

pub use category::{Category, CategoryCreate};
pub use menu::{MenuDay, MenuDayUpsert};
pub use order::{Order, OrderLine, OrderStatus, ParseStatusError};
pub use payment::{Payment, PaymentInput, PaymentMethod};
pub use product::{Product, ProductCreate, ProductUpdate};
