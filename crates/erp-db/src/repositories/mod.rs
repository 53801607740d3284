//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in erp-core.
//! Each repository owns one table; every read filters out soft-deleted rows.

mod attribute;
mod category;
mod error;
mod link;
mod product;
mod shop;
mod supplier;
mod user;

pub use attribute::{PgAttributeRepository, PgProductAttributeRepository};
pub use category::PgCategoryRepository;
pub use link::PgLinkRepository;
pub use product::PgProductRepository;
pub use shop::PgShopRepository;
pub use supplier::PgSupplierRepository;
pub use user::PgUserRepository;
