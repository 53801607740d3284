//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attribute;
mod category;
mod link;
mod product;
mod shop;
mod supplier;
mod user;

pub use attribute::{AttributeModel, ProductAttributeModel};
pub use category::CategoryModel;
pub use link::LinkModel;
pub use product::ProductModel;
pub use shop::ShopModel;
pub use supplier::SupplierModel;
pub use user::UserModel;
