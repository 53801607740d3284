//! Domain entities - core business objects

mod attribute;
mod category;
mod link;
mod product;
mod shop;
mod supplier;
mod user;

pub use attribute::{Attribute, AttributeDraft, ProductAttribute, ProductAttributeDraft};
pub use category::{Category, CategoryDraft};
pub use link::{Link, LinkDraft};
pub use product::{DynamicAttrs, Product, ProductDraft};
pub use shop::{Shop, ShopDraft};
pub use supplier::{Supplier, SupplierDraft};
pub use user::{User, UserDraft};
