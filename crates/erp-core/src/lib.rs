//! # erp-core
//!
//! Domain layer containing catalog entities, user accounts, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Attribute, AttributeDraft, Category, CategoryDraft, DynamicAttrs, Link, LinkDraft, Product,
    ProductAttribute, ProductAttributeDraft, ProductDraft, Shop, ShopDraft, Supplier,
    SupplierDraft, User, UserDraft,
};
pub use error::DomainError;
pub use traits::{
    AttributeFilter, AttributeRepository, CategoryFilter, CategoryRepository, LinkFilter,
    LinkRepository, ProductAttributeFilter, ProductAttributeRepository, ProductFilter,
    ProductRepository, RepoResult, ShopFilter, ShopRepository, SupplierRepository,
    UserRepository,
};
pub use value_objects::UserRole;
