//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod attribute;
pub mod auth;
pub mod category;
pub mod context;
pub mod error;
pub mod link;
pub mod product;
pub mod seed;
pub mod shop;
pub mod supplier;
pub mod user;

#[cfg(test)]
pub(crate) mod memory;

// Re-export all services for convenience
pub use attribute::{AttributeService, ProductAttributeService};
pub use auth::AuthService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use link::LinkService;
pub use product::ProductService;
pub use seed::seed_admin;
pub use shop::ShopService;
pub use supplier::SupplierService;
pub use user::UserService;
