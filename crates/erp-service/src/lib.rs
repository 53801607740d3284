//! # erp-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] holding the repository ports and the
//! credential services, so the same use cases run against PostgreSQL or against
//! in-memory fakes.

pub mod dto;
pub mod services;

pub use services::{
    seed_admin, AttributeService, AuthService, CategoryService, LinkService,
    ProductAttributeService, ProductService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, ShopService, SupplierService, UserService,
};
