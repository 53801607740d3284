//! # erp-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `erp-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations with soft delete and allow-listed list filters
//!
//! ## Usage
//!
//! ```rust,ignore
//! use erp_db::pool::{create_pool, default_migrations_dir, run_migrations, DatabaseConfig};
//! use erp_db::repositories::PgProductRepository;
//! use erp_core::traits::{ProductFilter, ProductRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, &default_migrations_dir()).await?;
//!
//!     let products = PgProductRepository::new(pool);
//!     let enabled = products
//!         .list(&ProductFilter { is_enabled: Some(true), ..Default::default() })
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, default_migrations_dir, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAttributeRepository, PgCategoryRepository, PgLinkRepository, PgProductAttributeRepository,
    PgProductRepository, PgShopRepository, PgSupplierRepository, PgUserRepository,
};
