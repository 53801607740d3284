//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Every lookup and listing excludes soft-deleted rows. Mutations that address a
//! row which is absent or already deleted fail with [`DomainError::NotFound`].

use async_trait::async_trait;

use super::filters::{
    AttributeFilter, CategoryFilter, LinkFilter, ProductAttributeFilter, ProductFilter, ShopFilter,
};
use crate::entities::{
    Attribute, AttributeDraft, Category, CategoryDraft, Link, LinkDraft, Product,
    ProductAttribute, ProductAttributeDraft, ProductDraft, Shop, ShopDraft, Supplier,
    SupplierDraft, User, UserDraft,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by login name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;

    /// Check if a live user already uses this name
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Check if a live user already uses this email
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List all live users in insertion order
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Count live users
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new user with an already hashed password
    async fn create(&self, draft: &UserDraft, password_hash: &str) -> RepoResult<User>;

    /// Overwrite the mutable fields of an existing user
    async fn update(&self, id: i64, draft: &UserDraft) -> RepoResult<User>;

    /// Soft delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Supplier Repository
// ============================================================================

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Supplier>>;

    async fn list(&self) -> RepoResult<Vec<Supplier>>;

    async fn create(&self, draft: &SupplierDraft) -> RepoResult<Supplier>;

    async fn update(&self, id: i64, draft: &SupplierDraft) -> RepoResult<Supplier>;

    /// Soft delete a supplier
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Flip `is_enabled` and return the updated row
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Supplier>;
}

// ============================================================================
// Shop Repository
// ============================================================================

#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Shop>>;

    async fn list(&self, filter: &ShopFilter) -> RepoResult<Vec<Shop>>;

    async fn create(&self, draft: &ShopDraft) -> RepoResult<Shop>;

    async fn update(&self, id: i64, draft: &ShopDraft) -> RepoResult<Shop>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Shop>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    /// List live products matching the filter
    async fn list(&self, filter: &ProductFilter) -> RepoResult<Vec<Product>>;

    /// Check if a live product other than `exclude_id` already uses this SKU
    async fn sku_exists(&self, sku: &str, exclude_id: Option<i64>) -> RepoResult<bool>;

    async fn create(&self, draft: &ProductDraft) -> RepoResult<Product>;

    async fn update(&self, id: i64, draft: &ProductDraft) -> RepoResult<Product>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Product>;

    /// Overwrite the stock level only
    async fn update_stock(&self, id: i64, stock: i32) -> RepoResult<Product>;

    /// Overwrite the price only
    async fn update_price(&self, id: i64, price: f64) -> RepoResult<Product>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>>;

    async fn list(&self, filter: &CategoryFilter) -> RepoResult<Vec<Category>>;

    /// List live categories whose parent is `parent_id`
    async fn find_children(&self, parent_id: i64) -> RepoResult<Vec<Category>>;

    /// Count live categories whose parent is `parent_id`
    async fn count_children(&self, parent_id: i64) -> RepoResult<i64>;

    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category>;

    async fn update(&self, id: i64, draft: &CategoryDraft) -> RepoResult<Category>;

    /// Soft delete a category. Does not check for children.
    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Category>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Link>>;

    async fn list(&self, filter: &LinkFilter) -> RepoResult<Vec<Link>>;

    async fn create(&self, draft: &LinkDraft) -> RepoResult<Link>;

    async fn update(&self, id: i64, draft: &LinkDraft) -> RepoResult<Link>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Link>;
}

// ============================================================================
// Attribute Repository
// ============================================================================

#[async_trait]
pub trait AttributeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attribute>>;

    async fn list(&self, filter: &AttributeFilter) -> RepoResult<Vec<Attribute>>;

    async fn create(&self, draft: &AttributeDraft) -> RepoResult<Attribute>;

    async fn update(&self, id: i64, draft: &AttributeDraft) -> RepoResult<Attribute>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Attribute>;
}

// ============================================================================
// Product Attribute Repository
// ============================================================================

#[async_trait]
pub trait ProductAttributeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductAttribute>>;

    async fn list(&self, filter: &ProductAttributeFilter) -> RepoResult<Vec<ProductAttribute>>;

    async fn create(&self, draft: &ProductAttributeDraft) -> RepoResult<ProductAttribute>;

    async fn update(&self, id: i64, draft: &ProductAttributeDraft)
        -> RepoResult<ProductAttribute>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}
