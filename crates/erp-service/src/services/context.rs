//! Service context - dependency container for services
//!
//! Holds all repositories and the credential services needed by services.

use std::sync::Arc;

use erp_common::auth::{JwtService, PasswordService};
use erp_core::traits::{
    AttributeRepository, CategoryRepository, LinkRepository, ProductAttributeRepository,
    ProductRepository, ShopRepository, SupplierRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are trait objects, so the same services run against PostgreSQL
/// in production and against in-memory fakes in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    supplier_repo: Arc<dyn SupplierRepository>,
    shop_repo: Arc<dyn ShopRepository>,
    product_repo: Arc<dyn ProductRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    link_repo: Arc<dyn LinkRepository>,
    attribute_repo: Arc<dyn AttributeRepository>,
    product_attribute_repo: Arc<dyn ProductAttributeRepository>,

    // Credentials
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn supplier_repo(&self) -> &dyn SupplierRepository {
        self.supplier_repo.as_ref()
    }

    pub fn shop_repo(&self) -> &dyn ShopRepository {
        self.shop_repo.as_ref()
    }

    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    pub fn attribute_repo(&self) -> &dyn AttributeRepository {
        self.attribute_repo.as_ref()
    }

    pub fn product_attribute_repo(&self) -> &dyn ProductAttributeRepository {
        self.product_attribute_repo.as_ref()
    }

    // === Credentials ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    supplier_repo: Option<Arc<dyn SupplierRepository>>,
    shop_repo: Option<Arc<dyn ShopRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    link_repo: Option<Arc<dyn LinkRepository>>,
    attribute_repo: Option<Arc<dyn AttributeRepository>>,
    product_attribute_repo: Option<Arc<dyn ProductAttributeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<PasswordService>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn supplier_repo(mut self, repo: Arc<dyn SupplierRepository>) -> Self {
        self.supplier_repo = Some(repo);
        self
    }

    pub fn shop_repo(mut self, repo: Arc<dyn ShopRepository>) -> Self {
        self.shop_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn attribute_repo(mut self, repo: Arc<dyn AttributeRepository>) -> Self {
        self.attribute_repo = Some(repo);
        self
    }

    pub fn product_attribute_repo(mut self, repo: Arc<dyn ProductAttributeRepository>) -> Self {
        self.product_attribute_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// The password service falls back to its default; everything else is required.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            supplier_repo: required(self.supplier_repo, "supplier_repo")?,
            shop_repo: required(self.shop_repo, "shop_repo")?,
            product_repo: required(self.product_repo, "product_repo")?,
            category_repo: required(self.category_repo, "category_repo")?,
            link_repo: required(self.link_repo, "link_repo")?,
            attribute_repo: required(self.attribute_repo, "attribute_repo")?,
            product_attribute_repo: required(
                self.product_attribute_repo,
                "product_attribute_repo",
            )?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            password_service: self.password_service.unwrap_or_default(),
        })
    }
}
