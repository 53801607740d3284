//! Product service
//!
//! CRUD for products plus the stock and price patches. SKUs are unique among
//! live products; the storage index is authoritative and the service pre-checks
//! to report a readable conflict.

use erp_core::{Product, ProductDraft, ProductFilter};
use tracing::{info, instrument};

use crate::dto::{
    CreateProductRequest, ProductResponse, UpdatePriceRequest, UpdateProductRequest,
    UpdateStockRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List live products matching the filter, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ProductFilter) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list(filter).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ProductResponse> {
        self.load(id).await.map(ProductResponse::from)
    }

    /// Create a product
    #[instrument(skip(self, request), fields(sku = %request.sku))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<ProductResponse> {
        let draft = ProductDraft::from(request);
        self.ensure_sku_free(&draft.sku, None).await?;

        let product = self.ctx.product_repo().create(&draft).await?;

        info!(product_id = product.id, sku = %product.sku, "Product created");

        Ok(ProductResponse::from(product))
    }

    /// Update a product, keeping fields the request omits
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        let current = self.load(id).await?;
        let mut draft = current.draft();
        request.apply_to(&mut draft);

        if draft.sku != current.sku {
            self.ensure_sku_free(&draft.sku, Some(id)).await?;
        }

        let product = self.ctx.product_repo().update(id, &draft).await?;

        info!(product_id = id, "Product updated");

        Ok(ProductResponse::from(product))
    }

    /// Soft-delete a product
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.product_repo().delete(id).await?;
        info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Flip `is_enabled`
    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<ProductResponse> {
        let product = self.ctx.product_repo().toggle_enabled(id).await?;
        info!(product_id = id, is_enabled = product.is_enabled, "Product toggled");
        Ok(ProductResponse::from(product))
    }

    /// Overwrite the stock level
    #[instrument(skip(self))]
    pub async fn update_stock(
        &self,
        id: i64,
        request: UpdateStockRequest,
    ) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .update_stock(id, request.stock)
            .await?;
        info!(product_id = id, stock = product.stock, "Product stock updated");
        Ok(ProductResponse::from(product))
    }

    /// Overwrite the unit price
    #[instrument(skip(self))]
    pub async fn update_price(
        &self,
        id: i64,
        request: UpdatePriceRequest,
    ) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .update_price(id, request.price)
            .await?;
        info!(product_id = id, price = product.price, "Product price updated");
        Ok(ProductResponse::from(product))
    }

    async fn load(&self, id: i64) -> ServiceResult<Product> {
        self.ctx
            .product_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    async fn ensure_sku_free(&self, sku: &str, exclude_id: Option<i64>) -> ServiceResult<()> {
        if self.ctx.product_repo().sku_exists(sku, exclude_id).await? {
            return Err(ServiceError::conflict(format!("SKU '{sku}' already exists")));
        }
        Ok(())
    }
}
