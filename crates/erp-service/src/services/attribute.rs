//! Attribute services
//!
//! `AttributeService` manages attribute definitions attached to categories;
//! `ProductAttributeService` manages the concrete values products carry for them.

use erp_core::{
    Attribute, AttributeDraft, AttributeFilter, ProductAttribute, ProductAttributeDraft,
    ProductAttributeFilter,
};
use tracing::{info, instrument};

use crate::dto::{
    AttributeResponse, CreateAttributeRequest, CreateProductAttributeRequest,
    ProductAttributeResponse, UpdateAttributeRequest, UpdateProductAttributeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

// ============================================================================
// Attribute definitions
// ============================================================================

/// Attribute definition service
pub struct AttributeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttributeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: &AttributeFilter) -> ServiceResult<Vec<AttributeResponse>> {
        let attributes = self.ctx.attribute_repo().list(filter).await?;
        Ok(attributes.iter().map(AttributeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<AttributeResponse> {
        self.load(id).await.map(AttributeResponse::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreateAttributeRequest,
    ) -> ServiceResult<AttributeResponse> {
        let draft = AttributeDraft::from(request);
        let attribute = self.ctx.attribute_repo().create(&draft).await?;

        info!(attribute_id = attribute.id, category_id = attribute.category_id, "Attribute created");

        Ok(AttributeResponse::from(attribute))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateAttributeRequest,
    ) -> ServiceResult<AttributeResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        let attribute = self.ctx.attribute_repo().update(id, &draft).await?;

        info!(attribute_id = id, "Attribute updated");

        Ok(AttributeResponse::from(attribute))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.attribute_repo().delete(id).await?;
        info!(attribute_id = id, "Attribute deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<AttributeResponse> {
        let attribute = self.ctx.attribute_repo().toggle_enabled(id).await?;
        info!(attribute_id = id, is_enabled = attribute.is_enabled, "Attribute toggled");
        Ok(AttributeResponse::from(attribute))
    }

    async fn load(&self, id: i64) -> ServiceResult<Attribute> {
        self.ctx
            .attribute_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Attribute", id))
    }
}

// ============================================================================
// Product attribute values
// ============================================================================

/// Product attribute value service. Values have no enabled flag.
pub struct ProductAttributeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductAttributeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        filter: &ProductAttributeFilter,
    ) -> ServiceResult<Vec<ProductAttributeResponse>> {
        let values = self.ctx.product_attribute_repo().list(filter).await?;
        Ok(values.into_iter().map(ProductAttributeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ProductAttributeResponse> {
        self.load(id).await.map(ProductAttributeResponse::from)
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateProductAttributeRequest,
    ) -> ServiceResult<ProductAttributeResponse> {
        let draft = ProductAttributeDraft::from(request);
        let value = self.ctx.product_attribute_repo().create(&draft).await?;

        info!(
            product_attribute_id = value.id,
            product_id = value.product_id,
            attribute_id = value.attribute_id,
            "Product attribute created"
        );

        Ok(ProductAttributeResponse::from(value))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateProductAttributeRequest,
    ) -> ServiceResult<ProductAttributeResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        let value = self.ctx.product_attribute_repo().update(id, &draft).await?;

        info!(product_attribute_id = id, "Product attribute updated");

        Ok(ProductAttributeResponse::from(value))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.product_attribute_repo().delete(id).await?;
        info!(product_attribute_id = id, "Product attribute deleted");
        Ok(())
    }

    async fn load(&self, id: i64) -> ServiceResult<ProductAttribute> {
        self.ctx
            .product_attribute_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ProductAttribute", id))
    }
}
