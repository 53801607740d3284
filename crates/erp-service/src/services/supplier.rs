//! Supplier service

use erp_core::{Supplier, SupplierDraft};
use tracing::{info, instrument};

use crate::dto::{CreateSupplierRequest, SupplierResponse, UpdateSupplierRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Supplier service
pub struct SupplierService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SupplierService<'a> {
    /// Create a new SupplierService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List live suppliers in insertion order
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SupplierResponse>> {
        let suppliers = self.ctx.supplier_repo().list().await?;
        Ok(suppliers.iter().map(SupplierResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<SupplierResponse> {
        self.load(id).await.map(SupplierResponse::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateSupplierRequest) -> ServiceResult<SupplierResponse> {
        let draft = SupplierDraft::from(request);
        let supplier = self.ctx.supplier_repo().create(&draft).await?;

        info!(supplier_id = supplier.id, "Supplier created");

        Ok(SupplierResponse::from(supplier))
    }

    /// Overlay the request onto the stored row and write it back
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateSupplierRequest,
    ) -> ServiceResult<SupplierResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        let supplier = self.ctx.supplier_repo().update(id, &draft).await?;

        info!(supplier_id = id, "Supplier updated");

        Ok(SupplierResponse::from(supplier))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.supplier_repo().delete(id).await?;
        info!(supplier_id = id, "Supplier deleted");
        Ok(())
    }

    /// Flip `is_enabled` and return the new state
    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<SupplierResponse> {
        let supplier = self.ctx.supplier_repo().toggle_enabled(id).await?;
        info!(supplier_id = id, is_enabled = supplier.is_enabled, "Supplier toggled");
        Ok(SupplierResponse::from(supplier))
    }

    async fn load(&self, id: i64) -> ServiceResult<Supplier> {
        self.ctx
            .supplier_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Supplier", id))
    }
}
