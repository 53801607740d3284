//! Shop service

use erp_core::{Shop, ShopDraft, ShopFilter};
use tracing::{info, instrument};

use crate::dto::{CreateShopRequest, ShopResponse, UpdateShopRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct ShopService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShopService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ShopFilter) -> ServiceResult<Vec<ShopResponse>> {
        let shops = self.ctx.shop_repo().list(filter).await?;
        Ok(shops.iter().map(ShopResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ShopResponse> {
        self.load(id).await.map(ShopResponse::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateShopRequest) -> ServiceResult<ShopResponse> {
        let draft = ShopDraft::from(request);
        let shop = self.ctx.shop_repo().create(&draft).await?;

        info!(shop_id = shop.id, supplier_id = shop.supplier_id, "Shop created");

        Ok(ShopResponse::from(shop))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateShopRequest) -> ServiceResult<ShopResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        let shop = self.ctx.shop_repo().update(id, &draft).await?;

        info!(shop_id = id, "Shop updated");

        Ok(ShopResponse::from(shop))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.shop_repo().delete(id).await?;
        info!(shop_id = id, "Shop deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<ShopResponse> {
        let shop = self.ctx.shop_repo().toggle_enabled(id).await?;
        info!(shop_id = id, is_enabled = shop.is_enabled, "Shop toggled");
        Ok(ShopResponse::from(shop))
    }

    async fn load(&self, id: i64) -> ServiceResult<Shop> {
        self.ctx
            .shop_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Shop", id))
    }
}
