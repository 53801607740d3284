//! Link service

use erp_core::{Link, LinkDraft, LinkFilter};
use tracing::{info, instrument};

use crate::dto::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: &LinkFilter) -> ServiceResult<Vec<LinkResponse>> {
        let links = self.ctx.link_repo().list(filter).await?;
        Ok(links.iter().map(LinkResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<LinkResponse> {
        self.load(id).await.map(LinkResponse::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateLinkRequest) -> ServiceResult<LinkResponse> {
        let draft = LinkDraft::from(request);
        let link = self.ctx.link_repo().create(&draft).await?;

        info!(link_id = link.id, shop_id = link.shop_id, "Link created");

        Ok(LinkResponse::from(link))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateLinkRequest) -> ServiceResult<LinkResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        let link = self.ctx.link_repo().update(id, &draft).await?;

        info!(link_id = id, "Link updated");

        Ok(LinkResponse::from(link))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.link_repo().delete(id).await?;
        info!(link_id = id, "Link deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<LinkResponse> {
        let link = self.ctx.link_repo().toggle_enabled(id).await?;
        info!(link_id = id, is_enabled = link.is_enabled, "Link toggled");
        Ok(LinkResponse::from(link))
    }

    async fn load(&self, id: i64) -> ServiceResult<Link> {
        self.ctx
            .link_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Link", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::memory_context;

    fn create_request(name: &str, shop_id: i64, category_id: i64) -> CreateLinkRequest {
        CreateLinkRequest {
            name: name.to_string(),
            url: format!("https://shop.example.com/{name}"),
            base_remark: String::new(),
            shop_id,
            category_id,
            remark: String::new(),
            is_enabled: true,
        }
    }

    #[tokio::test]
    async fn test_list_filter_by_shop_and_category() {
        let (ctx, _) = memory_context();
        let service = LinkService::new(&ctx);
        service.create(create_request("a", 1, 1)).await.unwrap();
        service.create(create_request("b", 1, 2)).await.unwrap();
        service.create(create_request("c", 2, 1)).await.unwrap();
        service.create(create_request("d", 1, 1)).await.unwrap();

        let filter = LinkFilter {
            shop_id: Some(1),
            category_id: Some(1),
            ..Default::default()
        };
        let names: Vec<_> = service
            .list(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, ["a", "d"]);
    }

    #[tokio::test]
    async fn test_update_url_keeps_other_fields() {
        let (ctx, _) = memory_context();
        let service = LinkService::new(&ctx);
        let link = service.create(create_request("a", 3, 4)).await.unwrap();

        let updated = service
            .update(
                link.id,
                UpdateLinkRequest {
                    url: Some("https://new.example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.url, "https://new.example.com");
        assert_eq!(updated.shop_id, 3);
        assert_eq!(updated.category_id, 4);
    }
}
