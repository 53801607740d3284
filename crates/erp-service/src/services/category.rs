//! Category service
//!
//! Categories form a tree through `parent_id`. A category cannot be its own
//! parent and cannot be deleted while it still has live children.

use erp_core::{Category, CategoryDraft, CategoryFilter, DomainError};
use tracing::{info, instrument, warn};

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: &CategoryFilter) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list(filter).await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CategoryResponse> {
        self.load(id).await.map(CategoryResponse::from)
    }

    /// Direct live children of a category
    ///
    /// # Errors
    /// `NotFound` when the parent itself does not resolve to a live row
    #[instrument(skip(self))]
    pub async fn children(&self, id: i64) -> ServiceResult<Vec<CategoryResponse>> {
        self.load(id).await?;
        let children = self.ctx.category_repo().find_children(id).await?;
        Ok(children.iter().map(CategoryResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateCategoryRequest) -> ServiceResult<CategoryResponse> {
        let draft = CategoryDraft::from(request);
        let category = self.ctx.category_repo().create(&draft).await?;

        info!(category_id = category.id, parent_id = ?category.parent_id, "Category created");

        Ok(CategoryResponse::from(category))
    }

    /// Update a category; an explicit `null` parent detaches it from the tree
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut draft = self.load(id).await?.draft();
        request.apply_to(&mut draft);

        if draft.parent_id == Some(id) {
            return Err(ServiceError::validation("A category cannot be its own parent"));
        }

        let category = self.ctx.category_repo().update(id, &draft).await?;

        info!(category_id = id, "Category updated");

        Ok(CategoryResponse::from(category))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let children = self.ctx.category_repo().count_children(id).await?;
        if children > 0 {
            warn!(category_id = id, children, "Category delete blocked by children");
            return Err(DomainError::CategoryHasChildren(id).into());
        }

        self.ctx.category_repo().delete(id).await?;
        info!(category_id = id, "Category deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn toggle(&self, id: i64) -> ServiceResult<CategoryResponse> {
        let category = self.ctx.category_repo().toggle_enabled(id).await?;
        info!(category_id = id, is_enabled = category.is_enabled, "Category toggled");
        Ok(CategoryResponse::from(category))
    }

    async fn load(&self, id: i64) -> ServiceResult<Category> {
        self.ctx
            .category_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }
}
