//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{CategoryFilter, CategoryRepository, RepoResult};
use erp_core::{Category, CategoryDraft};

use crate::models::CategoryModel;

use super::error::{map_db_error, push_eq_filter};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, parent_id, level_remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM categories
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &CategoryFilter) -> RepoResult<Vec<Category>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, name, description, parent_id, level_remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM categories
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "parent_id", filter.parent_id);
        push_eq_filter(&mut builder, "is_enabled", filter.is_enabled);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<CategoryModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_children(&self, parent_id: i64) -> RepoResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, parent_id, level_remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM categories
            WHERE parent_id = $1 AND deleted_at IS NULL
            ORDER BY id ASC
            ",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_children(&self, parent_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM categories WHERE parent_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            INSERT INTO categories (name, description, parent_id, level_remark, is_enabled)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, parent_id, level_remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.parent_id)
        .bind(&draft.level_remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &CategoryDraft) -> RepoResult<Category> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
            SET name = $2, description = $3, parent_id = $4, level_remark = $5, is_enabled = $6,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, parent_id, level_remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.parent_id)
        .bind(&draft.level_remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Category::from)
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Category", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Category> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r"
            UPDATE categories
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, description, parent_id, level_remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Category::from)
            .ok_or_else(|| DomainError::not_found("Category", id))
    }
}
