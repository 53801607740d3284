//! PostgreSQL implementation of LinkRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{LinkFilter, LinkRepository, RepoResult};
use erp_core::{Link, LinkDraft};

use crate::models::LinkModel;

use super::error::{map_db_error, push_eq_filter};

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT id, name, url, base_remark, shop_id, category_id, remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM links
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &LinkFilter) -> RepoResult<Vec<Link>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, name, url, base_remark, shop_id, category_id, remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM links
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "shop_id", filter.shop_id);
        push_eq_filter(&mut builder, "category_id", filter.category_id);
        push_eq_filter(&mut builder, "is_enabled", filter.is_enabled);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<LinkModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &LinkDraft) -> RepoResult<Link> {
        let model = sqlx::query_as::<_, LinkModel>(
            r"
            INSERT INTO links (name, url, base_remark, shop_id, category_id, remark, is_enabled)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, url, base_remark, shop_id, category_id, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.url)
        .bind(&draft.base_remark)
        .bind(draft.shop_id)
        .bind(draft.category_id)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &LinkDraft) -> RepoResult<Link> {
        let model = sqlx::query_as::<_, LinkModel>(
            r"
            UPDATE links
            SET name = $2, url = $3, base_remark = $4, shop_id = $5, category_id = $6,
                remark = $7, is_enabled = $8, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, url, base_remark, shop_id, category_id, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.url)
        .bind(&draft.base_remark)
        .bind(draft.shop_id)
        .bind(draft.category_id)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Link::from)
            .ok_or_else(|| DomainError::not_found("Link", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE links
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Link", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Link> {
        let model = sqlx::query_as::<_, LinkModel>(
            r"
            UPDATE links
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, url, base_remark, shop_id, category_id, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Link::from)
            .ok_or_else(|| DomainError::not_found("Link", id))
    }
}
