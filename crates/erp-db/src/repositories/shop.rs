//! PostgreSQL implementation of ShopRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{RepoResult, ShopFilter, ShopRepository};
use erp_core::{Shop, ShopDraft};

use crate::models::ShopModel;

use super::error::{map_db_error, push_eq_filter};

/// PostgreSQL implementation of ShopRepository
#[derive(Clone)]
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    /// Create a new PgShopRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Shop>> {
        let result = sqlx::query_as::<_, ShopModel>(
            r"
            SELECT id, supplier_id, name, remark, is_enabled, created_at, updated_at, deleted_at
            FROM shops
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Shop::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ShopFilter) -> RepoResult<Vec<Shop>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, supplier_id, name, remark, is_enabled, created_at, updated_at, deleted_at
            FROM shops
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "supplier_id", filter.supplier_id);
        push_eq_filter(&mut builder, "is_enabled", filter.is_enabled);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<ShopModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Shop::from).collect())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &ShopDraft) -> RepoResult<Shop> {
        let model = sqlx::query_as::<_, ShopModel>(
            r"
            INSERT INTO shops (supplier_id, name, remark, is_enabled)
            VALUES ($1, $2, $3, $4)
            RETURNING id, supplier_id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(draft.supplier_id)
        .bind(&draft.name)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &ShopDraft) -> RepoResult<Shop> {
        let model = sqlx::query_as::<_, ShopModel>(
            r"
            UPDATE shops
            SET supplier_id = $2, name = $3, remark = $4, is_enabled = $5, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(draft.supplier_id)
        .bind(&draft.name)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Shop::from)
            .ok_or_else(|| DomainError::not_found("Shop", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE shops
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Shop", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Shop> {
        let model = sqlx::query_as::<_, ShopModel>(
            r"
            UPDATE shops
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Shop::from)
            .ok_or_else(|| DomainError::not_found("Shop", id))
    }
}
