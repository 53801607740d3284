//! PostgreSQL implementation of SupplierRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{RepoResult, SupplierRepository};
use erp_core::{Supplier, SupplierDraft};

use crate::models::SupplierModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SupplierRepository
#[derive(Clone)]
pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    /// Create a new PgSupplierRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Supplier>> {
        let result = sqlx::query_as::<_, SupplierModel>(
            r"
            SELECT id, name, remark, is_enabled, created_at, updated_at, deleted_at
            FROM suppliers
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Supplier::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Supplier>> {
        let rows = sqlx::query_as::<_, SupplierModel>(
            r"
            SELECT id, name, remark, is_enabled, created_at, updated_at, deleted_at
            FROM suppliers
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &SupplierDraft) -> RepoResult<Supplier> {
        let model = sqlx::query_as::<_, SupplierModel>(
            r"
            INSERT INTO suppliers (name, remark, is_enabled)
            VALUES ($1, $2, $3)
            RETURNING id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &SupplierDraft) -> RepoResult<Supplier> {
        let model = sqlx::query_as::<_, SupplierModel>(
            r"
            UPDATE suppliers
            SET name = $2, remark = $3, is_enabled = $4, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Supplier::from)
            .ok_or_else(|| DomainError::not_found("Supplier", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE suppliers
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Supplier", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Supplier> {
        let model = sqlx::query_as::<_, SupplierModel>(
            r"
            UPDATE suppliers
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Supplier::from)
            .ok_or_else(|| DomainError::not_found("Supplier", id))
    }
}
