//! PostgreSQL implementations of AttributeRepository and ProductAttributeRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{
    AttributeFilter, AttributeRepository, ProductAttributeFilter, ProductAttributeRepository,
    RepoResult,
};
use erp_core::{Attribute, AttributeDraft, ProductAttribute, ProductAttributeDraft};

use crate::models::{AttributeModel, ProductAttributeModel};

use super::error::{map_db_error, push_eq_filter};

// ============================================================================
// Attribute definitions
// ============================================================================

/// PostgreSQL implementation of AttributeRepository
#[derive(Clone)]
pub struct PgAttributeRepository {
    pool: PgPool,
}

impl PgAttributeRepository {
    /// Create a new PgAttributeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttributeRepository for PgAttributeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attribute>> {
        let result = sqlx::query_as::<_, AttributeModel>(
            r"
            SELECT id, name, data_type, category_id, is_required, remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM attributes
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Attribute::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &AttributeFilter) -> RepoResult<Vec<Attribute>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, name, data_type, category_id, is_required, remark, is_enabled,
                   created_at, updated_at, deleted_at
            FROM attributes
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "category_id", filter.category_id);
        push_eq_filter(&mut builder, "is_enabled", filter.is_enabled);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<AttributeModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Attribute::from).collect())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &AttributeDraft) -> RepoResult<Attribute> {
        let model = sqlx::query_as::<_, AttributeModel>(
            r"
            INSERT INTO attributes (name, data_type, category_id, is_required, remark, is_enabled)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, data_type, category_id, is_required, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.data_type)
        .bind(draft.category_id)
        .bind(draft.is_required)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &AttributeDraft) -> RepoResult<Attribute> {
        let model = sqlx::query_as::<_, AttributeModel>(
            r"
            UPDATE attributes
            SET name = $2, data_type = $3, category_id = $4, is_required = $5, remark = $6,
                is_enabled = $7, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, data_type, category_id, is_required, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.data_type)
        .bind(draft.category_id)
        .bind(draft.is_required)
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Attribute::from)
            .ok_or_else(|| DomainError::not_found("Attribute", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE attributes
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Attribute", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Attribute> {
        let model = sqlx::query_as::<_, AttributeModel>(
            r"
            UPDATE attributes
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, data_type, category_id, is_required, remark, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Attribute::from)
            .ok_or_else(|| DomainError::not_found("Attribute", id))
    }
}

// ============================================================================
// Product attribute values
// ============================================================================

/// PostgreSQL implementation of ProductAttributeRepository
#[derive(Clone)]
pub struct PgProductAttributeRepository {
    pool: PgPool,
}

impl PgProductAttributeRepository {
    /// Create a new PgProductAttributeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductAttributeRepository for PgProductAttributeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductAttribute>> {
        let result = sqlx::query_as::<_, ProductAttributeModel>(
            r"
            SELECT id, product_id, attribute_id, value, created_at, updated_at, deleted_at
            FROM product_attributes
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProductAttribute::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ProductAttributeFilter) -> RepoResult<Vec<ProductAttribute>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, product_id, attribute_id, value, created_at, updated_at, deleted_at
            FROM product_attributes
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "product_id", filter.product_id);
        push_eq_filter(&mut builder, "attribute_id", filter.attribute_id);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<ProductAttributeModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ProductAttribute::from).collect())
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &ProductAttributeDraft) -> RepoResult<ProductAttribute> {
        let model = sqlx::query_as::<_, ProductAttributeModel>(
            r"
            INSERT INTO product_attributes (product_id, attribute_id, value)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, attribute_id, value, created_at, updated_at, deleted_at
            ",
        )
        .bind(draft.product_id)
        .bind(draft.attribute_id)
        .bind(&draft.value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(
        &self,
        id: i64,
        draft: &ProductAttributeDraft,
    ) -> RepoResult<ProductAttribute> {
        let model = sqlx::query_as::<_, ProductAttributeModel>(
            r"
            UPDATE product_attributes
            SET product_id = $2, attribute_id = $3, value = $4, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, product_id, attribute_id, value, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(draft.product_id)
        .bind(draft.attribute_id)
        .bind(&draft.value)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(ProductAttribute::from)
            .ok_or_else(|| DomainError::not_found("ProductAttribute", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE product_attributes
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("ProductAttribute", id));
        }

        Ok(())
    }
}
