//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{ProductFilter, ProductRepository, RepoResult};
use erp_core::{Product, ProductDraft};

use crate::models::ProductModel;

use super::error::{map_db_error, map_unique_violation, push_eq_filter};

fn sku_conflict(sku: &str) -> impl FnOnce() -> DomainError + '_ {
    move || DomainError::Conflict(format!("SKU '{sku}' is already in use"))
}

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, supplier_id, category_id, name, sku, product_type, price, stock,
                   dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            FROM products
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ProductFilter) -> RepoResult<Vec<Product>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r"
            SELECT id, supplier_id, category_id, name, sku, product_type, price, stock,
                   dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            FROM products
            WHERE deleted_at IS NULL",
        );
        push_eq_filter(&mut builder, "supplier_id", filter.supplier_id);
        push_eq_filter(&mut builder, "category_id", filter.category_id);
        push_eq_filter(&mut builder, "product_type", filter.product_type);
        push_eq_filter(&mut builder, "is_enabled", filter.is_enabled);
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<ProductModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn sku_exists(&self, sku: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM products
                WHERE sku = $1 AND deleted_at IS NULL AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(sku)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, draft), fields(sku = %draft.sku))]
    async fn create(&self, draft: &ProductDraft) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products (supplier_id, category_id, name, sku, product_type, price, stock,
                                  dynamic_attrs, remark, is_enabled)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, supplier_id, category_id, name, sku, product_type, price, stock,
                      dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(draft.supplier_id)
        .bind(draft.category_id)
        .bind(&draft.name)
        .bind(&draft.sku)
        .bind(draft.product_type)
        .bind(draft.price)
        .bind(draft.stock)
        .bind(Json(&draft.dynamic_attrs))
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, sku_conflict(&draft.sku)))?;

        Ok(model.into())
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &ProductDraft) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET supplier_id = $2, category_id = $3, name = $4, sku = $5, product_type = $6,
                price = $7, stock = $8, dynamic_attrs = $9, remark = $10, is_enabled = $11,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, category_id, name, sku, product_type, price, stock,
                      dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(draft.supplier_id)
        .bind(draft.category_id)
        .bind(&draft.name)
        .bind(&draft.sku)
        .bind(draft.product_type)
        .bind(draft.price)
        .bind(draft.stock)
        .bind(Json(&draft.dynamic_attrs))
        .bind(&draft.remark)
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, sku_conflict(&draft.sku)))?;

        model
            .map(Product::from)
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Product", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_enabled(&self, id: i64) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET is_enabled = NOT is_enabled, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, category_id, name, sku, product_type, price, stock,
                      dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Product::from)
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[instrument(skip(self))]
    async fn update_stock(&self, id: i64, stock: i32) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET stock = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, category_id, name, sku, product_type, price, stock,
                      dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Product::from)
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[instrument(skip(self))]
    async fn update_price(&self, id: i64, price: f64) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            UPDATE products
            SET price = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, supplier_id, category_id, name, sku, product_type, price, stock,
                      dynamic_attrs, remark, is_enabled, created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(price)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model
            .map(Product::from)
            .ok_or_else(|| DomainError::not_found("Product", id))
    }
}
