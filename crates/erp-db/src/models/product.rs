//! Product database model

use chrono::{DateTime, Utc};
use erp_core::DynamicAttrs;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub supplier_id: i64,
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    pub product_type: i32,
    pub price: f64,
    pub stock: i32,
    /// JSONB document, decoded back into the same map shape
    pub dynamic_attrs: Json<DynamicAttrs>,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
