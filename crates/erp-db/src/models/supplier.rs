//! Supplier database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for suppliers table
#[derive(Debug, Clone, FromRow)]
pub struct SupplierModel {
    pub id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
