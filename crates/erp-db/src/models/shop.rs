//! Shop database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for shops table
#[derive(Debug, Clone, FromRow)]
pub struct ShopModel {
    pub id: i64,
    pub supplier_id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
