//! Link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub base_remark: String,
    pub shop_id: i64,
    pub category_id: i64,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
