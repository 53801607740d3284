//! Attribute and product attribute database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for attributes table
#[derive(Debug, Clone, FromRow)]
pub struct AttributeModel {
    pub id: i64,
    pub name: String,
    pub data_type: String,
    pub category_id: i64,
    pub is_required: bool,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Database model for product_attributes table
#[derive(Debug, Clone, FromRow)]
pub struct ProductAttributeModel {
    pub id: i64,
    pub product_id: i64,
    pub attribute_id: i64,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
