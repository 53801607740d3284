//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. None of them carries a
//! password or password hash.

use chrono::{DateTime, Utc};
use erp_core::{DynamicAttrs, UserRole};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login: a bearer token plus the public view of the user
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserRole,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopResponse {
    pub id: i64,
    pub supplier_id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub supplier_id: i64,
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    #[serde(rename = "type")]
    pub product_type: i32,
    pub price: f64,
    pub stock: i32,
    pub dynamic_attrs: DynamicAttrs,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
    pub level_remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkResponse {
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
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeResponse {
    pub id: i64,
    pub name: String,
    pub data_type: String,
    pub category_id: i64,
    pub is_required: bool,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductAttributeResponse {
    pub id: i64,
    pub product_id: i64,
    pub attribute_id: i64,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// System Responses
// ============================================================================

/// Liveness probe payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            time: Utc::now(),
        }
    }
}

/// Build metadata payload
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub env: String,
}
