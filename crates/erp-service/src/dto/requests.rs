//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Update requests carry every mutable field as optional; absent fields keep their stored value.

use erp_core::{DynamicAttrs, UserRole};
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Self-service registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    #[serde(default)]
    pub phone: String,

    /// Defaults to `user` when omitted
    pub user_type: Option<UserRole>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Change own password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,

    #[validate(length(min = 6, max = 128, message = "New password must be 6-128 characters"))]
    pub new_password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Admin creation of an account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    #[serde(default)]
    pub phone: String,

    pub user_type: UserRole,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

/// Admin update of an account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub user_type: Option<UserRole>,

    pub is_enabled: Option<bool>,

    /// Replaces the stored password when present
    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: Option<String>,
}

/// Self-service profile update. Role and enabled flag are not editable here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// Supplier Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub remark: Option<String>,
    pub is_enabled: Option<bool>,
}

// ============================================================================
// Shop Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateShopRequest {
    pub supplier_id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateShopRequest {
    pub supplier_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub remark: Option<String>,
    pub is_enabled: Option<bool>,
}

// ============================================================================
// Product Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    pub supplier_id: i64,
    pub category_id: i64,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "SKU must be 1-50 characters"))]
    pub sku: String,

    #[serde(rename = "type", default)]
    pub product_type: i32,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub stock: i32,

    #[serde(default)]
    pub dynamic_attrs: DynamicAttrs,

    #[serde(default)]
    pub remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub supplier_id: Option<i64>,
    pub category_id: Option<i64>,

    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "SKU must be 1-50 characters"))]
    pub sku: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<i32>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub stock: Option<i32>,

    /// Replaces the whole attribute document when present
    pub dynamic_attrs: Option<DynamicAttrs>,

    pub remark: Option<String>,
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStockRequest {
    pub stock: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePriceRequest {
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

// ============================================================================
// Category Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub parent_id: Option<i64>,

    #[serde(default)]
    pub level_remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    /// `null` detaches the category from its parent
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<i64>>,

    pub level_remark: Option<String>,
    pub is_enabled: Option<bool>,
}

// ============================================================================
// Link Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(url(message = "Invalid URL"), length(max = 500, message = "URL must be at most 500 characters"))]
    pub url: String,

    #[serde(default)]
    pub base_remark: String,

    pub shop_id: i64,
    pub category_id: i64,

    #[serde(default)]
    pub remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid URL"), length(max = 500, message = "URL must be at most 500 characters"))]
    pub url: Option<String>,

    pub base_remark: Option<String>,
    pub shop_id: Option<i64>,
    pub category_id: Option<i64>,
    pub remark: Option<String>,
    pub is_enabled: Option<bool>,
}

// ============================================================================
// Attribute Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAttributeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Data type must be 1-50 characters"))]
    pub data_type: String,

    pub category_id: i64,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub remark: String,

    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAttributeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Data type must be 1-50 characters"))]
    pub data_type: Option<String>,

    pub category_id: Option<i64>,
    pub is_required: Option<bool>,
    pub remark: Option<String>,
    pub is_enabled: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductAttributeRequest {
    pub product_id: i64,
    pub attribute_id: i64,

    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductAttributeRequest {
    pub product_id: Option<i64>,
    pub attribute_id: Option<i64>,
    pub value: Option<String>,
}
