//! Test fixtures and data generators
//!
//! Provides reusable request bodies and a few typed views of responses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::helpers::{assert_data, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixes in the start time so reruns against the same database stay unique.
pub fn unique_suffix() -> String {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{started}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "secret123".to_string(),
            user_type: None,
        }
    }

    pub fn with_role(role: &str) -> Self {
        Self {
            user_type: Some(role.to_string()),
            ..Self::unique()
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.name.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Public user view
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub is_enabled: bool,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Register a fresh account with `role` and return its bearer token
pub async fn login_as(server: &TestServer, role: &str) -> Result<String> {
    let register = RegisterRequest::with_role(role);
    let response = server.post("/api/v1/auth/register", &register).await?;
    let _: UserResponse = assert_data(response, StatusCode::CREATED).await?;

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await?;
    let login: LoginResponse = assert_data(response, StatusCode::OK).await?;
    Ok(login.token)
}

/// Create an entity through the API and return its id
pub async fn create_entity(
    server: &TestServer,
    token: &str,
    collection: &str,
    body: &Value,
) -> Result<i64> {
    let response = server
        .post_auth(&format!("/api/v1/{collection}"), token, body)
        .await?;
    let created: Value = assert_data(response, StatusCode::CREATED).await?;
    created["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("Created {collection} has no id: {created}"))
}

pub fn supplier_body() -> Value {
    json!({ "name": format!("Supplier {}", unique_suffix()), "remark": "integration" })
}

pub fn shop_body(supplier_id: i64) -> Value {
    json!({ "supplier_id": supplier_id, "name": format!("Shop {}", unique_suffix()) })
}

pub fn category_body(parent_id: Option<i64>) -> Value {
    json!({ "name": format!("Category {}", unique_suffix()), "parent_id": parent_id })
}

pub fn product_body(supplier_id: i64, category_id: i64) -> Value {
    let suffix = unique_suffix();
    json!({
        "supplier_id": supplier_id,
        "category_id": category_id,
        "name": format!("Product {suffix}"),
        "sku": format!("SKU-{suffix}"),
        "type": 1,
        "price": 9.5,
        "stock": 3,
        "dynamic_attrs": { "color": "red", "sizes": [38, 39] }
    })
}

pub fn link_body(shop_id: i64, category_id: i64) -> Value {
    json!({
        "name": format!("Link {}", unique_suffix()),
        "url": "https://shop.example.com/items",
        "shop_id": shop_id,
        "category_id": category_id
    })
}

pub fn attribute_body(category_id: i64) -> Value {
    json!({
        "name": format!("Attribute {}", unique_suffix()),
        "data_type": "string",
        "category_id": category_id,
        "is_required": true
    })
}
