//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `TEST_DATABASE_URL`. Each test skips itself when the variable is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_envelope, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// System
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/health").await.unwrap();
    let data: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(data["status"], "ok");
}

#[tokio::test]
async fn test_info_and_root() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/info").await.unwrap();
    let data: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(data["name"], "ERP Backend");

    let response = server.get("/").await.unwrap();
    let data: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(data["message"].is_string());
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let user: UserResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.name, register.name);
    assert_eq!(user.user_type, "user");
    assert!(user.is_enabled);

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!login.token.is_empty());
    assert_eq!(login.token_type, "Bearer");
    assert!(login.expires_in > 0);
    assert_eq!(login.user.id, user.id);
    assert_eq!(login.user.email, register.email);
}

#[tokio::test]
async fn test_register_duplicate_name_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let response = server.post("/api/v1/auth/register", &register).await.unwrap();
    let envelope: integration_tests::Envelope<Value> =
        assert_envelope(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(envelope.code, 409);
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();

    let wrong_password = LoginRequest {
        username: register.name.clone(),
        password: "not-the-password".to_string(),
    };
    let unknown_user = LoginRequest {
        username: format!("ghost{}", unique_suffix()),
        password: "whatever".to_string(),
    };

    let first = server.post("/api/v1/auth/login", &wrong_password).await.unwrap();
    let first: integration_tests::Envelope<Value> =
        assert_envelope(first, StatusCode::UNAUTHORIZED).await.unwrap();
    let second = server.post("/api/v1/auth/login", &unknown_user).await.unwrap();
    let second: integration_tests::Envelope<Value> =
        assert_envelope(second, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(first.message, second.message);
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_profile_and_password_change() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register).await.unwrap();
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/profile", &login.token)
        .await
        .unwrap();
    let profile: UserResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.id, login.user.id);

    let response = server
        .put_auth(
            "/api/v1/users/password",
            &login.token,
            &json!({ "old_password": "wrong-old", "new_password": "another1" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put_auth(
            "/api/v1/users/password",
            &login.token,
            &json!({ "old_password": register.password, "new_password": "another1" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let relogin = LoginRequest {
        username: register.name.clone(),
        password: "another1".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &relogin).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_user_management_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = login_as(&server, "staff").await.unwrap();
    let admin = login_as(&server, "admin").await.unwrap();

    let response = server.get_auth("/api/v1/users", &staff).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/api/v1/users", &admin).await.unwrap();
    let users: Vec<Value> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!users.is_empty());
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_catalog_requires_authentication() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/products").await.unwrap();
    let envelope: integration_tests::Envelope<Value> =
        assert_envelope(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(envelope.code, 401);
}

#[tokio::test]
async fn test_plain_user_reads_but_cannot_write() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = login_as(&server, "user").await.unwrap();

    let response = server.get_auth("/api/v1/suppliers", &user).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/v1/suppliers", &user, &supplier_body())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_supplier_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = login_as(&server, "staff").await.unwrap();
    let id = create_entity(&server, &staff, "suppliers", &supplier_body())
        .await
        .unwrap();
    let path = format!("/api/v1/suppliers/{id}");

    // Partial update keeps untouched fields
    let response = server
        .put_auth(&path, &staff, &json!({ "remark": "updated" }))
        .await
        .unwrap();
    let updated: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["remark"], "updated");
    assert!(updated["name"].as_str().unwrap().starts_with("Supplier"));
    assert!(updated.get("deleted_at").is_none());

    // Toggling twice restores the flag
    let response = server
        .patch_empty_auth(&format!("{path}/toggle"), &staff)
        .await
        .unwrap();
    let toggled: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled["is_enabled"], false);
    let response = server
        .patch_empty_auth(&format!("{path}/toggle"), &staff)
        .await
        .unwrap();
    let toggled: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(toggled["is_enabled"], true);

    // Soft delete hides the row
    let response = server.delete_auth(&path, &staff).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.get_auth(&path, &staff).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server.delete_auth(&path, &staff).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_shop_filter_by_supplier() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = login_as(&server, "supplier").await.unwrap();
    let supplier_id = create_entity(&server, &token, "suppliers", &supplier_body())
        .await
        .unwrap();
    let first = create_entity(&server, &token, "shops", &shop_body(supplier_id))
        .await
        .unwrap();
    let second = create_entity(&server, &token, "shops", &shop_body(supplier_id))
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/v1/shops?supplier_id={supplier_id}"), &token)
        .await
        .unwrap();
    let shops: Vec<Value> = assert_data(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = shops.iter().filter_map(|s| s["id"].as_i64()).collect();
    assert_eq!(ids, vec![first, second]);

    let response = server
        .get_auth("/api/v1/shops?supplier_id=abc", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_product_stock_price_and_sku() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = login_as(&server, "admin").await.unwrap();
    let supplier_id = create_entity(&server, &token, "suppliers", &supplier_body())
        .await
        .unwrap();
    let category_id = create_entity(&server, &token, "categories", &category_body(None))
        .await
        .unwrap();
    let body = product_body(supplier_id, category_id);
    let id = create_entity(&server, &token, "products", &body)
        .await
        .unwrap();
    let path = format!("/api/v1/products/{id}");

    let response = server.get_auth(&path, &token).await.unwrap();
    let product: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(product["dynamic_attrs"], body["dynamic_attrs"]);
    assert_eq!(product["type"], 1);

    let response = server
        .patch_auth(&format!("{path}/stock"), &token, &json!({ "stock": 42 }))
        .await
        .unwrap();
    let product: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(product["stock"], 42);

    let response = server
        .patch_auth(&format!("{path}/price"), &token, &json!({ "price": 12.25 }))
        .await
        .unwrap();
    let product: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(product["price"], 12.25);

    let response = server
        .patch_auth(&format!("{path}/price"), &token, &json!({ "price": -1 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // A second live product may not reuse the sku
    let mut duplicate = product_body(supplier_id, category_id);
    duplicate["sku"] = body["sku"].clone();
    let response = server
        .post_auth("/api/v1/products", &token, &duplicate)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_category_tree() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = login_as(&server, "staff").await.unwrap();
    let parent = create_entity(&server, &token, "categories", &category_body(None))
        .await
        .unwrap();
    let child = create_entity(&server, &token, "categories", &category_body(Some(parent)))
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/api/v1/categories/{parent}/children"), &token)
        .await
        .unwrap();
    let children: Vec<Value> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], child);

    // A category cannot be its own parent
    let response = server
        .put_auth(
            &format!("/api/v1/categories/{child}"),
            &token,
            &json!({ "parent_id": child }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Live children block deletion of the parent
    let response = server
        .delete_auth(&format!("/api/v1/categories/{parent}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Detaching the child with an explicit null unblocks it
    let response = server
        .put_auth(
            &format!("/api/v1/categories/{child}"),
            &token,
            &json!({ "parent_id": null }),
        )
        .await
        .unwrap();
    let detached: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(detached["parent_id"].is_null());

    let response = server
        .delete_auth(&format!("/api/v1/categories/{parent}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_links_attributes_and_values() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = login_as(&server, "admin").await.unwrap();
    let supplier_id = create_entity(&server, &token, "suppliers", &supplier_body())
        .await
        .unwrap();
    let shop_id = create_entity(&server, &token, "shops", &shop_body(supplier_id))
        .await
        .unwrap();
    let category_id = create_entity(&server, &token, "categories", &category_body(None))
        .await
        .unwrap();

    let link_id = create_entity(&server, &token, "links", &link_body(shop_id, category_id))
        .await
        .unwrap();
    let response = server
        .get_auth(&format!("/api/v1/links?shop_id={shop_id}"), &token)
        .await
        .unwrap();
    let links: Vec<Value> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["id"], link_id);

    let mut bad_link = link_body(shop_id, category_id);
    bad_link["url"] = json!("not a url");
    let response = server.post_auth("/api/v1/links", &token, &bad_link).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let attribute_id = create_entity(&server, &token, "attributes", &attribute_body(category_id))
        .await
        .unwrap();
    let product_id = create_entity(
        &server,
        &token,
        "products",
        &product_body(supplier_id, category_id),
    )
    .await
    .unwrap();

    let value_id = create_entity(
        &server,
        &token,
        "product-attributes",
        &json!({ "product_id": product_id, "attribute_id": attribute_id, "value": "42" }),
    )
    .await
    .unwrap();

    let response = server
        .get_auth(&format!("/api/v1/product-attributes/{value_id}"), &token)
        .await
        .unwrap();
    let value: Value = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(value["value"], "42");

    let response = server
        .get_auth(
            &format!("/api/v1/product-attributes?product_id={product_id}"),
            &token,
        )
        .await
        .unwrap();
    let values: Vec<Value> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(values.len(), 1);
}

#[tokio::test]
async fn test_invalid_path_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = login_as(&server, "staff").await.unwrap();
    let response = server.get_auth("/api/v1/links/0", &token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
