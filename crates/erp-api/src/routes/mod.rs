//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{
    attributes, auth, categories, health, links, products, shops, suppliers, users,
};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main router: the banner at `/` plus every API route under `/api/v1`
///
/// Unknown paths and unsupported methods answer with the error envelope.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
        // Must follow every route it should cover
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(system_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(supplier_routes())
        .merge(shop_routes())
        .merge(product_routes())
        .merge(category_routes())
        .merge(link_routes())
        .merge(attribute_routes())
}

/// Health and build metadata
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/info", get(health::info))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Self-service
        .route(
            "/users/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/users/password", put(users::change_password))
        // Administration
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Supplier routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/suppliers",
            get(suppliers::list_suppliers).post(suppliers::create_supplier),
        )
        .route(
            "/suppliers/:id",
            get(suppliers::get_supplier)
                .put(suppliers::update_supplier)
                .delete(suppliers::delete_supplier),
        )
        .route("/suppliers/:id/toggle", patch(suppliers::toggle_supplier))
}

/// Shop routes
fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(shops::list_shops).post(shops::create_shop))
        .route(
            "/shops/:id",
            get(shops::get_shop)
                .put(shops::update_shop)
                .delete(shops::delete_shop),
        )
        .route("/shops/:id/toggle", patch(shops::toggle_shop))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/products/:id/toggle", patch(products::toggle_product))
        .route("/products/:id/stock", patch(products::update_stock))
        .route("/products/:id/price", patch(products::update_price))
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/categories/:id/children", get(categories::get_children))
        .route("/categories/:id/toggle", patch(categories::toggle_category))
}

/// Link routes
fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(links::list_links).post(links::create_link))
        .route(
            "/links/:id",
            get(links::get_link)
                .put(links::update_link)
                .delete(links::delete_link),
        )
        .route("/links/:id/toggle", patch(links::toggle_link))
}

/// Attribute and product attribute routes
fn attribute_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/attributes",
            get(attributes::list_attributes).post(attributes::create_attribute),
        )
        .route(
            "/attributes/:id",
            get(attributes::get_attribute)
                .put(attributes::update_attribute)
                .delete(attributes::delete_attribute),
        )
        .route("/attributes/:id/toggle", patch(attributes::toggle_attribute))
        .route(
            "/product-attributes",
            get(attributes::list_product_attributes).post(attributes::create_product_attribute),
        )
        .route(
            "/product-attributes/:id",
            get(attributes::get_product_attribute)
                .put(attributes::update_product_attribute)
                .delete(attributes::delete_product_attribute),
        )
}
