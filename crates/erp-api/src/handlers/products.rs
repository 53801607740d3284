//! Product handlers
//!
//! Full CRUD plus the narrow stock and price patches.

use axum::extract::State;
use erp_core::ProductFilter;
use erp_service::dto::{
    CreateProductRequest, ProductResponse, UpdatePriceRequest, UpdateProductRequest,
    UpdateStockRequest,
};
use erp_service::ProductService;

use crate::extractors::{AuthUser, CatalogEditors, IdPath, ListFilter, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

/// List products, filterable by `supplier_id`, `category_id`, `type` and `is_enabled`
///
/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<ProductFilter>,
) -> ApiResult<ApiJson<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<ApiJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = ProductService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /products/{id}/toggle
pub async fn toggle_product(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}

/// PATCH /products/{id}/stock
pub async fn update_stock(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateStockRequest>,
) -> ApiResult<ApiJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.update_stock(id, request).await?))
}

/// PATCH /products/{id}/price
pub async fn update_price(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdatePriceRequest>,
) -> ApiResult<ApiJson<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    Ok(ApiJson(service.update_price(id, request).await?))
}
