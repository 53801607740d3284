//! Attribute handlers
//!
//! Attribute definitions under /attributes and product values under /product-attributes.

use axum::extract::State;
use erp_core::{AttributeFilter, ProductAttributeFilter};
use erp_service::dto::{
    AttributeResponse, CreateAttributeRequest, CreateProductAttributeRequest,
    ProductAttributeResponse, UpdateAttributeRequest, UpdateProductAttributeRequest,
};
use erp_service::{AttributeService, ProductAttributeService};

use crate::extractors::{AuthUser, CatalogEditors, IdPath, ListFilter, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

// ============================================================================
// Attribute definitions
// ============================================================================

/// GET /attributes
pub async fn list_attributes(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<AttributeFilter>,
) -> ApiResult<ApiJson<Vec<AttributeResponse>>> {
    let service = AttributeService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /attributes/{id}
pub async fn get_attribute(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<AttributeResponse>> {
    let service = AttributeService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /attributes
pub async fn create_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateAttributeRequest>,
) -> ApiResult<Created<AttributeResponse>> {
    let service = AttributeService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /attributes/{id}
pub async fn update_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateAttributeRequest>,
) -> ApiResult<ApiJson<AttributeResponse>> {
    let service = AttributeService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /attributes/{id}
pub async fn delete_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = AttributeService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /attributes/{id}/toggle
pub async fn toggle_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<AttributeResponse>> {
    let service = AttributeService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}

// ============================================================================
// Product attribute values
// ============================================================================

/// GET /product-attributes
pub async fn list_product_attributes(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<ProductAttributeFilter>,
) -> ApiResult<ApiJson<Vec<ProductAttributeResponse>>> {
    let service = ProductAttributeService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /product-attributes/{id}
pub async fn get_product_attribute(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ProductAttributeResponse>> {
    let service = ProductAttributeService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /product-attributes
pub async fn create_product_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateProductAttributeRequest>,
) -> ApiResult<Created<ProductAttributeResponse>> {
    let service = ProductAttributeService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /product-attributes/{id}
pub async fn update_product_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateProductAttributeRequest>,
) -> ApiResult<ApiJson<ProductAttributeResponse>> {
    let service = ProductAttributeService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /product-attributes/{id}
pub async fn delete_product_attribute(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = ProductAttributeService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}
