//! Supplier handlers

use axum::extract::State;
use erp_service::dto::{CreateSupplierRequest, SupplierResponse, UpdateSupplierRequest};
use erp_service::SupplierService;

use crate::extractors::{AuthUser, CatalogEditors, IdPath, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

/// GET /suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<SupplierResponse>>> {
    let service = SupplierService::new(state.service_context());
    Ok(ApiJson(service.list().await?))
}

/// GET /suppliers/{id}
pub async fn get_supplier(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<SupplierResponse>> {
    let service = SupplierService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateSupplierRequest>,
) -> ApiResult<Created<SupplierResponse>> {
    let service = SupplierService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /suppliers/{id}
pub async fn update_supplier(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSupplierRequest>,
) -> ApiResult<ApiJson<SupplierResponse>> {
    let service = SupplierService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /suppliers/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = SupplierService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /suppliers/{id}/toggle
pub async fn toggle_supplier(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<SupplierResponse>> {
    let service = SupplierService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}
