//! Shop handlers

use axum::extract::State;
use erp_core::ShopFilter;
use erp_service::dto::{CreateShopRequest, ShopResponse, UpdateShopRequest};
use erp_service::ShopService;

use crate::extractors::{AuthUser, CatalogEditors, IdPath, ListFilter, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

/// List shops, filterable by `supplier_id` and `is_enabled`
///
/// GET /shops
pub async fn list_shops(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<ShopFilter>,
) -> ApiResult<ApiJson<Vec<ShopResponse>>> {
    let service = ShopService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /shops/{id}
pub async fn get_shop(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ShopResponse>> {
    let service = ShopService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /shops
pub async fn create_shop(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateShopRequest>,
) -> ApiResult<Created<ShopResponse>> {
    let service = ShopService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /shops/{id}
pub async fn update_shop(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateShopRequest>,
) -> ApiResult<ApiJson<ShopResponse>> {
    let service = ShopService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /shops/{id}
pub async fn delete_shop(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = ShopService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /shops/{id}/toggle
pub async fn toggle_shop(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<ShopResponse>> {
    let service = ShopService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}
