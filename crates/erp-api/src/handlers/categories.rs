//! Category handlers

use axum::extract::State;
use erp_core::CategoryFilter;
use erp_service::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use erp_service::CategoryService;

use crate::extractors::{AuthUser, CatalogEditors, IdPath, ListFilter, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<CategoryFilter>,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// Direct children of a category
///
/// GET /categories/{id}/children
pub async fn get_children(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(ApiJson(service.children(id).await?))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// Delete a category; refused with 409 while it has live children
///
/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = CategoryService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /categories/{id}/toggle
pub async fn toggle_category(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}
