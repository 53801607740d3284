//! Link handlers

use axum::extract::State;
use erp_core::LinkFilter;
use erp_service::dto::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use erp_service::LinkService;

use crate::extractors::{AuthUser, CatalogEditors, IdPath, ListFilter, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Editor = RequireRole<CatalogEditors>;

/// GET /links
pub async fn list_links(
    State(state): State<AppState>,
    _auth: AuthUser,
    ListFilter(filter): ListFilter<LinkFilter>,
) -> ApiResult<ApiJson<Vec<LinkResponse>>> {
    let service = LinkService::new(state.service_context());
    Ok(ApiJson(service.list(&filter).await?))
}

/// GET /links/{id}
pub async fn get_link(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<LinkResponse>> {
    let service = LinkService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /links
pub async fn create_link(
    State(state): State<AppState>,
    _editor: Editor,
    ValidatedJson(request): ValidatedJson<CreateLinkRequest>,
) -> ApiResult<Created<LinkResponse>> {
    let service = LinkService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /links/{id}
pub async fn update_link(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateLinkRequest>,
) -> ApiResult<ApiJson<LinkResponse>> {
    let service = LinkService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = LinkService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// PATCH /links/{id}/toggle
pub async fn toggle_link(
    State(state): State<AppState>,
    _editor: Editor,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<LinkResponse>> {
    let service = LinkService::new(state.service_context());
    Ok(ApiJson(service.toggle(id).await?))
}
