//! User handlers
//!
//! Admin account management and the caller's own profile.

use axum::extract::State;
use erp_service::dto::{
    ChangePasswordRequest, CreateUserRequest, UpdateProfileRequest, UpdateUserRequest,
    UserResponse,
};
use erp_service::{AuthService, UserService};

use crate::extractors::{AdminOnly, AuthUser, IdPath, RequireRole, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, Empty};
use crate::state::AppState;

type Admin = RequireRole<AdminOnly>;

/// List users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: Admin,
) -> ApiResult<ApiJson<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.list().await?))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: Admin,
    IdPath(id): IdPath,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.get(id).await?))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    _admin: Admin,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Created(service.create(request).await?))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: Admin,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.update(id, request).await?))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: Admin,
    IdPath(id): IdPath,
) -> ApiResult<Empty> {
    let service = UserService::new(state.service_context());
    service.delete(id).await?;
    Ok(Empty)
}

/// Get the caller's own account
///
/// GET /users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.get_profile(auth.user_id).await?))
}

/// Update the caller's name, email or phone
///
/// PUT /users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(ApiJson(service.update_profile(auth.user_id, request).await?))
}

/// Change the caller's password
///
/// PUT /users/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Empty> {
    let service = AuthService::new(state.service_context());
    service.change_password(auth.user_id, request).await?;
    Ok(Empty)
}
