//! Authentication handlers
//!
//! Endpoints for user registration and login.

use axum::extract::State;
use erp_service::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use erp_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}

/// Login with user name and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiJson<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiJson(response))
}
