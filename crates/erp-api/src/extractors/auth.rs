//! Authentication extractors
//!
//! `AuthUser` validates the bearer token from the Authorization header.
//! `RequireRole<P>` additionally checks the caller's role against the
//! allow-list of policy `P`.

use std::marker::PhantomData;
use std::ops::Deref;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};
use erp_core::UserRole;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: i64,
    /// Role carried in the token
    pub role: UserRole,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: i64, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

/// Scheme prefix, matched case-sensitively with exactly one space
const BEARER_PREFIX: &str = "Bearer ";

/// Pull the token out of an `Authorization` header value.
///
/// A missing header is `MissingAuth`. Anything other than `Bearer <token>`, where
/// the token is non-empty and has no embedded whitespace, is `InvalidAuthFormat`.
fn bearer_token(header: Option<&HeaderValue>) -> Result<&str, ApiError> {
    let value = header.ok_or(ApiError::MissingAuth)?;
    let token = value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(ApiError::InvalidAuthFormat)?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(ApiError::InvalidAuthFormat);
    }
    Ok(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts.headers.get(AUTHORIZATION))?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token; expired and invalid tokens keep their own error codes
        let claims = app_state.jwt_service().validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::App(e)
        })?;

        Ok(AuthUser::new(claims.user_id, claims.role))
    }
}

/// Role allow-list used by [`RequireRole`]
pub trait RolePolicy: Send + Sync + 'static {
    /// Roles that pass the guard
    const ALLOWED: &'static [UserRole];

    fn allows(role: UserRole) -> bool {
        Self::ALLOWED.contains(&role)
    }
}

/// User management
#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl RolePolicy for AdminOnly {
    const ALLOWED: &'static [UserRole] = &[UserRole::Admin];
}

/// Catalog writes: create, update, delete, toggle, stock and price
#[derive(Debug, Clone, Copy)]
pub struct CatalogEditors;

impl RolePolicy for CatalogEditors {
    const ALLOWED: &'static [UserRole] = &[UserRole::Admin, UserRole::Staff, UserRole::Supplier];
}

/// Authenticated user whose role is allowed by policy `P`
#[derive(Debug, Clone, Copy)]
pub struct RequireRole<P> {
    pub user: AuthUser,
    _policy: PhantomData<P>,
}

impl<P> Deref for RequireRole<P> {
    type Target = AuthUser;

    fn deref(&self) -> &AuthUser {
        &self.user
    }
}

#[async_trait]
impl<S, P> FromRequestParts<S> for RequireRole<P>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    P: RolePolicy,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !P::allows(user.role) {
            tracing::warn!(user_id = user.user_id, role = %user.role, "Role not permitted");
            return Err(ApiError::Forbidden);
        }

        Ok(Self {
            user,
            _policy: PhantomData,
        })
    }
}
