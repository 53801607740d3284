//! Authentication service
//!
//! Handles user registration, login, and password changes.

use erp_common::AppError;
use erp_core::{UserDraft, UserRole};
use tracing::{info, instrument, warn};

use crate::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The role defaults to `user` when the request does not name one. A requested
    /// `admin` role is honoured and logged.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        if self.ctx.user_repo().name_exists(&request.name).await? {
            return Err(ServiceError::conflict("User name already exists"));
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let role = request.user_type.unwrap_or_default();
        if role == UserRole::Admin {
            warn!("Self-registration requested the admin role");
        }

        let mut draft = UserDraft::new(request.name, request.email).with_role(role);
        draft.phone = request.phone;

        let user = self.ctx.user_repo().create(&draft, &password_hash).await?;

        info!(user_id = user.id, role = %user.user_type, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with user name and password
    ///
    /// An unknown name and a wrong password fail with the same error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let Some(user) = self.ctx.user_repo().find_by_name(&request.username).await? else {
            warn!("Login rejected");
            return Err(AppError::InvalidCredentials.into());
        };

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .unwrap_or_default();

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!("Login rejected"))?;

        let issued = self.ctx.jwt_service().issue_token(user.id, user.user_type)?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(LoginResponse {
            token: issued.token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            user: UserResponse::from(user),
        })
    }

    /// Change the caller's own password after checking the old one
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: i64,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        if !self
            .ctx
            .password_service()
            .verify(&request.old_password, &password_hash)
        {
            warn!(user_id, "Password change rejected: old password mismatch");
            return Err(ServiceError::bad_request("Old password is incorrect"));
        }

        let new_hash = self.ctx.password_service().hash(&request.new_password)?;
        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id, "Password changed");

        Ok(())
    }
}
