//! User service
//!
//! Admin account management plus the caller's own profile.

use erp_core::{User, UserDraft};
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all live users
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<UserResponse> {
        self.load(id).await.map(UserResponse::from)
    }

    /// Create an account with an explicit role
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let draft = UserDraft {
            name: request.name,
            email: request.email,
            phone: request.phone,
            user_type: request.user_type,
            is_enabled: request.is_enabled,
        };
        self.ensure_unique(&draft, None).await?;

        let password_hash = self.ctx.password_service().hash(&request.password)?;
        let user = self.ctx.user_repo().create(&draft, &password_hash).await?;

        info!(user_id = user.id, "User created");

        Ok(UserResponse::from(user))
    }

    /// Update an account; a present password replaces the stored one
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> ServiceResult<UserResponse> {
        let current = self.load(id).await?;
        let mut draft = current.draft();
        request.apply_to(&mut draft);
        self.ensure_unique(&draft, Some(&current)).await?;

        // Hash first so a hashing failure leaves the row untouched
        let password_hash = request
            .password
            .as_deref()
            .map(|password| self.ctx.password_service().hash(password))
            .transpose()?;

        let user = self.ctx.user_repo().update(id, &draft).await?;

        if let Some(password_hash) = &password_hash {
            self.ctx
                .user_repo()
                .update_password(id, password_hash)
                .await?;
        }

        info!(user_id = id, "User updated");

        Ok(UserResponse::from(user))
    }

    /// Soft-delete an account
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// The caller's own account
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: i64) -> ServiceResult<UserResponse> {
        self.get(user_id).await
    }

    /// Update the caller's name, email or phone
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let current = self.load(user_id).await?;
        let mut draft = current.draft();
        request.apply_to(&mut draft);
        self.ensure_unique(&draft, Some(&current)).await?;

        let user = self.ctx.user_repo().update(user_id, &draft).await?;

        info!(user_id, "Profile updated");

        Ok(UserResponse::from(user))
    }

    async fn load(&self, id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// Pre-check name and email against other live accounts
    async fn ensure_unique(&self, draft: &UserDraft, current: Option<&User>) -> ServiceResult<()> {
        let name_changed = current.is_none_or(|u| u.name != draft.name);
        if name_changed && self.ctx.user_repo().name_exists(&draft.name).await? {
            return Err(ServiceError::conflict("User name already exists"));
        }

        let email_changed = current.is_none_or(|u| u.email != draft.email);
        if email_changed && self.ctx.user_repo().email_exists(&draft.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        Ok(())
    }
}
