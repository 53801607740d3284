//! User model -> entity mapper

use erp_core::{DomainError, User};

use crate::models::UserModel;

/// Convert UserModel to User entity.
///
/// Fails if the stored role tag is not one the domain knows about.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let user_type = model.user_type.parse().map_err(|_| {
            DomainError::DatabaseError(format!(
                "user {} has unknown user_type '{}'",
                model.id, model.user_type
            ))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            user_type,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}
