//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use erp_core::error::DomainError;
use erp_core::traits::{RepoResult, UserRepository};
use erp_core::{User, UserDraft};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// Translate a unique violation on either live-row index into a conflict
fn user_conflict(e: sqlx::Error) -> DomainError {
    let constraint = e
        .as_database_error()
        .and_then(|db_err| db_err.constraint())
        .unwrap_or_default()
        .to_string();

    map_unique_violation(e, || {
        if constraint.contains("email") {
            DomainError::Conflict("Email already in use".to_string())
        } else {
            DomainError::Conflict("Username already exists".to_string())
        }
    })
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, user_type, is_enabled,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, user_type, is_enabled,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE name = $1 AND deleted_at IS NULL
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE name = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND deleted_at IS NULL)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, phone, user_type, is_enabled,
                   created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash), fields(name = %draft.name))]
    async fn create(&self, draft: &UserDraft, password_hash: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, password_hash, user_type, phone, is_enabled)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, user_type, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(password_hash)
        .bind(draft.user_type.as_str())
        .bind(&draft.phone)
        .bind(draft.is_enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(user_conflict)?;

        User::try_from(model)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &UserDraft) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET name = $2, email = $3, phone = $4, user_type = $5, is_enabled = $6,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, email, phone, user_type, is_enabled,
                      created_at, updated_at, deleted_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(draft.user_type.as_str())
        .bind(draft.is_enabled)
        .fetch_optional(&self.pool)
        .await
        .map_err(user_conflict)?
        .ok_or_else(|| DomainError::not_found("User", id))?;

        User::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User", id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User", id));
        }

        Ok(())
    }
}
