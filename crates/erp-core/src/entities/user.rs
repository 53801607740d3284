//! User entity - an account that can authenticate against the API

use chrono::{DateTime, Utc};

use crate::value_objects::UserRole;

/// User account. The password hash is deliberately not part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserRole,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied account fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserRole,
    pub is_enabled: bool,
}

impl UserDraft {
    /// Create an enabled draft with the default role
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            user_type: UserRole::default(),
            is_enabled: true,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.user_type = role;
        self
    }
}

impl User {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            user_type: self.user_type,
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.user_type.is_admin()
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
