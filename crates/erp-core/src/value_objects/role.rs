//! User role - the closed set of account types used for access control

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Account role carried in tokens and checked against route allow-lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Supplier,
    Staff,
    /// Lowest privilege, assigned on self-registration
    #[default]
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [Self::Admin, Self::Supplier, Self::Staff, Self::User];

    /// Stable string tag used in storage and token claims
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supplier => "supplier",
            Self::Staff => "staff",
            Self::User => "user",
        }
    }

    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "supplier" => Ok(Self::Supplier),
            "staff" => Ok(Self::Staff),
            "user" => Ok(Self::User),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}
