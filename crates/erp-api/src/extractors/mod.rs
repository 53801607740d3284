//! Axum extractors for request handling
//!
//! Custom extractors for authentication, role guards, validation, list filters and path ids.

mod auth;
mod filter;
mod path;
mod validated;

pub use auth::{AdminOnly, AuthUser, CatalogEditors, RequireRole, RolePolicy};
pub use filter::{FromQueryMap, ListFilter};
pub use path::IdPath;
pub use validated::ValidatedJson;
