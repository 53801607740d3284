//! Model to entity mappers
//!
//! Conversions from database rows (models) into domain entities (erp-core).
//! Drafts are bound directly as query parameters, so there is no reverse mapping.

mod catalog;
mod product;
mod user;
