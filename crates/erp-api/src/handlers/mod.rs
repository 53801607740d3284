//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod attributes;
pub mod auth;
pub mod categories;
pub mod health;
pub mod links;
pub mod products;
pub mod shops;
pub mod suppliers;
pub mod users;
