//! # erp-api
//!
//! REST API server built with Axum framework.
//!
//! Every response, success or failure, uses the `{code, message, data}` envelope.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run};
pub use state::AppState;
