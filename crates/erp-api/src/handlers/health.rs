//! System handlers
//!
//! Liveness, build metadata and the service banner.

use axum::extract::State;
use erp_service::dto::{HealthResponse, InfoResponse};
use serde::Serialize;

use crate::response::ApiJson;
use crate::state::AppState;

/// Display name reported by `/info`
pub const SERVICE_NAME: &str = "ERP Backend";

/// Root banner payload
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> ApiJson<HealthResponse> {
    ApiJson(HealthResponse::ok())
}

/// Build metadata
///
/// GET /info
pub async fn info(State(state): State<AppState>) -> ApiJson<InfoResponse> {
    let app = &state.config().app;
    ApiJson(InfoResponse {
        name: SERVICE_NAME.to_string(),
        version: app.version.clone(),
        env: app.env.as_str().to_string(),
    })
}

/// GET /
pub async fn root() -> ApiJson<RootResponse> {
    ApiJson(RootResponse {
        message: "ERP backend is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
