use axum::{extract::State, response::Json as ResponseJson};
use deployment::Deployment;
use serde::Serialize;
use ts_rs::TS;
use utils::{
    response::ApiResponse,
    version::{APP_VERSION, SERVICE_NAME},
};

use crate::DeploymentImpl;

#[derive(Debug, Serialize, TS)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Conversations held in memory.
    pub conversations: usize,
    /// Preview runs still executing their timeline.
    pub active_previews: usize,
}

pub async fn health_check(
    State(deployment): State<DeploymentImpl>,
) -> ResponseJson<ApiResponse<HealthStatus>> {
    ResponseJson(ApiResponse::success(HealthStatus {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: APP_VERSION.to_string(),
        conversations: deployment.conversations().count().await,
        active_previews: deployment.previews().active_runs().await,
    }))
}
