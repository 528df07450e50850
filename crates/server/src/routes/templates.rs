use axum::{
    Json, Router,
    response::Json as ResponseJson,
    routing::{get, post},
};
use models::models::template::{Classification, ClassifyRequest, TemplateSummary};
use services::services::{catalog::TEMPLATES, classifier::classify};
use utils::response::ApiResponse;

use crate::{DeploymentImpl, error::ApiError};

pub async fn list_templates() -> ResponseJson<ApiResponse<Vec<TemplateSummary>>> {
    let templates = TEMPLATES.iter().map(|template| template.summary()).collect();
    ResponseJson(ApiResponse::success(templates))
}

pub async fn classify_input(
    Json(payload): Json<ClassifyRequest>,
) -> Result<ResponseJson<ApiResponse<Classification>>, ApiError> {
    if payload.input.trim().is_empty() {
        return Err(ApiError::BadRequest("Input must not be empty".to_string()));
    }
    Ok(ResponseJson(ApiResponse::success(classify(&payload.input))))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/classify", post(classify_input))
}
