use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deployment::DeploymentError;
use services::services::{
    config::ConfigError, conversation::ConversationError, preview::PreviewError,
};
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error, ts_rs::TS)]
#[ts(type = "string")]
pub enum ApiError {
    #[error(transparent)]
    Conversation(#[from] ConversationError),
    #[error(transparent)]
    Preview(#[from] PreviewError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl From<DeploymentError> for ApiError {
    fn from(err: DeploymentError) -> Self {
        match err {
            DeploymentError::Conversation(e) => ApiError::Conversation(e),
            DeploymentError::Preview(e) => ApiError::Preview(e),
            DeploymentError::Config(e) => ApiError::Config(e),
            DeploymentError::Io(e) => ApiError::Io(e),
            DeploymentError::Other(e) => ApiError::InternalError(e.to_string()),
        }
    }
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Conversation(ConversationError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "ConversationNotFound")
            }
            ApiError::Preview(err) => match err {
                PreviewError::NotFound(_) => (StatusCode::NOT_FOUND, "PreviewNotFound"),
                // the conversation exists but has nothing to run yet
                PreviewError::EmptyCrew(_) => (StatusCode::CONFLICT, "PreviewEmptyCrew"),
            },
            ApiError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ConfigError"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IoError"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_type) = self.status();

        let error_message = match &self {
            ApiError::Conversation(e) => e.to_string(),
            ApiError::Preview(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::InternalError(msg) => msg.clone(),
            _ => format!("{}: {}", error_type, self),
        };

        if status_code.is_server_error() {
            tracing::error!(error_type, "{}", error_message);
        } else {
            tracing::debug!(error_type, "{}", error_message);
        }

        let response = ApiResponse::<()>::error(&error_message);
        (status_code, Json(response)).into_response()
    }
}
