use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JSON envelope shared by every `/api` endpoint.
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}
