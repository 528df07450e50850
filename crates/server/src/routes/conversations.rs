use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, post},
};
use deployment::Deployment;
use models::models::conversation::{ConversationSnapshot, SubmitMessage, SubmitResponse};
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{DeploymentImpl, error::ApiError};

pub async fn create_conversation(
    State(deployment): State<DeploymentImpl>,
) -> (StatusCode, ResponseJson<ApiResponse<ConversationSnapshot>>) {
    let conversation = deployment.conversations().create().await;
    (
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(conversation)),
    )
}

pub async fn get_conversation(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<ConversationSnapshot>>, ApiError> {
    let conversation = deployment.conversations().get(conversation_id).await?;
    Ok(ResponseJson(ApiResponse::success(conversation)))
}

/// Empty and in-flight submissions still answer 200; the outcome says what happened.
pub async fn submit_message(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
    Json(payload): Json<SubmitMessage>,
) -> Result<ResponseJson<ApiResponse<SubmitResponse>>, ApiError> {
    let response = deployment
        .conversations()
        .submit(conversation_id, &payload.content)
        .await?;
    Ok(ResponseJson(ApiResponse::success(response)))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/", post(create_conversation))
        .route("/{conversation_id}", get(get_conversation))
        .route("/{conversation_id}/messages", post(submit_message))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::routes::testing::*;

    async fn create(app: &axum::Router) -> String {
        let (status, body) = json(app, "POST", "/api/conversations", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    async fn submit(app: &axum::Router, id: &str, content: &str) -> Value {
        let (status, body) = json(
            app,
            "POST",
            &format!("/api/conversations/{id}/messages"),
            Some(json!({ "content": content })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["data"].clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_conversation_starts_with_greeting() {
        let app = app(&deployment());
        let id = create(&app).await;

        let (status, body) = json(&app, "GET", &format!("/api/conversations/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["state"], "idle");
        assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["messages"][0]["type"], "ai");
        assert!(body["data"]["crew"].as_array().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_competitor_prompt_builds_crew_after_delay() {
        let app = app(&deployment());
        let id = create(&app).await;

        let data = submit(
            &app,
            &id,
            "Monitor my competitors and send me weekly reports",
        )
        .await;
        assert_eq!(data["outcome"], "accepted");
        assert_eq!(data["conversation"]["state"], "awaiting_response");

        tokio::time::sleep(Duration::from_millis(2001)).await;

        let (_, body) = json(&app, "GET", &format!("/api/conversations/{id}"), None).await;
        let conversation = &body["data"];
        assert_eq!(conversation["state"], "idle");
        assert_eq!(conversation["category"], "competitor-intelligence");

        let messages = conversation["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert!(
            messages[2]["content"]
                .as_str()
                .unwrap()
                .starts_with("Excellent choice!")
        );
        let names: Vec<_> = conversation["crew"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            ["Research Scout", "Strategic Analyst", "Report Compiler"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_waiting_is_ignored() {
        let app = app(&deployment());
        let id = create(&app).await;

        submit(&app, &id, "Find candidates for our job opening").await;
        let data = submit(&app, &id, "Also analyze customer feedback").await;

        assert_eq!(data["outcome"], "ignored_busy");
        assert_eq!(data["conversation"]["messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_is_ignored() {
        let app = app(&deployment());
        let id = create(&app).await;

        let data = submit(&app, &id, "  \n ").await;
        assert_eq!(data["outcome"], "ignored_empty");
        assert_eq!(data["conversation"]["state"], "idle");
        assert_eq!(data["conversation"]["messages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_404() {
        let app = app(&deployment());
        let uri = format!("/api/conversations/{}", Uuid::new_v4());

        let (status, body) = json(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, _) = json(
            &app,
            "POST",
            &format!("{uri}/messages"),
            Some(json!({ "content": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
