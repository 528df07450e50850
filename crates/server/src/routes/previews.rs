use std::{convert::Infallible, time::Duration};

use axum::{
    Router,
    extract::{Path, State},
    response::{
        Json as ResponseJson,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use deployment::Deployment;
use futures::stream::Stream;
use models::models::activity::PreviewSnapshot;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{DeploymentImpl, error::ApiError};

/// Start the preview of the conversation's current crew, restarting any run in progress.
pub async fn start_preview(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<PreviewSnapshot>>, ApiError> {
    let snapshot = deployment.start_preview(conversation_id).await?;
    Ok(ResponseJson(ApiResponse::success(snapshot)))
}

pub async fn get_preview(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<PreviewSnapshot>>, ApiError> {
    let snapshot = deployment.preview_snapshot(conversation_id).await?;
    Ok(ResponseJson(ApiResponse::success(snapshot)))
}

pub async fn close_preview(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    deployment.close_preview(conversation_id).await?;
    Ok(ResponseJson(ApiResponse::success(())))
}

/// Stream preview snapshots via SSE, starting with the current one if a run exists.
pub async fn stream_preview(
    State(deployment): State<DeploymentImpl>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    deployment.conversations().get(conversation_id).await?;
    let stream = deployment.stream_preview(conversation_id).await;

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keepalive"),
    ))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route(
            "/{conversation_id}/preview",
            get(get_preview).post(start_preview).delete(close_preview),
        )
        .route("/{conversation_id}/preview/stream", get(stream_preview))
}
