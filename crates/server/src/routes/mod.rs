use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{IntoMakeService, get},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{DeploymentImpl, middleware as app_middleware};

pub mod conversations;
pub mod health;
pub mod pages;
pub mod previews;
pub mod templates;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// The full application without the make-service wrapper.
pub fn app(deployment: DeploymentImpl, allowed_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(pages::router())
        .merge(templates::router())
        .nest(
            "/conversations",
            conversations::router().merge(previews::router()),
        )
        .with_state(deployment);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(allowed_origins))
        .layer(middleware::from_fn(app_middleware::request_id_middleware))
}

pub fn router(deployment: DeploymentImpl, allowed_origins: &[String]) -> IntoMakeService<Router> {
    app(deployment, allowed_origins).into_make_service()
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::testing::*;
    use crate::middleware::REQUEST_ID_HEADER;

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app(&deployment());
        let response = send(&app, "GET", "/api/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_responses_carry_request_id() {
        let app = app(&deployment());
        let response = send(&app, "GET", "/api/health", None).await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = app(&deployment());
        let request = axum::http::Request::builder()
            .method("OPTIONS")
            .uri("/api/templates")
            .header("origin", "http://localhost:8080")
            .header("access-control-request-method", "POST")
            .body(axum::body::Body::empty())
            .unwrap();
        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:8080"
        );
    }
}
