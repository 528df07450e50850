use axum::{Router, response::Json as ResponseJson, routing::get};
use models::models::{
    dashboard::DashboardPage,
    landing::{CrewBuilderPage, HomePage},
    navigation::Navigation,
};
use services::services::pages;
use utils::response::ApiResponse;

use crate::DeploymentImpl;

pub async fn get_navigation() -> ResponseJson<ApiResponse<Navigation>> {
    ResponseJson(ApiResponse::success(pages::navigation()))
}

pub async fn get_home_page() -> ResponseJson<ApiResponse<HomePage>> {
    ResponseJson(ApiResponse::success(pages::home_page()))
}

pub async fn get_crew_builder_page() -> ResponseJson<ApiResponse<CrewBuilderPage>> {
    ResponseJson(ApiResponse::success(pages::crew_builder_page()))
}

pub async fn get_dashboard_page() -> ResponseJson<ApiResponse<DashboardPage>> {
    ResponseJson(ApiResponse::success(pages::dashboard_page()))
}

pub fn router() -> Router<DeploymentImpl> {
    Router::new()
        .route("/navigation", get(get_navigation))
        .route("/pages/home", get(get_home_page))
        .route("/pages/crew-builder", get(get_crew_builder_page))
        .route("/pages/dashboard", get(get_dashboard_page))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::testing::*;

    #[tokio::test]
    async fn test_navigation_links() {
        let app = app(&deployment());
        let (status, body) = json(&app, "GET", "/api/navigation", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["brand"], "CrewBuilder");
        assert_eq!(body["data"]["links"][1]["path"], "/build");
    }

    #[tokio::test]
    async fn test_crew_builder_page_greets_first() {
        let app = app(&deployment());
        let (_, body) = json(&app, "GET", "/api/pages/crew-builder", None).await;

        let greeting = &body["data"]["greeting"];
        assert_eq!(greeting["type"], "ai");
        assert!(
            greeting["content"]
                .as_str()
                .unwrap()
                .starts_with("Hello! I'm your AI crew builder assistant.")
        );
    }

    #[tokio::test]
    async fn test_dashboard_and_home_are_served() {
        let app = app(&deployment());

        let (status, body) = json(&app, "GET", "/api/pages/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["stats"][1]["value"], "$8,400");

        let (status, body) = json(&app, "GET", "/api/pages/home", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["use_cases"].as_array().unwrap().len(), 4);
    }
}
