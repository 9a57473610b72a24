use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
///
/// Public. Newest first.
#[utoipa::path(
    get,
    path = "/api/portfolio/projects",
    tag = "portfolio",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectResult>),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct MockGetProjects {
        result: Result<Vec<ProjectResult>, GetProjectsError>,
    }

    #[async_trait]
    impl GetProjectsUseCase for MockGetProjects {
        async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockGetProjects) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_projects(mock)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_projects_handler))
            .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio/projects")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_projects_is_public() {
        let (status, body) = call(MockGetProjects {
            result: Ok(vec![ProjectResult {
                id: Uuid::new_v4(),
                title: "Scientific Calculator".to_string(),
                description: "Advanced calculation tool".to_string(),
                tech: vec!["Python".to_string(), "Math".to_string()],
                github: None,
                live: None,
                image: None,
                icon: Some("Calculator".to_string()),
            }]),
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(body[0]["tech"], json!(["Python", "Math"]));
        assert_eq!(body[0]["icon"], "Calculator");
        assert!(body[0]["live"].is_null());
    }

    #[actix_web::test]
    async fn test_get_projects_empty() {
        let (status, body) = call(MockGetProjects { result: Ok(vec![]) }).await;

        assert_eq!(status, 200);
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_get_projects_query_failure() {
        let (status, body) = call(MockGetProjects {
            result: Err(GetProjectsError::QueryFailed("timeout".to_string())),
        })
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }
}
