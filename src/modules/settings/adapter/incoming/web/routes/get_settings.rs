use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::settings::application::ports::incoming::use_cases::GetSettingsError;
use crate::modules::settings::application::ports::outgoing::SettingsResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get portfolio settings
///
/// Public. Returns an empty object until the settings have been saved once.
#[utoipa::path(
    get,
    path = "/api/portfolio/settings",
    tag = "portfolio",
    responses(
        (status = 200, description = "Settings record, or {} when none exists", body = SettingsResult),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/portfolio/settings")]
pub async fn get_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get.execute().await {
        Ok(Some(settings)) => ApiResponse::success(settings),
        Ok(None) => ApiResponse::success(serde_json::Map::new()),

        Err(GetSettingsError::QueryFailed(msg)) => {
            error!("Failed to load settings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::settings::application::ports::incoming::use_cases::GetSettingsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct MockGetSettings {
        result: Result<Option<SettingsResult>, GetSettingsError>,
    }

    #[async_trait]
    impl GetSettingsUseCase for MockGetSettings {
        async fn execute(&self) -> Result<Option<SettingsResult>, GetSettingsError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockGetSettings) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_settings(mock)
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_settings_handler))
            .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio/settings")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_settings_absent_is_empty_object() {
        let (status, body) = call(MockGetSettings { result: Ok(None) }).await;

        assert_eq!(status, 200);
        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn test_get_settings_uses_camel_case() {
        let (status, body) = call(MockGetSettings {
            result: Ok(Some(SettingsResult {
                id: Uuid::new_v4(),
                name: "Jane Doe".to_string(),
                title: "Engineer".to_string(),
                bio: "Builds things".to_string(),
                profile_image: Some("https://img.example/jane.svg".to_string()),
                resume_link: None,
                linkedin: None,
                github: None,
                devpost: None,
                leetcode: None,
                email: None,
                about_description: Some("Longer about text".to_string()),
            })),
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["profileImage"], "https://img.example/jane.svg");
        assert_eq!(body["aboutDescription"], "Longer about text");
        assert!(body["resumeLink"].is_null());
        assert!(body.get("profile_image").is_none());
    }

    #[actix_web::test]
    async fn test_get_settings_query_failure() {
        let (status, _) = call(MockGetSettings {
            result: Err(GetSettingsError::QueryFailed("down".to_string())),
        })
        .await;

        assert_eq!(status, 500);
    }
}
