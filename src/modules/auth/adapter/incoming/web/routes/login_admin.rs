use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// The admin secret
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT carrying the admin role, valid for one hour
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Admin login
///
/// Exchanges the admin secret for a token to send in the `x-auth-token` header.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = LoginResponse,
            example = json!({ "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." })
        ),
        (
            status = 400,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "msg": "Invalid Credentials",
                "code": "INVALID_CREDENTIALS"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = LoginRequest::new(req.into_inner().password);

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => {
            info!("Admin logged in");
            ApiResponse::success(LoginResponse {
                token: response.token,
            })
        }
        Err(e) => map_login_error(e),
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_login_error(e: LoginError) -> HttpResponse {
    match e {
        LoginError::InvalidCredentials => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::bad_request("INVALID_CREDENTIALS", "Invalid Credentials")
        }
        LoginError::TokenGenerationFailed(ref msg) => {
            error!(error = %msg, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::login_admin::{
        ILoginAdminUseCase, LoginAdminResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    // ========================================================================
    // Mock Use Case
    // ========================================================================

    #[derive(Clone)]
    struct MockLoginAdmin {
        result: Result<LoginAdminResponse, LoginError>,
    }

    impl MockLoginAdmin {
        fn success() -> Self {
            Self {
                result: Ok(LoginAdminResponse {
                    token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.admin".to_string(),
                }),
            }
        }

        fn error(err: LoginError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ILoginAdminUseCase for MockLoginAdmin {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
            self.result.clone()
        }
    }

    async fn post_login(
        mock: MockLoginAdmin,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default().with_login_admin(mock).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(login_admin_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_admin_success() {
        let (status, body) = post_login(
            MockLoginAdmin::success(),
            serde_json::json!({ "password": "correct-horse" }),
        )
        .await;

        assert_eq!(status, 200);
        assert!(body["token"].is_string());
        assert!(body.get("code").is_none());
    }

    #[actix_web::test]
    async fn test_login_admin_invalid_credentials() {
        let (status, body) = post_login(
            MockLoginAdmin::error(LoginError::InvalidCredentials),
            serde_json::json!({ "password": "wrong" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["msg"], "Invalid Credentials");
        assert!(body.get("token").is_none());
    }

    #[actix_web::test]
    async fn test_login_admin_token_generation_failed() {
        let (status, body) = post_login(
            MockLoginAdmin::error(LoginError::TokenGenerationFailed(
                "JWT signing failed".to_string(),
            )),
            serde_json::json!({ "password": "correct-horse" }),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["msg"], "An unexpected error occurred");
    }

    #[actix_web::test]
    async fn test_login_admin_missing_password_field() {
        let (status, body) =
            post_login(MockLoginAdmin::success(), serde_json::json!({ "secret": "x" })).await;

        assert_eq!(status, 400);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
