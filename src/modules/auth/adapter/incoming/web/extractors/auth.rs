use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Header carrying the admin token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Caller holding a valid, unexpired token with the admin role.
///
/// Adding this to a handler's arguments rejects the request before the
/// handler body runs: 401 without a usable token, 403 for any other role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub role: Role,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("Token provider is not registered in app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_TOKEN",
                    "No token, authorization denied",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => match claims.role.parse::<Role>() {
                Ok(Role::Admin) => ready(Ok(AdminUser { role: Role::Admin })),
                Err(_) => {
                    tracing::warn!(role = %claims.role, "Token without admin role rejected");
                    ready(Err(create_api_error(ApiResponse::forbidden(
                        "FORBIDDEN",
                        "Admin access required",
                    ))))
                }
            },
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Token is not valid",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(AUTH_TOKEN_HEADER)?.to_str().ok()?.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
