// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Response builders shared by every handler.
///
/// Successful responses carry the payload as-is (a record, a list, `{}` or
/// `{ "msg": .. }`). Failures carry `{ "msg": .., "code": .. }` so clients can
/// show `msg` directly and branch on `code`.
pub struct ApiResponse;

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub msg: String,
    pub code: String,
}

/// Body returned by deletes: `{ "msg": "Project removed" }`
#[derive(Serialize, Clone, Debug)]
pub struct MessageBody {
    pub msg: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    /// 200 whose body is a short confirmation message.
    pub fn message(msg: &str) -> HttpResponse {
        Self::success(MessageBody {
            msg: msg.to_string(),
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            msg: message.to_string(),
            code: code.to_string(),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
