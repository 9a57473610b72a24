use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError,
};
use crate::modules::contact::application::ports::outgoing::MessageResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMessageRequest {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Collaboration")]
    pub subject: String,
    #[schema(example = "Would love to work together.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Send a contact message
///
/// Public. The server stamps the submission date.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = MessageResult),
        (status = 400, description = "Invalid message", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_message_handler(
    req: web::Json<SubmitMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match SubmitMessageCommand::new(req.name, req.email, req.subject, req.message)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.contact.submit.execute(command).await {
        Ok(message) => {
            info!(message_id = %message.id, "Contact message received");
            ApiResponse::success(message)
        }
        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Repository error storing message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(e: SubmitMessageCommandError) -> HttpResponse {
    match e {
        SubmitMessageCommandError::EmptyName => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }
        SubmitMessageCommandError::EmptyEmail => {
            ApiResponse::bad_request("EMPTY_EMAIL", "Email cannot be empty")
        }
        SubmitMessageCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        SubmitMessageCommandError::EmptySubject => {
            ApiResponse::bad_request("EMPTY_SUBJECT", "Subject cannot be empty")
        }
        SubmitMessageCommandError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
    }
}
