use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::contact::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/contact/{id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.contact.delete.execute(message_id).await {
        Ok(()) => {
            info!(message_id = %message_id, "Message removed");
            ApiResponse::message("Message removed")
        }
        Err(DeleteMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(DeleteMessageError::RepositoryError(e)) => {
            error!("Repository error deleting message {}: {}", message_id, e);
            ApiResponse::internal_error()
        }
    }
}
