use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::contact::application::ports::incoming::use_cases::GetMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/contact")]
pub async fn get_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(GetMessagesError::QueryFailed(msg)) => {
            error!("Failed to list messages: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
