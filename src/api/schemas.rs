// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every non-2xx response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Shown to the user as-is
    #[schema(example = "Invalid Credentials")]
    pub msg: String,

    /// Stable identifier, e.g. `MISSING_AUTH_TOKEN`, `PROJECT_NOT_FOUND`
    #[schema(example = "INVALID_CREDENTIALS")]
    pub code: String,
}

/// Confirmation returned by deletes.
#[derive(Serialize, ToSchema)]
pub struct RemovedResponse {
    #[schema(example = "Message removed")]
    pub msg: String,
}
