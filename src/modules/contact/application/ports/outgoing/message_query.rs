use async_trait::async_trait;

use super::message_repository::MessageResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Most recent first.
    async fn list_messages(&self) -> Result<Vec<MessageResult>, MessageQueryError>;
}
