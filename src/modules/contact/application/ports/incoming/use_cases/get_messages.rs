use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::MessageResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesError {
    #[error("Failed to fetch messages: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MessageResult>, GetMessagesError>;
}
