use async_trait::async_trait;
use chrono::Utc;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase},
    outgoing::{CreateMessageData, MessageRepository, MessageResult},
};

#[derive(Debug, Clone)]
pub struct SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitMessageUseCase for SubmitMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<MessageResult, SubmitMessageError> {
        let data = CreateMessageData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            subject: command.subject().to_string(),
            message: command.message().to_string(),
            date: Utc::now(),
        };

        self.repository
            .create_message(data)
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))
    }
}
