use async_trait::async_trait;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{GetMessagesError, GetMessagesUseCase},
    outgoing::{MessageQuery, MessageResult},
};

#[derive(Debug, Clone)]
pub struct GetMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMessagesUseCase for GetMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<MessageResult>, GetMessagesError> {
        self.query
            .list_messages()
            .await
            .map_err(|e| GetMessagesError::QueryFailed(e.to_string()))
    }
}
