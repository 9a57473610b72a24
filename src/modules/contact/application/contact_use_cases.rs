use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, SubmitMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub list: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}
