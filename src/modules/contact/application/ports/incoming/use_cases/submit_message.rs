use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::application::ports::outgoing::MessageResult;

//
// ──────────────────────────────────────────────────────────
// Submit Message Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Subject cannot be empty")]
    EmptySubject,

    #[error("Message cannot be empty")]
    EmptyMessage,
}

impl SubmitMessageCommand {
    pub fn new(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, SubmitMessageCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SubmitMessageCommandError::EmptyName);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(SubmitMessageCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(SubmitMessageCommandError::InvalidEmail);
        }

        let subject = subject.trim();
        if subject.is_empty() {
            return Err(SubmitMessageCommandError::EmptySubject);
        }

        // Body keeps its inner formatting
        if message.trim().is_empty() {
            return Err(SubmitMessageCommandError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<MessageResult, SubmitMessageError>;
}
