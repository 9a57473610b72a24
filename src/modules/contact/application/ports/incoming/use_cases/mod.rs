mod delete_message;
mod get_messages;
mod submit_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use get_messages::{GetMessagesError, GetMessagesUseCase};
pub use submit_message::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError, SubmitMessageUseCase,
};
