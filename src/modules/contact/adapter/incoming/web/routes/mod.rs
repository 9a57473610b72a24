mod delete_message;
mod get_messages;
mod submit_message;

pub use delete_message::delete_message_handler;
pub use get_messages::get_messages_handler;
pub use submit_message::{__path_submit_message_handler, submit_message_handler, SubmitMessageRequest};
