pub mod message_input;
pub mod toaster;

pub use message_input::{MessageInput, MessageInputProps};
pub use toaster::Toaster;
