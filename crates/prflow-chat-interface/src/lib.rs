//! Chat interface.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod message;

pub use errors::{ChatError, Result};
pub use interface::ChatService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockChatService;
pub use message::{ChatHistoryMessage, ChatMessage};
