use async_trait::async_trait;

use crate::{ChatHistoryMessage, ChatMessage, Result};

/// Chat service interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Post a message to a channel, as a thread reply when `thread_ts` is set.
    ///
    /// Returns the new message timestamp.
    async fn messages_post(
        &self,
        channel: &str,
        thread_ts: Option<String>,
        message: &ChatMessage,
    ) -> Result<String>;
    /// List the latest root messages of a channel, newest first.
    async fn history_list(&self, channel: &str) -> Result<Vec<ChatHistoryMessage>>;
}
