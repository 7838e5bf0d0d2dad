use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outgoing chat message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Fallback text, also used as a searchable marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Block Kit blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Value>,
}

impl ChatMessage {
    /// Create a message from blocks only.
    pub fn from_blocks(blocks: Vec<Value>) -> Self {
        Self { text: None, blocks }
    }

    /// Set the fallback text.
    pub fn with_text<T: Into<String>>(mut self, text: T) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Message read back from channel history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatHistoryMessage {
    /// Message timestamp, used as thread identifier.
    pub ts: String,
    /// Message text.
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_without_text() {
        let message = ChatMessage::from_blocks(vec![json!({"type": "divider"})]);
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"blocks": [{"type": "divider"}]})
        );

        let message = message.with_text("repo-12");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({"text": "repo-12", "blocks": [{"type": "divider"}]})
        );
    }
}
