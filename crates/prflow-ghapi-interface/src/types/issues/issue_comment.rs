use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue comment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssueComment {
    /// ID.
    pub id: u64,
    /// User.
    pub user: GhUser,
    /// Web URL.
    #[serde(default)]
    pub html_url: String,
    /// Body.
    #[serde(default)]
    pub body: String,
}
