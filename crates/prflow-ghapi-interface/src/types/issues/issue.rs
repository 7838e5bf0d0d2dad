use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Web URL.
    #[serde(default)]
    pub html_url: String,
    /// Present when the issue is a pull request.
    pub pull_request: Option<serde_json::Value>,
}

impl GhIssue {
    /// Whether the issue is a pull request.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}
