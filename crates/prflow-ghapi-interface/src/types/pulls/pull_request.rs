use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhPullRequestState;
use crate::types::common::{GhLabel, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// State.
    pub state: GhPullRequestState,
    /// Title.
    pub title: String,
    /// User, empty for deleted accounts.
    #[serde(default, deserialize_with = "GhUser::deserialize_nullable")]
    pub user: GhUser,
    /// Web URL.
    pub html_url: String,
    /// Created at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Requested reviewers.
    #[serde(default)]
    pub requested_reviewers: Vec<GhUser>,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    /// Draft.
    #[serde(default)]
    pub draft: bool,
    /// Merged?
    pub merged: Option<bool>,
}

impl GhPullRequest {
    /// Logins of the requested reviewers.
    pub fn requested_reviewer_logins(&self) -> Vec<String> {
        self.requested_reviewers
            .iter()
            .map(|u| u.login.clone())
            .collect()
    }

    /// Whether the pull request was merged.
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}
