use serde::{Deserialize, Serialize};

use super::{GhPullRequest, GhPullRequestAction};
use crate::types::common::{GhLabel, GhRepository, GhUser};

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Label.
    pub label: Option<GhLabel>,
    /// Requested reviewer.
    pub requested_reviewer: Option<GhUser>,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
    /// Head SHA before a synchronize.
    pub before: Option<String>,
    /// Head SHA after a synchronize.
    pub after: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_is_accepted() {
        let action: GhPullRequestAction = serde_json::from_str(r#""auto_merge_enabled""#).unwrap();
        assert_eq!(action, GhPullRequestAction::Other);

        let action: GhPullRequestAction = serde_json::from_str(r#""review_requested""#).unwrap();
        assert_eq!(action, GhPullRequestAction::ReviewRequested);
    }
}
