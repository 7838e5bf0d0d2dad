use serde::{Deserialize, Serialize};

use super::{GhReview, GhReviewAction};
use crate::types::{common::GhRepository, pulls::GhPullRequest, GhUser};

/// GitHub Review event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhReviewEvent {
    /// Action.
    pub action: GhReviewAction,
    /// Review.
    pub review: GhReview,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
