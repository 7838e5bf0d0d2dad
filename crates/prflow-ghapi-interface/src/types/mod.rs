//! GitHub types.

mod common;
mod issues;
mod pulls;
mod reviews;

pub use common::{GhLabel, GhRepository, GhUser};
pub use issues::{GhIssue, GhIssueComment, GhIssueCommentAction, GhIssueCommentEvent};
pub use pulls::{GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhPullRequestState};
pub use reviews::{GhReview, GhReviewAction, GhReviewEvent, GhReviewState, GhReviewStateError};
