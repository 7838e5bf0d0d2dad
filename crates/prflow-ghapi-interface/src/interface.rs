use async_trait::async_trait;

use crate::{
    review::GhReviewApi,
    types::{GhPullRequest, GhPullRequestState},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List pull requests from a repository, in the order returned by GitHub.
    async fn pulls_list(
        &self,
        owner: &str,
        name: &str,
        state: GhPullRequestState,
    ) -> Result<Vec<GhPullRequest>>;
    /// List reviews from a pull request, oldest first.
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>>;
    /// Add reviewers to a pull request.
    async fn pull_reviewer_requests_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        reviewers: &[String],
    ) -> Result<()>;
    /// Post a comment on a pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;
}
