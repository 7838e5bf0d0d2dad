use async_trait::async_trait;
use prflow_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};

use super::{RequestSecondReviewersInterface, ReviewStateUsers};
use crate::{CoreContext, Result};

/// Review state of a pull request, with the reviewers still owing a verdict.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub users: ReviewStateUsers,
    pub second_approvers: Vec<String>,
}

impl ReviewSummary {
    /// Requested reviewers, then commenters, then change requesters, without duplicates.
    pub fn pending_approvers(users: &ReviewStateUsers, requested_reviewers: &[String]) -> Vec<String> {
        let mut approvers: Vec<String> = Vec::new();
        for login in requested_reviewers
            .iter()
            .chain(users.commented.iter())
            .chain(users.changes_requested.iter())
        {
            if !approvers.contains(login) {
                approvers.push(login.clone());
            }
        }

        approvers
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveReviewSummaryInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        author: &str,
        requested_reviewers: &[String],
    ) -> Result<ReviewSummary>;
}

#[derive(Component)]
#[shaku(interface = ResolveReviewSummaryInterface)]
pub(crate) struct ResolveReviewSummary;

#[async_trait]
impl ResolveReviewSummaryInterface for ResolveReviewSummary {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        author: &str,
        requested_reviewers: &[String],
    ) -> Result<ReviewSummary> {
        let reviews = ctx
            .api_service
            .pull_reviews_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        let users = ReviewStateUsers::from_reviews(&reviews, author);
        let mut second_approvers = ReviewSummary::pending_approvers(&users, requested_reviewers);

        if second_approvers.is_empty() {
            let excluded: Vec<String> = std::iter::once(author.to_string())
                .chain(users.with_verdict().cloned())
                .collect();

            let request_second_reviewers: &dyn RequestSecondReviewersInterface =
                ctx.core_module.resolve_ref();
            second_approvers = request_second_reviewers
                .run(ctx, pr_handle, &excluded)
                .await?;
        }

        Ok(ReviewSummary {
            users,
            second_approvers,
        })
    }
}
