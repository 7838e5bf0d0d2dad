use async_trait::async_trait;
use prflow_models::PullRequestHandle;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Maximum number of reviewers picked by auto-assignment.
pub const AUTO_ASSIGNED_REVIEWERS: usize = 2;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RequestSecondReviewersInterface: Interface {
    /// Pick reviewers from the workflow pool and request them on the pull request.
    ///
    /// Returns the picked logins.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        excluded: &[String],
    ) -> Result<Vec<String>>;
}

#[derive(Component)]
#[shaku(interface = RequestSecondReviewersInterface)]
pub(crate) struct RequestSecondReviewers;

#[async_trait]
impl RequestSecondReviewersInterface for RequestSecondReviewers {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        excluded: &[String],
    ) -> Result<Vec<String>> {
        let selected: Vec<String> = ctx
            .workflow
            .github_user_names()
            .iter()
            .filter(|login| !excluded.contains(*login))
            .take(AUTO_ASSIGNED_REVIEWERS)
            .cloned()
            .collect();

        if selected.is_empty() {
            tracing::warn!(
                pr_handle = %pr_handle,
                "No eligible reviewer left in the workflow pool"
            );

            ctx.api_service
                .comments_post(
                    pr_handle.owner(),
                    pr_handle.name(),
                    pr_handle.number(),
                    "No reviewer could be assigned automatically: every eligible reviewer is either the author or has already reviewed.",
                )
                .await?;

            return Ok(selected);
        }

        ctx.api_service
            .pull_reviewer_requests_add(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &selected,
            )
            .await?;

        Ok(selected)
    }
}
