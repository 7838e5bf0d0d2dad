use async_trait::async_trait;
use prflow_ghapi_interface::types::{
    GhIssueCommentEvent, GhPullRequestEvent, GhPullRequestState, GhReviewEvent,
};
use prflow_models::RepositoryPath;
use shaku::{Component, HasComponent, Interface};

use crate::{
    use_cases::{
        comments::HandleIssueCommentEventInterface, pulls::HandlePullRequestEventInterface,
        reminders::RunReminderSweepInterface, reviews::HandleReviewEventInterface,
    },
    CoreContext, Result,
};

/// A supported repository event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    PullRequest(GhPullRequestEvent),
    PullRequestReview(GhReviewEvent),
    IssueComment(GhIssueCommentEvent),
    Schedule { repository_path: RepositoryPath },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessWorkflowEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: WorkflowEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ProcessWorkflowEventInterface)]
pub(crate) struct ProcessWorkflowEvent;

#[async_trait]
impl ProcessWorkflowEventInterface for ProcessWorkflowEvent {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: WorkflowEvent) -> Result<()> {
        match event {
            WorkflowEvent::PullRequest(event) => {
                let handle_pull_request_event: &dyn HandlePullRequestEventInterface =
                    ctx.core_module.resolve_ref();
                handle_pull_request_event.run(ctx, event).await
            }
            WorkflowEvent::PullRequestReview(event) => {
                let handle_review_event: &dyn HandleReviewEventInterface =
                    ctx.core_module.resolve_ref();
                handle_review_event.run(ctx, event).await
            }
            WorkflowEvent::IssueComment(event) => {
                let handle_issue_comment_event: &dyn HandleIssueCommentEventInterface =
                    ctx.core_module.resolve_ref();
                handle_issue_comment_event.run(ctx, event).await
            }
            WorkflowEvent::Schedule { repository_path } => {
                let run_reminder_sweep: &dyn RunReminderSweepInterface =
                    ctx.core_module.resolve_ref();
                let report = run_reminder_sweep
                    .run(ctx, &repository_path, GhPullRequestState::Open)
                    .await?;

                tracing::info!(
                    repository_path = %repository_path,
                    report = ?report,
                    "Reminder sweep done"
                );

                Ok(())
            }
        }
    }
}
