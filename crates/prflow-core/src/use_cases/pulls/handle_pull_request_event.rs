use async_trait::async_trait;
use prflow_ghapi_interface::types::{GhPullRequestAction, GhPullRequestEvent};
use shaku::{Component, HasComponent, Interface};

use super::PostPullRequestOpenedInterface;
use crate::{
    messages::{
        label_added_message, new_commit_message, pull_request_merged_message,
        review_requested_message,
    },
    use_cases::threads::PostThreadReplyInterface,
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandlePullRequestEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhPullRequestEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandlePullRequestEventInterface)]
pub(crate) struct HandlePullRequestEvent;

#[async_trait]
impl HandlePullRequestEventInterface for HandlePullRequestEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            pr_number = event.number,
            repository_path = %event.repository.full_name,
            username = %event.pull_request.user.login
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhPullRequestEvent) -> Result<()> {
        let repo_name = &event.repository.name;
        let pr_number = event.pull_request.number;
        let pr_url = &event.pull_request.html_url;
        let actor = &event.sender.login;

        let message = match event.action {
            GhPullRequestAction::Opened => {
                let post_pull_request_opened: &dyn PostPullRequestOpenedInterface =
                    ctx.core_module.resolve_ref();
                post_pull_request_opened
                    .run(ctx, &event.repository, &event.pull_request, actor)
                    .await?;

                return Ok(());
            }
            GhPullRequestAction::ReviewRequested => {
                let requested_reviewer = event
                    .requested_reviewer
                    .as_ref()
                    .map(|u| u.login.as_str())
                    .unwrap_or_default();
                review_requested_message(ctx.workflow, pr_url, requested_reviewer, actor)
            }
            GhPullRequestAction::Labeled => match &event.label {
                Some(label) => label_added_message(ctx.workflow, pr_url, &label.name, actor),
                None => {
                    tracing::warn!("Labeled event without label");
                    return Ok(());
                }
            },
            GhPullRequestAction::Closed if event.pull_request.is_merged() => {
                pull_request_merged_message(ctx.workflow, pr_url, actor)
            }
            GhPullRequestAction::Synchronize => match (&event.before, &event.after) {
                (before, Some(after)) if before.as_ref() != Some(after) => {
                    new_commit_message(ctx.workflow, pr_url, after, actor)
                }
                _ => {
                    tracing::debug!("Head did not change, nothing to notify");
                    return Ok(());
                }
            },
            _ => {
                tracing::debug!("Nothing to notify");
                return Ok(());
            }
        };

        let post_thread_reply: &dyn PostThreadReplyInterface = ctx.core_module.resolve_ref();
        post_thread_reply
            .run(ctx, repo_name, pr_number, message)
            .await?;

        Ok(())
    }
}
