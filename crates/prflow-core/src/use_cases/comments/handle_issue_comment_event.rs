use async_trait::async_trait;
use prflow_ghapi_interface::types::{GhIssueCommentAction, GhIssueCommentEvent};
use shaku::{Component, HasComponent, Interface};

use crate::{
    messages::comment_added_message, use_cases::threads::PostThreadReplyInterface, CoreContext,
    Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleIssueCommentEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleIssueCommentEventInterface)]
pub(crate) struct HandleIssueCommentEvent;

#[async_trait]
impl HandleIssueCommentEventInterface for HandleIssueCommentEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            issue_number = event.issue.number,
            repository_path = %event.repository.full_name,
            comment_author = %event.comment.user.login
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhIssueCommentEvent) -> Result<()> {
        if event.action != GhIssueCommentAction::Created {
            tracing::debug!("Ignoring comment action");
            return Ok(());
        }

        if !event.issue.is_pull_request() {
            tracing::debug!("Comment is not on a pull request");
            return Ok(());
        }

        let message = comment_added_message(
            ctx.workflow,
            &event.comment.html_url,
            &event.issue.user.login,
            &event.sender.login,
        );

        let post_thread_reply: &dyn PostThreadReplyInterface = ctx.core_module.resolve_ref();
        post_thread_reply
            .run(ctx, &event.repository.name, event.issue.number, message)
            .await?;

        Ok(())
    }
}
