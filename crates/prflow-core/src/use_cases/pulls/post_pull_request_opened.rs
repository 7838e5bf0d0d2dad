use async_trait::async_trait;
use prflow_ghapi_interface::types::{GhPullRequest, GhRepository};
use shaku::{Component, Interface};

use crate::{messages::pull_request_opened_message, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostPullRequestOpenedInterface: Interface {
    /// Post the root message of the pull request thread, returning its timestamp.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &GhRepository,
        pull_request: &GhPullRequest,
        actor: &str,
    ) -> Result<String>;
}

#[derive(Component)]
#[shaku(interface = PostPullRequestOpenedInterface)]
pub(crate) struct PostPullRequestOpened;

#[async_trait]
impl PostPullRequestOpenedInterface for PostPullRequestOpened {
    #[tracing::instrument(
        skip_all,
        fields(
            repository_path = %repository.full_name,
            pr_number = pull_request.number,
            actor = actor
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository: &GhRepository,
        pull_request: &GhPullRequest,
        actor: &str,
    ) -> Result<String> {
        let message = pull_request_opened_message(ctx.workflow, repository, pull_request, actor);

        ctx.chat_service
            .messages_post(ctx.channel_id(), None, &message)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use prflow_ghapi_interface::types::GhUser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::{CoreContextTest, TEST_CHANNEL_ID};

    #[tokio::test]
    async fn root_message_carries_marker() {
        let mut ctx = CoreContextTest::new();
        ctx.chat_service
            .expect_messages_post()
            .once()
            .withf(|channel, thread_ts, message| {
                channel == TEST_CHANNEL_ID
                    && thread_ts.is_none()
                    && message.text.as_deref() == Some("test-7")
                    && message.blocks.len() == 5
            })
            .return_once(|_, _, _| Ok("7.0".into()));

        let ts = PostPullRequestOpened
            .run(
                &ctx.as_context(),
                &GhRepository {
                    owner: GhUser::from("me"),
                    name: "test".into(),
                    full_name: "me/test".into(),
                    ..Default::default()
                },
                &GhPullRequest {
                    number: 7,
                    ..Default::default()
                },
                "alice",
            )
            .await
            .unwrap();

        assert_eq!(ts, "7.0");
    }
}
