use async_trait::async_trait;
use prflow_chat_interface::ChatMessage;
use shaku::{Component, HasComponent, Interface};

use super::FindPullRequestThreadInterface;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostThreadReplyInterface: Interface {
    /// Reply in the pull request thread.
    ///
    /// A missing thread is logged and skipped, and gives `None`.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_name: &str,
        number: u64,
        message: ChatMessage,
    ) -> Result<Option<String>>;
}

#[derive(Component)]
#[shaku(interface = PostThreadReplyInterface)]
pub(crate) struct PostThreadReply;

#[async_trait]
impl PostThreadReplyInterface for PostThreadReply {
    #[tracing::instrument(skip(self, ctx, message))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_name: &str,
        number: u64,
        message: ChatMessage,
    ) -> Result<Option<String>> {
        let find_pull_request_thread: &dyn FindPullRequestThreadInterface =
            ctx.core_module.resolve_ref();

        match find_pull_request_thread
            .run(ctx, repository_name, number)
            .await?
        {
            Some(thread_ts) => Ok(Some(
                ctx.chat_service
                    .messages_post(ctx.channel_id(), Some(thread_ts), &message)
                    .await?,
            )),
            None => {
                tracing::warn!(
                    repository_name = repository_name,
                    pr_number = number,
                    "Chat thread not found for pull request, skipping notification"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::{CoreContextTest, TEST_CHANNEL_ID},
        use_cases::threads::MockFindPullRequestThreadInterface,
        CoreModule,
    };

    fn arrange_thread(thread: Option<&'static str>) -> MockFindPullRequestThreadInterface {
        let mut find_pull_request_thread = MockFindPullRequestThreadInterface::new();
        find_pull_request_thread
            .expect_run()
            .once()
            .withf(|_, name, number| name == "test" && number == &1)
            .return_once(move |_, _, _| Ok(thread.map(Into::into)));
        find_pull_request_thread
    }

    #[tokio::test]
    async fn reply_in_thread() {
        let mut ctx = CoreContextTest::new();
        ctx.chat_service
            .expect_messages_post()
            .once()
            .withf(|channel, thread_ts, message| {
                channel == TEST_CHANNEL_ID
                    && thread_ts == &Some("1.0".to_string())
                    && message.text.is_none()
            })
            .return_once(|_, _, _| Ok("1.1".into()));

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FindPullRequestThreadInterface>(Box::new(
                arrange_thread(Some("1.0")),
            ))
            .build();

        let reply = PostThreadReply
            .run(&ctx.as_context(), "test", 1, ChatMessage::default())
            .await
            .unwrap();

        assert_eq!(reply, Some("1.1".into()));
    }

    #[tokio::test]
    async fn missing_thread_is_skipped() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FindPullRequestThreadInterface>(Box::new(
                arrange_thread(None),
            ))
            .build();

        let reply = PostThreadReply
            .run(&ctx.as_context(), "test", 1, ChatMessage::default())
            .await
            .unwrap();

        assert_eq!(reply, None);
    }
}
