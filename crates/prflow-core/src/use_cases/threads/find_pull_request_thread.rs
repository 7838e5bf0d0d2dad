use async_trait::async_trait;
use prflow_models::ThreadMarker;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FindPullRequestThreadInterface: Interface {
    /// Timestamp of the root message whose text is the pull request thread marker.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_name: &str,
        number: u64,
    ) -> Result<Option<String>>;
}

#[derive(Component)]
#[shaku(interface = FindPullRequestThreadInterface)]
pub(crate) struct FindPullRequestThread;

#[async_trait]
impl FindPullRequestThreadInterface for FindPullRequestThread {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_name: &str,
        number: u64,
    ) -> Result<Option<String>> {
        let marker = ThreadMarker::new(repository_name, number);
        let history = ctx.chat_service.history_list(ctx.channel_id()).await?;

        Ok(history
            .into_iter()
            .find(|message| marker.matches(&message.text))
            .map(|message| message.ts))
    }
}
