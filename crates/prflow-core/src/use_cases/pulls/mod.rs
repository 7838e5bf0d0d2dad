pub(crate) mod handle_pull_request_event;
pub(crate) mod post_pull_request_opened;

pub use handle_pull_request_event::HandlePullRequestEventInterface;
pub use post_pull_request_opened::PostPullRequestOpenedInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    handle_pull_request_event::MockHandlePullRequestEventInterface,
    post_pull_request_opened::MockPostPullRequestOpenedInterface,
};
