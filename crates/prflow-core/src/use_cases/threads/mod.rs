pub(crate) mod find_pull_request_thread;
pub(crate) mod post_thread_reply;

pub use find_pull_request_thread::FindPullRequestThreadInterface;
pub use post_thread_reply::PostThreadReplyInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    find_pull_request_thread::MockFindPullRequestThreadInterface,
    post_thread_reply::MockPostThreadReplyInterface,
};
