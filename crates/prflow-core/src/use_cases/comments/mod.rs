pub(crate) mod handle_issue_comment_event;

pub use handle_issue_comment_event::HandleIssueCommentEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::handle_issue_comment_event::MockHandleIssueCommentEventInterface;
