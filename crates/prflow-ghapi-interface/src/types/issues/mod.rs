mod issue;
mod issue_comment;
mod issue_comment_action;
mod issue_comment_event;

pub use issue::GhIssue;
pub use issue_comment::GhIssueComment;
pub use issue_comment_action::GhIssueCommentAction;
pub use issue_comment_event::GhIssueCommentEvent;
