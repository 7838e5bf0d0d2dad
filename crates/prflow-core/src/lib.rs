//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod messages;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    comments::handle_issue_comment_event::HandleIssueCommentEvent,
    events::process_workflow_event::ProcessWorkflowEvent,
    pulls::{
        handle_pull_request_event::HandlePullRequestEvent,
        post_pull_request_opened::PostPullRequestOpened,
    },
    reminders::{
        run_reminder_sweep::RunReminderSweep,
        send_pull_request_reminders::SendPullRequestReminders,
    },
    reviews::{
        handle_review_event::HandleReviewEvent, request_second_reviewers::RequestSecondReviewers,
        resolve_review_summary::ResolveReviewSummary,
    },
    threads::{
        find_pull_request_thread::FindPullRequestThread, post_thread_reply::PostThreadReply,
    },
};

module! {
    pub CoreModule {
        components = [
            RequestSecondReviewers, ResolveReviewSummary, HandleReviewEvent,
            FindPullRequestThread, PostThreadReply,
            PostPullRequestOpened, HandlePullRequestEvent, HandleIssueCommentEvent,
            SendPullRequestReminders, RunReminderSweep, ProcessWorkflowEvent
        ],
        providers = []
    }
}
