//! Chat message templates.
//!
//! Every function here is pure: it turns event data and the workflow user
//! mapping into a [`ChatMessage`](prflow_chat_interface::ChatMessage).

mod blocks;
mod notifications;
mod reminders;
mod users;

pub use notifications::{
    comment_added_message, label_added_message, new_commit_message, pull_request_merged_message,
    pull_request_opened_message, ready_to_merge_message, review_requested_message,
    review_submitted_message, second_reviewer_message,
};
pub use reminders::{
    author_reminder_message, change_requester_reminder_message, reviewer_reminder_message,
};
pub use users::{greeting, user_mention};
