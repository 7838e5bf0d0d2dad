use prflow_chat_interface::ChatMessage;
use prflow_config::WorkflowConfig;

use super::{blocks, users::user_mention};

pub fn author_reminder_message(
    workflow: &WorkflowConfig,
    author: &str,
    pull_request_url: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "Hi {} :wave:\nThe <{pull_request_url}|pull request> is ready to be merged and waiting your action.",
        user_mention(workflow, author)
    ))])
}

pub fn reviewer_reminder_message(
    workflow: &WorkflowConfig,
    reviewer: &str,
    pull_request_url: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section_with_review_button(
        &format!(
            "Hi {} :wave:\nThe <{pull_request_url}|pull request> is waiting for your review.",
            user_mention(workflow, reviewer)
        ),
        pull_request_url,
    )])
}

pub fn change_requester_reminder_message(
    workflow: &WorkflowConfig,
    change_requester: &str,
    pull_request_url: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section_with_review_button(
        &format!(
            "Hi {} :wave:\nThe <{pull_request_url}|pull request> is waiting for your approval.",
            user_mention(workflow, change_requester)
        ),
        pull_request_url,
    )])
}
