use prflow_chat_interface::ChatMessage;
use prflow_config::WorkflowConfig;
use prflow_ghapi_interface::types::{GhPullRequest, GhRepository, GhReviewState};
use prflow_models::ThreadMarker;
use time::{macros::format_description, OffsetDateTime};

use super::{
    blocks,
    users::{greeting, user_mention},
};

const HAPPY_REVIEWS: &str = "_Happy code reviews_ :tada:";

fn format_created_at(created_at: OffsetDateTime) -> String {
    let date = created_at
        .format(format_description!("[day].[month].[year]"))
        .unwrap_or_default();
    let time = created_at
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default();

    format!("{date} | {time} UTC")
}

/// Root message of a pull request thread.
///
/// Its text is the thread marker, so the thread can be found back from
/// channel history.
pub fn pull_request_opened_message(
    workflow: &WorkflowConfig,
    repository: &GhRepository,
    pull_request: &GhPullRequest,
    actor: &str,
) -> ChatMessage {
    let reviewers = pull_request
        .requested_reviewers
        .iter()
        .map(|r| user_mention(workflow, &r.login))
        .collect::<Vec<_>>()
        .join(", ");

    let mut details = format!(
        "*PR Author:* {} \n*Repository:* <{}|{}> \n*Created At:* {} \n*Reviewers:* {}",
        user_mention(workflow, actor),
        repository.html_url,
        repository.name,
        format_created_at(pull_request.created_at),
        reviewers
    );
    if let Some(team_name) = workflow.team_name() {
        details.push_str(&format!(" \n*Team:* {team_name}"));
    }

    ChatMessage::from_blocks(vec![
        blocks::section(&format!(
            ":boom: *New Pull Request <{}|{}> is submitted*",
            pull_request.html_url, pull_request.title
        )),
        blocks::divider(),
        blocks::section_with_review_button(
            ":hourglass_flowing_sand: It is time to add your reviews",
            &pull_request.html_url,
        ),
        blocks::divider(),
        blocks::context(&details),
    ])
    .with_text(ThreadMarker::new(&repository.name, pull_request.number))
}

pub fn review_requested_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    requested_reviewer: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![
        blocks::section(&format!(
            "{}A new review was requested from you for the <{pull_request_url}|pull request> by {}.",
            greeting(workflow, requested_reviewer, actor),
            user_mention(workflow, actor)
        )),
        blocks::divider(),
        blocks::section_with_review_button(HAPPY_REVIEWS, pull_request_url),
    ])
}

pub fn label_added_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    label: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "A new label `{label}` added to the <{pull_request_url}|pull request> by {}.",
        user_mention(workflow, actor)
    ))])
}

pub fn pull_request_merged_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "The <{pull_request_url}|pull request> is merged by {}.",
        user_mention(workflow, actor)
    ))])
}

pub fn new_commit_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    head_sha: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "A new <{pull_request_url}/commits/{head_sha}|commit> added to the <{pull_request_url}|pull request> by {}.",
        user_mention(workflow, actor)
    ))])
}

pub fn comment_added_message(
    workflow: &WorkflowConfig,
    comment_url: &str,
    author: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "{}A new <{comment_url}|comment> added by {}",
        greeting(workflow, author, actor),
        user_mention(workflow, actor)
    ))])
}

pub fn review_submitted_message(
    workflow: &WorkflowConfig,
    review_url: &str,
    state: GhReviewState,
    author: &str,
    actor: &str,
) -> ChatMessage {
    let icon = match state {
        GhReviewState::Approved => ":large_green_circle:",
        GhReviewState::ChangesRequested => ":red_circle:",
        _ => ":page_with_curl:",
    };

    ChatMessage::from_blocks(vec![
        blocks::section(&format!(
            "{}A new <{review_url}|review comment> added by {}",
            greeting(workflow, author, actor),
            user_mention(workflow, actor)
        )),
        blocks::context(&format!(
            "*Review State:* {} {icon}",
            state.as_str().replace('_', " ")
        )),
    ])
}

/// Message addressed to every pending second approver at once.
pub fn second_reviewer_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    second_approvers: &[String],
) -> ChatMessage {
    let mentions = second_approvers
        .iter()
        .map(|login| user_mention(workflow, login))
        .collect::<Vec<_>>()
        .join(", ");

    ChatMessage::from_blocks(vec![
        blocks::section(&format!(
            "Hi {mentions} :wave:\nYou are assigned as a *second code reviewer*,"
        )),
        blocks::divider(),
        blocks::context(
            "• Please ensure all the review comments from the  *first code reviewer* have been addressed properly \n• If required, please add your own review comments as well",
        ),
        blocks::divider(),
        blocks::section_with_review_button(HAPPY_REVIEWS, pull_request_url),
    ])
}

pub fn ready_to_merge_message(
    workflow: &WorkflowConfig,
    pull_request_url: &str,
    author: &str,
    actor: &str,
) -> ChatMessage {
    ChatMessage::from_blocks(vec![blocks::section(&format!(
        "{}Your <{pull_request_url}|pull request>  ready to be merged :rocket:",
        greeting(workflow, author, actor)
    ))])
}

#[cfg(test)]
mod tests {
    use prflow_ghapi_interface::types::GhUser;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;
    use crate::context::tests::test_workflow;

    const URL: &str = "https://github.com/me/test/pull/1";

    #[test]
    fn opened_message() {
        let workflow = test_workflow(None);
        let repository = GhRepository {
            name: "test".into(),
            full_name: "me/test".into(),
            owner: "me".into(),
            html_url: "https://github.com/me/test".into(),
        };
        let pull_request = GhPullRequest {
            number: 1,
            title: "Add feature".into(),
            html_url: URL.into(),
            created_at: datetime!(2024-03-05 14:07:09 UTC),
            requested_reviewers: vec![GhUser::from("bob"), GhUser::from("dave")],
            ..Default::default()
        };

        let message = pull_request_opened_message(&workflow, &repository, &pull_request, "alice");

        assert_eq!(message.text.as_deref(), Some("test-1"));
        assert_eq!(message.blocks.len(), 5);
        assert_eq!(
            message.blocks[0]["text"]["text"],
            ":boom: *New Pull Request <https://github.com/me/test/pull/1|Add feature> is submitted*"
        );
        assert_eq!(
            message.blocks[2]["accessory"]["url"],
            "https://github.com/me/test/pull/1/files"
        );
        assert_eq!(
            message.blocks[4]["elements"][0]["text"],
            "*PR Author:* <@U01> \n*Repository:* <https://github.com/me/test|test> \n*Created At:* 05.03.2024 | 14:07:09 UTC \n*Reviewers:* <@U02>, *dave* \n*Team:* Core"
        );
    }

    #[test]
    fn review_submitted() {
        let workflow = test_workflow(None);
        let message = review_submitted_message(
            &workflow,
            "https://github.com/me/test/pull/1#pullrequestreview-1",
            GhReviewState::ChangesRequested,
            "alice",
            "bob",
        );

        assert_eq!(
            message.blocks[0]["text"]["text"],
            "Hi <@U01> :wave:\nA new <https://github.com/me/test/pull/1#pullrequestreview-1|review comment> added by <@U02>"
        );
        assert_eq!(
            message.blocks[1]["elements"][0]["text"],
            "*Review State:* CHANGES REQUESTED :red_circle:"
        );
    }

    #[test]
    fn second_reviewer() {
        let workflow = test_workflow(None);
        let message =
            second_reviewer_message(&workflow, URL, &["bob".to_string(), "dave".to_string()]);

        assert_eq!(
            message.blocks[0]["text"]["text"],
            "Hi <@U02>, *dave* :wave:\nYou are assigned as a *second code reviewer*,"
        );
        assert_eq!(message.blocks[4]["text"]["text"], HAPPY_REVIEWS);
    }

    #[test]
    fn new_commit() {
        let workflow = test_workflow(None);
        let message = new_commit_message(&workflow, URL, "abc123", "dave");

        assert_eq!(
            message.blocks[0]["text"]["text"],
            "A new <https://github.com/me/test/pull/1/commits/abc123|commit> added to the <https://github.com/me/test/pull/1|pull request> by *dave*."
        );
    }

    #[test]
    fn ready_to_merge_for_author_acting() {
        let workflow = test_workflow(None);
        let message = ready_to_merge_message(&workflow, URL, "alice", "alice");

        assert_eq!(
            message.blocks[0]["text"]["text"],
            "Your <https://github.com/me/test/pull/1|pull request>  ready to be merged :rocket:"
        );
    }
}
