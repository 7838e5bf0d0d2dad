use async_trait::async_trait;
use futures::future::join_all;
use prflow_chat_interface::ChatMessage;
use prflow_config::WorkflowConfig;
use prflow_ghapi_interface::types::GhPullRequest;
use prflow_models::{PullRequestHandle, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;

use super::{is_reminder_due, Reminder, ReminderKind, ReminderPlan};
use crate::{
    messages::{
        author_reminder_message, change_requester_reminder_message, reviewer_reminder_message,
    },
    use_cases::{reviews::ResolveReviewSummaryInterface, threads::FindPullRequestThreadInterface},
    CoreContext, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    /// Updated too recently.
    NotDue,
    /// No chat thread to reply to.
    NoThread,
    /// Reminders were attempted.
    Sent { delivered: usize, failed: usize },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SendPullRequestRemindersInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pull_request: &GhPullRequest,
        remind_after: f64,
        now: OffsetDateTime,
    ) -> Result<ReminderOutcome>;
}

#[derive(Component)]
#[shaku(interface = SendPullRequestRemindersInterface)]
pub(crate) struct SendPullRequestReminders;

fn reminder_message(workflow: &WorkflowConfig, reminder: &Reminder, pr_url: &str) -> ChatMessage {
    match reminder.kind {
        ReminderKind::Author => author_reminder_message(workflow, &reminder.login, pr_url),
        ReminderKind::Reviewer => reviewer_reminder_message(workflow, &reminder.login, pr_url),
        ReminderKind::ChangeRequester => {
            change_requester_reminder_message(workflow, &reminder.login, pr_url)
        }
    }
}

#[async_trait]
impl SendPullRequestRemindersInterface for SendPullRequestReminders {
    #[tracing::instrument(
        skip_all,
        fields(
            repository_path = %repository_path,
            pr_number = pull_request.number,
            updated_at = %pull_request.updated_at
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pull_request: &GhPullRequest,
        remind_after: f64,
        now: OffsetDateTime,
    ) -> Result<ReminderOutcome> {
        if !is_reminder_due(now, pull_request.updated_at, remind_after) {
            return Ok(ReminderOutcome::NotDue);
        }

        let find_pull_request_thread: &dyn FindPullRequestThreadInterface =
            ctx.core_module.resolve_ref();
        let thread_ts = match find_pull_request_thread
            .run(ctx, repository_path.name(), pull_request.number)
            .await?
        {
            Some(ts) => ts,
            None => {
                tracing::warn!("Chat thread not found for pull request, skipping reminders");
                return Ok(ReminderOutcome::NoThread);
            }
        };

        let author = &pull_request.user.login;
        let pr_handle = PullRequestHandle::new(repository_path.clone(), pull_request.number);
        let resolve_review_summary: &dyn ResolveReviewSummaryInterface =
            ctx.core_module.resolve_ref();
        let summary = resolve_review_summary
            .run(
                ctx,
                &pr_handle,
                author,
                &pull_request.requested_reviewer_logins(),
            )
            .await?;

        let plan = ReminderPlan::from_summary(author, &summary);
        let messages: Vec<(&Reminder, ChatMessage)> = plan
            .reminders()
            .iter()
            .map(|reminder| {
                (
                    reminder,
                    reminder_message(ctx.workflow, reminder, &pull_request.html_url),
                )
            })
            .collect();

        let channel = ctx.channel_id();
        let thread_ts = thread_ts.as_str();
        let results = join_all(messages.iter().map(|(reminder, message)| async move {
            let result = ctx
                .chat_service
                .messages_post(channel, Some(thread_ts.to_string()), message)
                .await;
            (*reminder, result)
        }))
        .await;

        let (mut delivered, mut failed) = (0, 0);
        for (reminder, result) in results {
            match result {
                Ok(_) => delivered += 1,
                Err(e) => {
                    tracing::error!(
                        recipient = %reminder.login,
                        kind = ?reminder.kind,
                        error = %e,
                        "Could not deliver reminder"
                    );
                    failed += 1;
                }
            }
        }

        Ok(ReminderOutcome::Sent { delivered, failed })
    }
}

#[cfg(test)]
mod tests {
    use prflow_chat_interface::ChatError;
    use prflow_ghapi_interface::types::GhUser;
    use pretty_assertions::assert_eq;
    use time::{macros::datetime, Duration};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            reviews::{MockResolveReviewSummaryInterface, ReviewStateUsers, ReviewSummary},
            threads::MockFindPullRequestThreadInterface,
        },
        CoreModule,
    };

    const NOW: OffsetDateTime = datetime!(2024-01-10 12:00 UTC);

    fn arrange_pull_request(inactive_hours: i64) -> GhPullRequest {
        GhPullRequest {
            number: 3,
            user: GhUser::from("alice"),
            html_url: "https://github.com/me/test/pull/3".into(),
            updated_at: NOW - Duration::hours(inactive_hours),
            requested_reviewers: vec![GhUser::from("carol")],
            ..Default::default()
        }
    }

    fn arrange_module(thread: Option<&'static str>, summary: Option<ReviewSummary>) -> CoreModule {
        let mut find_pull_request_thread = MockFindPullRequestThreadInterface::new();
        find_pull_request_thread
            .expect_run()
            .once()
            .withf(|_, name, number| name == "test" && number == &3)
            .return_once(move |_, _, _| Ok(thread.map(Into::into)));

        let mut resolve_review_summary = MockResolveReviewSummaryInterface::new();
        match summary {
            Some(summary) => {
                resolve_review_summary
                    .expect_run()
                    .once()
                    .withf(|_, pr_handle, author, requested| {
                        pr_handle == &("me", "test", 3).into()
                            && author == "alice"
                            && requested.to_vec() == vec!["carol".to_string()]
                    })
                    .return_once(move |_, _, _, _| Ok(summary));
            }
            None => {
                resolve_review_summary.expect_run().never();
            }
        }

        CoreModule::builder()
            .with_component_override::<dyn FindPullRequestThreadInterface>(Box::new(
                find_pull_request_thread,
            ))
            .with_component_override::<dyn ResolveReviewSummaryInterface>(Box::new(
                resolve_review_summary,
            ))
            .build()
    }

    fn summary(approved: &[&str], changes_requested: &[&str], second: &[&str]) -> ReviewSummary {
        let owned = |users: &[&str]| users.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        ReviewSummary {
            users: ReviewStateUsers {
                approved: owned(approved),
                changes_requested: owned(changes_requested),
                commented: vec![],
            },
            second_approvers: owned(second),
        }
    }

    #[tokio::test]
    async fn recent_pull_request_is_not_due() {
        let ctx = CoreContextTest::new();

        let outcome = SendPullRequestReminders
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &arrange_pull_request(10),
                24.0,
                NOW,
            )
            .await
            .unwrap();

        assert_eq!(outcome, ReminderOutcome::NotDue);
    }

    #[tokio::test]
    async fn missing_thread_sends_nothing() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(None, None);

        let outcome = SendPullRequestReminders
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &arrange_pull_request(30),
                24.0,
                NOW,
            )
            .await
            .unwrap();

        assert_eq!(outcome, ReminderOutcome::NoThread);
    }

    #[tokio::test]
    async fn ready_pull_request_reminds_author_once() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some("3.0"), Some(summary(&["bob", "carol"], &[], &[])));
        ctx.chat_service
            .expect_messages_post()
            .once()
            .withf(|_, thread_ts, message| {
                thread_ts == &Some("3.0".to_string())
                    && message.blocks[0]["text"]["text"]
                        == "Hi <@U01> :wave:\nThe <https://github.com/me/test/pull/3|pull request> is ready to be merged and waiting your action."
            })
            .return_once(|_, _, _| Ok("3.1".into()));

        let outcome = SendPullRequestReminders
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &arrange_pull_request(30),
                24.0,
                NOW,
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReminderOutcome::Sent {
                delivered: 1,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn one_failed_delivery_does_not_block_others() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some("3.0"), Some(summary(&["bob"], &[], &["carol", "dave"])));
        ctx.chat_service
            .expect_messages_post()
            .times(2)
            .returning(|_, _, message| {
                let text = message.blocks[0]["text"]["text"].as_str().unwrap_or_default();
                if text.contains("<@U03>") {
                    Err(ChatError::SlackError {
                        error: "ratelimited".into(),
                    })
                } else {
                    assert!(text.contains("*dave*"));
                    Ok("3.1".into())
                }
            });

        let outcome = SendPullRequestReminders
            .run(
                &ctx.as_context(),
                &("me", "test").into(),
                &arrange_pull_request(30),
                24.0,
                NOW,
            )
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ReminderOutcome::Sent {
                delivered: 1,
                failed: 1
            }
        );
    }
}
