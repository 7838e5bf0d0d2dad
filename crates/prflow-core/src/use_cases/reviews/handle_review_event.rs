use async_trait::async_trait;
use prflow_ghapi_interface::types::{GhReviewAction, GhReviewEvent, GhReviewState};
use prflow_models::PullRequestHandle;
use shaku::{Component, HasComponent, Interface};

use super::ResolveReviewSummaryInterface;
use crate::{
    messages::{ready_to_merge_message, review_submitted_message, second_reviewer_message},
    use_cases::threads::FindPullRequestThreadInterface,
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleReviewEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhReviewEvent) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = HandleReviewEventInterface)]
pub(crate) struct HandleReviewEvent;

#[async_trait]
impl HandleReviewEventInterface for HandleReviewEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            repo_owner = event.repository.owner.login,
            repo_name = event.repository.name,
            pr_number = event.pull_request.number,
            reviewer = event.review.user.login,
            state = ?event.review.state
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhReviewEvent) -> Result<()> {
        if event.action != GhReviewAction::Submitted {
            tracing::debug!(action = ?event.action, "Ignoring review action");
            return Ok(());
        }

        let repo_owner = &event.repository.owner.login;
        let repo_name = &event.repository.name;
        let pr_number = event.pull_request.number;
        let pr_url = &event.pull_request.html_url;
        let author = &event.pull_request.user.login;
        let actor = &event.sender.login;

        let find_pull_request_thread: &dyn FindPullRequestThreadInterface =
            ctx.core_module.resolve_ref();
        let thread_ts = match find_pull_request_thread
            .run(ctx, repo_name, pr_number)
            .await?
        {
            Some(ts) => ts,
            None => {
                tracing::warn!("Chat thread not found for pull request, skipping notification");
                return Ok(());
            }
        };

        ctx.chat_service
            .messages_post(
                ctx.channel_id(),
                Some(thread_ts.clone()),
                &review_submitted_message(
                    ctx.workflow,
                    &event.review.html_url,
                    event.review.state,
                    author,
                    actor,
                ),
            )
            .await?;

        let pr_handle: PullRequestHandle =
            (repo_owner.as_str(), repo_name.as_str(), pr_number).into();
        let resolve_review_summary: &dyn ResolveReviewSummaryInterface =
            ctx.core_module.resolve_ref();
        let summary = resolve_review_summary
            .run(
                ctx,
                &pr_handle,
                author,
                &event.pull_request.requested_reviewer_logins(),
            )
            .await?;

        tracing::info!(
            approved = ?summary.users.approved,
            changes_requested = ?summary.users.changes_requested,
            commented = ?summary.users.commented,
            second_approvers = ?summary.second_approvers,
            "Review summary"
        );

        if event.review.state != GhReviewState::Approved {
            return Ok(());
        }

        let approved_count = summary.users.approved.len();
        if approved_count == 1 {
            if summary.second_approvers.is_empty() {
                tracing::warn!("No second reviewer to notify");
            } else {
                ctx.chat_service
                    .messages_post(
                        ctx.channel_id(),
                        Some(thread_ts.clone()),
                        &second_reviewer_message(ctx.workflow, pr_url, &summary.second_approvers),
                    )
                    .await?;
            }
        }

        if approved_count >= 2 && summary.users.changes_requested.is_empty() {
            ctx.chat_service
                .messages_post(
                    ctx.channel_id(),
                    Some(thread_ts),
                    &ready_to_merge_message(ctx.workflow, pr_url, author, actor),
                )
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate;
    use prflow_ghapi_interface::types::{GhPullRequest, GhRepository, GhReview, GhUser};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            reviews::{MockResolveReviewSummaryInterface, ReviewStateUsers, ReviewSummary},
            threads::MockFindPullRequestThreadInterface,
        },
        CoreModule,
    };

    fn arrange_event(state: GhReviewState) -> GhReviewEvent {
        GhReviewEvent {
            action: GhReviewAction::Submitted,
            review: GhReview {
                user: GhUser::from("bob"),
                state,
                html_url: "https://github.com/me/test/pull/1#review".into(),
                ..Default::default()
            },
            pull_request: GhPullRequest {
                number: 1,
                user: GhUser::from("alice"),
                html_url: "https://github.com/me/test/pull/1".into(),
                ..Default::default()
            },
            repository: GhRepository {
                owner: GhUser::from("me"),
                name: "test".into(),
                ..Default::default()
            },
            sender: GhUser::from("bob"),
        }
    }

    fn arrange_module(thread: Option<&'static str>, summary: Option<ReviewSummary>) -> CoreModule {
        let mut find_pull_request_thread = MockFindPullRequestThreadInterface::new();
        find_pull_request_thread
            .expect_run()
            .once()
            .return_once(move |_, _, _| Ok(thread.map(Into::into)));

        let mut resolve_review_summary = MockResolveReviewSummaryInterface::new();
        match summary {
            Some(summary) => {
                resolve_review_summary
                    .expect_run()
                    .once()
                    .withf(|_, pr_handle, author, _| {
                        pr_handle == &("me", "test", 1).into() && author == "alice"
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

    fn first_block_text(message: &prflow_chat_interface::ChatMessage) -> String {
        message.blocks[0]["text"]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn missing_thread() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(None, None);

        HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewState::Approved))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn first_approval_notifies_second_reviewers() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(
            Some("1.0"),
            Some(summary(&["bob"], &[], &["carol", "dave"])),
        );

        let mut seq = mockall::Sequence::new();
        ctx.chat_service
            .expect_messages_post()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, thread_ts, message| {
                thread_ts == &Some("1.0".to_string())
                    && first_block_text(message).contains("review comment")
            })
            .return_once(|_, _, _| Ok("1.1".into()));
        ctx.chat_service
            .expect_messages_post()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, thread_ts, message| {
                thread_ts == &Some("1.0".to_string())
                    && first_block_text(message)
                        == "Hi <@U03>, *dave* :wave:\nYou are assigned as a *second code reviewer*,"
            })
            .return_once(|_, _, _| Ok("1.2".into()));

        HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewState::Approved))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn second_approval_notifies_author() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some("1.0"), Some(summary(&["carol", "bob"], &[], &[])));

        ctx.chat_service
            .expect_messages_post()
            .times(2)
            .with(
                predicate::always(),
                predicate::eq(Some("1.0".to_string())),
                predicate::always(),
            )
            .returning(|_, _, message| {
                let text = first_block_text(message);
                assert!(
                    text.contains("review comment") || text.contains("ready to be merged"),
                    "unexpected message: {text}"
                );
                Ok("1.1".into())
            });

        HandleReviewEvent
            .run(&ctx.as_context(), arrange_event(GhReviewState::Approved))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn change_request_only_posts_review_message() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = arrange_module(Some("1.0"), Some(summary(&["carol"], &["bob"], &["bob"])));

        ctx.chat_service
            .expect_messages_post()
            .once()
            .withf(|_, _, message| {
                message.blocks[1]["elements"][0]["text"]
                    == "*Review State:* CHANGES REQUESTED :red_circle:"
            })
            .return_once(|_, _, _| Ok("1.1".into()));

        HandleReviewEvent
            .run(
                &ctx.as_context(),
                arrange_event(GhReviewState::ChangesRequested),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dismissed_action_is_ignored() {
        let ctx = CoreContextTest::new();

        HandleReviewEvent
            .run(
                &ctx.as_context(),
                GhReviewEvent {
                    action: GhReviewAction::Dismissed,
                    ..arrange_event(GhReviewState::Dismissed)
                },
            )
            .await
            .unwrap();
    }
}
