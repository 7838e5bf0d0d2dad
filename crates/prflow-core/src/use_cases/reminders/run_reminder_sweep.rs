use async_trait::async_trait;
use prflow_ghapi_interface::types::GhPullRequestState;
use prflow_models::RepositoryPath;
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;

use super::{ReminderOutcome, SendPullRequestRemindersInterface};
use crate::{CoreContext, Result};

/// What happened during one sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderSweepReport {
    pub pull_requests: usize,
    pub not_due: usize,
    pub without_thread: usize,
    pub reminded: usize,
    pub messages_delivered: usize,
    pub messages_failed: usize,
    pub errors: usize,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunReminderSweepInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        state: GhPullRequestState,
    ) -> Result<ReminderSweepReport>;
}

#[derive(Component)]
#[shaku(interface = RunReminderSweepInterface)]
pub(crate) struct RunReminderSweep;

#[async_trait]
impl RunReminderSweepInterface for RunReminderSweep {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        state: GhPullRequestState,
    ) -> Result<ReminderSweepReport> {
        let mut report = ReminderSweepReport::default();

        let remind_after = match ctx.workflow.remind_after() {
            Some(hours) => hours,
            None => {
                tracing::info!("remindAfter is not set, reminders are disabled");
                return Ok(report);
            }
        };

        let pulls = ctx
            .api_service
            .pulls_list(repository_path.owner(), repository_path.name(), state)
            .await?;

        if pulls.is_empty() {
            tracing::info!("No pull request to remind about");
            return Ok(report);
        }

        let now = OffsetDateTime::now_utc();
        let send_pull_request_reminders: &dyn SendPullRequestRemindersInterface =
            ctx.core_module.resolve_ref();

        for pull_request in &pulls {
            report.pull_requests += 1;

            match send_pull_request_reminders
                .run(ctx, repository_path, pull_request, remind_after, now)
                .await
            {
                Ok(ReminderOutcome::NotDue) => report.not_due += 1,
                Ok(ReminderOutcome::NoThread) => report.without_thread += 1,
                Ok(ReminderOutcome::Sent { delivered, failed }) => {
                    report.reminded += 1;
                    report.messages_delivered += delivered;
                    report.messages_failed += failed;
                }
                Err(e) => {
                    tracing::error!(
                        pr_number = pull_request.number,
                        error = %e,
                        "Could not process reminders for pull request"
                    );
                    report.errors += 1;
                }
            }
        }

        Ok(report)
    }
}
