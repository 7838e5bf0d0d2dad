use async_trait::async_trait;
use clap::Parser;
use prflow_core::use_cases::reminders::RunReminderSweepInterface;
use prflow_ghapi_interface::types::GhPullRequestState;
use prflow_models::RepositoryPath;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Remind reviewers and authors about stale pull requests
#[derive(Parser)]
pub(crate) struct RemindCommand {
    /// Repository path (e.g. 'MyOrganization/my-project')
    repository_path: RepositoryPath,

    /// Pull request state filter (open, closed, all)
    #[arg(long, default_value = "open")]
    state: GhPullRequestState,
}

#[async_trait]
impl Command for RemindCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let workflow = ctx.load_workflow()?;
        let core_context = ctx.as_core_context(&workflow);

        let run_reminder_sweep: &dyn RunReminderSweepInterface = ctx.core_module.resolve_ref();
        let report = run_reminder_sweep
            .run(&core_context, &self.repository_path, self.state)
            .await?;

        let mut writer = ctx.writer.write().await;
        writeln!(
            writer,
            "Reminder sweep on '{}': {} pull request(s) checked.",
            self.repository_path, report.pull_requests
        )?;
        writeln!(
            writer,
            "  - reminded: {} ({} message(s) sent, {} failed)",
            report.reminded, report.messages_delivered, report.messages_failed
        )?;
        writeln!(writer, "  - not due: {}", report.not_due)?;
        writeln!(writer, "  - without thread: {}", report.without_thread)?;
        writeln!(writer, "  - errors: {}", report.errors)?;

        Ok(())
    }
}
