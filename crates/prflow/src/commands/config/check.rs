use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use prflow_config::WorkflowConfig;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Validate a workflow document
#[derive(Parser)]
pub(crate) struct ConfigCheckCommand {
    /// Document path, defaults to the configured workflow path
    path: Option<PathBuf>,
}

#[async_trait]
impl Command for ConfigCheckCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let path = self
            .path
            .unwrap_or_else(|| PathBuf::from(&ctx.config.workflow_config_path));
        let workflow = WorkflowConfig::from_path(&path)?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Workflow configuration '{}' is valid.", path.display())?;
        writeln!(
            writer,
            "  - team: {}",
            workflow.team_name().unwrap_or("<none>")
        )?;
        writeln!(
            writer,
            "  - reviewers: {}",
            workflow.github_user_names().join(", ")
        )?;
        match workflow.remind_after() {
            Some(hours) => writeln!(writer, "  - remind after: {}h", hours)?,
            None => writeln!(writer, "  - remind after: disabled")?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_error, write_file, CommandContextTest};

    #[tokio::test]
    async fn valid_document() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        let path = ctx.config.workflow_config_path.clone();

        assert_eq!(
            test_command(ctx, &["config", "check"]).await,
            format!(
                "Workflow configuration '{path}' is valid.\n  \
                 - team: Core\n  \
                 - reviewers: alice, bob, carol\n  \
                 - remind after: 24h\n"
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn invalid_document() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();
        let path = write_file(
            &ctx.dir,
            "broken.json",
            r#"{"githubUserNames": [], "githubSlackUserMapper": {"alice": "U01"}}"#,
        );

        let err = test_command_error(ctx, &["config", "check", path.as_str()]).await;
        assert_eq!(
            err.to_string(),
            r#""githubUserNames" should be defined as ["githubUserName1", "githubUserName2", "githubUserName3"]"#
        );

        Ok(())
    }
}
