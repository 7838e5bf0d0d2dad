use std::path::PathBuf;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use clap::Parser;
use prflow_core::use_cases::events::{ProcessWorkflowEventInterface, WorkflowEvent};
use prflow_models::RepositoryPath;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    event_type::{parse_event_payload, EventType},
    Result,
};

/// Handle one GitHub event
#[derive(Parser)]
pub(crate) struct EventCommand {
    /// Event name (e.g. 'pull_request')
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    name: String,

    /// Path to the JSON event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    payload: Option<PathBuf>,

    /// Repository path for scheduled runs (e.g. 'MyOrganization/my-project')
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<RepositoryPath>,
}

impl EventCommand {
    fn read_event(&self, event_type: EventType) -> Result<WorkflowEvent> {
        if event_type == EventType::Schedule {
            let repository_path = self
                .repository
                .clone()
                .ok_or_else(|| anyhow!("Scheduled runs need a repository (--repository)"))?;

            return Ok(WorkflowEvent::Schedule { repository_path });
        }

        let path = self
            .payload
            .as_ref()
            .ok_or_else(|| anyhow!("Event '{}' needs a payload (--payload)", event_type))?;
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read event payload '{}'", path.display()))?;

        Ok(parse_event_payload(event_type, &body)?)
    }
}

#[async_trait]
impl Command for EventCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let event_type = match EventType::try_from(self.name.as_str()) {
            Ok(event_type) => event_type,
            Err(e) => {
                tracing::warn!(event_name = %self.name, "{}, nothing to do", e);
                writeln!(ctx.writer.write().await, "Event '{}' ignored.", self.name)?;
                return Ok(());
            }
        };

        let workflow = ctx.load_workflow()?;
        let event = self.read_event(event_type)?;

        let core_context = ctx.as_core_context(&workflow);
        let process_workflow_event: &dyn ProcessWorkflowEventInterface =
            ctx.core_module.resolve_ref();
        process_workflow_event.run(&core_context, event).await?;

        writeln!(ctx.writer.write().await, "Event '{}' handled.", event_type)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use prflow_chat_interface::ChatHistoryMessage;
    use prflow_core::{use_cases::events::MockProcessWorkflowEventInterface, CoreModule};

    use super::*;
    use crate::testutils::{test_command, write_file, CommandContextTest};

    const COMMENT_PAYLOAD: &str = r#"{
        "action": "created",
        "issue": {
            "number": 8,
            "title": "Add things",
            "user": {"login": "alice"},
            "html_url": "https://github.com/me/test/pull/8",
            "pull_request": {"url": "https://api.github.com/repos/me/test/pulls/8"}
        },
        "comment": {
            "id": 1,
            "user": {"login": "bob"},
            "html_url": "https://github.com/me/test/pull/8#issuecomment-1",
            "body": "Looks good"
        },
        "repository": {"name": "test", "full_name": "me/test", "owner": {"login": "me"}},
        "sender": {"login": "bob"}
    }"#;

    #[tokio::test]
    async fn unsupported_event_is_ignored() -> Result<(), Box<dyn Error>> {
        let ctx = CommandContextTest::new();

        assert_eq!(
            test_command(ctx, &["event", "--name", "push"]).await,
            "Event 'push' ignored.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn comment_is_posted_in_thread() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        let payload = write_file(&ctx.dir, "event.json", COMMENT_PAYLOAD);

        ctx.chat_service
            .expect_history_list()
            .once()
            .return_once(|_| {
                Ok(vec![ChatHistoryMessage {
                    ts: "1.0".into(),
                    text: "test-8".into(),
                }])
            });
        ctx.chat_service
            .expect_messages_post()
            .once()
            .withf(|_, thread_ts, _| thread_ts == &Some("1.0".to_string()))
            .return_once(|_, _, _| Ok("2.0".into()));

        assert_eq!(
            test_command(
                ctx,
                &["event", "--name", "issue_comment", "--payload", payload.as_str()]
            )
            .await,
            "Event 'issue_comment' handled.\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn schedule_uses_repository() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();

        let mut process_workflow_event = MockProcessWorkflowEventInterface::new();
        process_workflow_event
            .expect_run()
            .once()
            .withf(|_, event| {
                event
                    == &WorkflowEvent::Schedule {
                        repository_path: ("me", "test").into(),
                    }
            })
            .return_once(|_, _| Ok(()));

        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn ProcessWorkflowEventInterface>(Box::new(
                process_workflow_event,
            ))
            .build();

        assert_eq!(
            test_command(
                ctx,
                &["event", "--name", "schedule", "--repository", "me/test"]
            )
            .await,
            "Event 'schedule' handled.\n"
        );

        Ok(())
    }

    #[test]
    fn missing_payload_is_an_error() {
        let command = EventCommand {
            name: "pull_request".into(),
            payload: None,
            repository: None,
        };

        let err = command.read_event(EventType::PullRequest).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Event 'pull_request' needs a payload (--payload)"
        );
    }
}
