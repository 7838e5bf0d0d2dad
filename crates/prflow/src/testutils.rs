use std::{io::Write, path::Path, sync::Arc};

use clap::Parser;
use prflow_chat_interface::MockChatService;
use prflow_config::Config;
use prflow_core::CoreModule;
use prflow_ghapi_interface::MockApiService;
use tempfile::TempDir;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

const TEST_WORKFLOW: &str = r#"{
    "teamName": "Core",
    "githubUserNames": ["alice", "bob", "carol"],
    "githubSlackUserMapper": {"alice": "U01", "bob": "U02", "carol": "U03"},
    "remindAfter": 24
}"#;

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub chat_service: MockChatService,
    pub dir: TempDir,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self::with_workflow(TEST_WORKFLOW)
    }

    /// Context whose workflow document holds `workflow`.
    pub fn with_workflow(workflow: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::from_env_no_version();
        config.chat.slack.channel_id = "C0TEST".into();
        config.workflow_config_path = write_file(&dir, "workflow.json", workflow);

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            chat_service: MockChatService::new(),
            dir,
        }
    }

    /// The returned directory must outlive the command.
    pub fn into_context(
        self,
        writer: Arc<RwLock<dyn Write + Send + Sync>>,
    ) -> (CommandContext, TempDir) {
        let ctx = CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            chat_service: Box::new(self.chat_service),
            writer,
        };

        (ctx, self.dir)
    }
}

/// Write `content` in `dir`, returning the file path.
pub(crate) fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path_to_string(&path)
}

fn path_to_string(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

fn parse_command(command_args: &[&str]) -> Args {
    let command_args = {
        let mut tmp_args = vec!["bot"];
        tmp_args.extend(command_args);
        tmp_args
    };

    match Args::try_parse_from(command_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let args = parse_command(command_args);
        let (ctx, _dir) = ctx.into_context(buf.clone());
        CommandExecutor::parse_args_async(args, ctx).await.unwrap();
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}

pub(crate) async fn test_command_error(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> anyhow::Error {
    let buf = Arc::new(RwLock::new(Vec::new()));
    let args = parse_command(command_args);
    let (ctx, _dir) = ctx.into_context(buf);

    CommandExecutor::parse_args_async(args, ctx)
        .await
        .unwrap_err()
}
