use std::sync::Arc;

use clap::Parser;
use prflow_chat_interface::ChatService;
use prflow_chat_slack::SlackChatService;
use prflow_config::Config;
use prflow_core::CoreModule;
use prflow_ghapi_github::GithubApiService;
use prflow_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    /// Whether the command talks to GitHub and Slack.
    pub fn requires_services(&self) -> bool {
        self.cmd.requires_services()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let api_service: Box<dyn ApiService + Send + Sync + 'static> =
                Box::new(GithubApiService::new(config.clone()));
            let chat_service: Box<dyn ChatService + Send + Sync + 'static> =
                Box::new(SlackChatService::new(config.clone()));

            let ctx = CommandContext {
                config,
                core_module: CoreModule::builder().build(),
                api_service,
                chat_service,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
