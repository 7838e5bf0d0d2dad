//! Commands.

use std::{io::Write, path::Path, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use prflow_chat_interface::ChatService;
use prflow_config::{Config, WorkflowConfig};
use prflow_core::{CoreContext, CoreModule};
use prflow_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{config::ConfigCommand, event::EventCommand, remind::RemindCommand};
use crate::Result;

mod config;
mod event;
mod remind;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub chat_service: Box<dyn ChatService + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context<'a>(&'a self, workflow: &'a WorkflowConfig) -> CoreContext<'a> {
        CoreContext {
            config: &self.config,
            workflow,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            chat_service: self.chat_service.as_ref(),
        }
    }

    /// Load the workflow document from the configured path.
    pub fn load_workflow(&self) -> Result<WorkflowConfig> {
        let path = &self.config.workflow_config_path;
        let workflow = WorkflowConfig::from_path(Path::new(path))?;
        tracing::debug!(path = %path, workflow = ?workflow, "Workflow configuration loaded");

        Ok(workflow)
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Event(EventCommand),
    Remind(RemindCommand),
    Config(ConfigCommand),
}

impl SubCommand {
    pub fn requires_services(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Event(sub) => sub.execute(ctx).await,
            Self::Remind(sub) => sub.execute(ctx).await,
            Self::Config(sub) => sub.execute(ctx).await,
        }
    }
}
