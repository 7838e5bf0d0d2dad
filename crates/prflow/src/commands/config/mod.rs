use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod check;

use self::check::ConfigCheckCommand;

/// Manage workflow configuration
#[derive(Parser)]
pub(crate) struct ConfigCommand {
    #[clap(subcommand)]
    inner: ConfigSubCommand,
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigSubCommand {
    Check(ConfigCheckCommand),
}

#[async_trait]
impl Command for ConfigSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Check(sub) => sub.execute(ctx).await,
        }
    }
}
