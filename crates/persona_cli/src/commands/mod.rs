//! Command dispatch.

pub mod analyze;
pub mod services;

use crate::cli::{Cli, Command};
use anyhow::Result;

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze(args) => analyze::handle(args).await,
        Command::Services { action } => services::handle(action).await,
    }
}
