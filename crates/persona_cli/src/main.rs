//! CLI entry point for persona.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// Load configuration env files: ~/.persona/env first, then project .env.
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".persona").join("env");
        if config_path.exists() {
            let _ = dotenvy::from_path(&config_path);
        }
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    if cli.verbose {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .try_init();
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
