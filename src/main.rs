mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::{check, config as config_cmd, watch};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::discord::DiscordWebhook;
use crate::infra::p4::P4Cli;
use crate::workflow::poll::CycleOutcome;

#[derive(Parser)]
#[command(
    name = "p4notify",
    author,
    version,
    about = "Forward new Perforce changes to a Discord webhook"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the server on a fixed cadence and post new submitted changes (default).
    Watch,
    /// Run one poll cycle now and post the latest change if it is submitted.
    Check,
    /// Show the resolved configuration (webhook token masked).
    Config,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Watch) {
        Commands::Config => config_cmd::run(),
        Commands::Watch => watch::run(&build_context()?).await,
        Commands::Check => {
            match check::run(&build_context()?).await? {
                CycleOutcome::Notified(record) => println!("Posted change:\n{record}"),
                CycleOutcome::Quiet => println!("Latest change is pending or empty; nothing posted."),
            }
            Ok(())
        }
    }
}

fn build_context() -> AppResult<AppContext> {
    let config = AppConfig::load()?;
    let webhook_url = config.require_webhook_url()?.to_string();

    let change_source = Arc::new(P4Cli::new(config.perforce.clone()));
    let notifier = Arc::new(DiscordWebhook::new(webhook_url));

    Ok(AppContext::new(config, change_source, notifier))
}
