/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive task list screen backed by the task service
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tasklist_adapter::TasklistClient;
use tasklist_screen::{ScreenConfig, TaskListScreen};

#[derive(Parser, Debug)]
#[command(name = "tasklist-screen", version, about = "Manage tasks on a remote task service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
        config.validate().context("validate --base-url")?;
    }
    info!(base_url = %config.base_url, "configuration loaded");

    let client = TasklistClient::with_config(config.client_config(), &config.base_url)
        .context("build task service client")?;
    let mut screen = TaskListScreen::new(client);

    // A failed initial fetch is shown in the error banner
    let _ = screen.activate().await;

    cli::run_interactive(&mut screen).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ScreenConfig> {
    if let Some(path) = path {
        return ScreenConfig::from_file(path).context("load config");
    }
    match ScreenConfig::default_path() {
        Some(path) if path.exists() => ScreenConfig::from_file(&path).context("load default config"),
        _ => Ok(ScreenConfig::default()),
    }
}
