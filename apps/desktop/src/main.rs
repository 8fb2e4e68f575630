use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use lecturelearn_core::{ApiClient, ApiConfig, config::DEFAULT_API_URL};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;

mod app;
mod views;

#[derive(Parser)]
#[command(name = "lecturelearn")]
#[command(about = "Upload lecture videos, then review their transcripts and generated questions")]
struct Cli {
    /// Base URL of the lecture service
    #[arg(long, env = "LECTURELEARN_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "LECTURELEARN_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "lecturelearn_core=debug")
    #[arg(long, env = "LECTURELEARN_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    info!("Starting LectureLearn v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::new(&cli.api_url, Duration::from_secs(cli.timeout_secs))?;
    info!(api_url = %config.base_url(), timeout = ?config.timeout(), "Using lecture service");
    let client = ApiClient::new(config)?;

    iced::application(move || App::new(client.clone()), App::update, App::view)
        .title("LectureLearn AI")
        .subscription(App::subscription)
        .window_size(iced::Size::new(1280.0, 860.0))
        .run()?;

    Ok(())
}
