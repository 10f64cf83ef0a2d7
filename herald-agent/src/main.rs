//! Herald Agent
//!
//! A long-running worker that watches the review status of a homework and
//! announces changes in a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and endpoints from the environment
//! - Repositories: status API reads and chat delivery behind traits
//! - Services: the dedup gate and failure message rendering
//! - Scheduler: the poll loop and its cycle state
//!
//! The agent polls the status API every ten minutes, announces the newest
//! status when it changed and reports every failure to the same chat.

mod config;
mod context;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramNotifier};
use crate::scheduler::StatusPoller;
use herald_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herald_agent=debug,herald_client=debug,herald_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Herald Agent");

    // Credentials are needed to report anything, so a bad config only gets logged.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "critical", "Configuration error: {}", e);
            return Ok(());
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let statuses = Arc::new(HttpStatusRepository::new(PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
    )));
    let notifier = Arc::new(TelegramNotifier::new(
        TelegramClient::new(config.telegram_api_url.clone(), config.telegram_token.clone()),
        config.telegram_chat_id.clone(),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    let mut poller = StatusPoller::new(config.poll_interval, statuses, notifier);

    info!("Starting status polling loop");
    poller.run(shutdown_rx).await;

    info!(
        "Herald Agent stopped (cursor: {})",
        poller.context().cursor()
    );
    Ok(())
}
