use std::sync::Arc;

use cf_companion::bot::{discord, CommandRouter};
use cf_companion::config::Config;
use cf_companion::judge::{CodeforcesClient, JudgeApi};
use cf_companion::logging::{init_tracing, LogConfig};
use cf_companion::store::Store;
use cf_companion::tiers::TierTable;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    init_tracing(&LogConfig {
        log_level: config.log_level.clone(),
        enable_file_logs: config.enable_file_logs,
        log_dir: config.log_dir.clone(),
    });
    tracing::info!(?config, "Starting cf-companion");

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    }

    let tiers = Arc::new(TierTable::codeforces().expect("Built-in rating tiers are invalid"));

    let store = Arc::new(Store::open(&config.store_path).expect("Failed to open sled database"));

    let judge: Arc<dyn JudgeApi> = Arc::new(CodeforcesClient::new(&config.judge));
    let router = CommandRouter::new(store.clone(), judge, tiers);

    if let Err(e) = discord::run(&config.bot_token, router, shutdown_signal()).await {
        tracing::error!(error = %e, "Discord client stopped with an error");
    }

    tracing::info!("Flushing store before exit");
    if let Err(e) = store.flush() {
        tracing::error!(error = %e, "Failed to flush store before exit");
    }
    tracing::info!("Shutdown complete");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received");
}
