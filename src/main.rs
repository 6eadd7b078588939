use std::sync::Arc;

use tokio::task::JoinHandle;
use trakt_cache::{
    services::{SnapshotSource, SyncService},
    telemetry, ChangeSubscription, Config, UserSession,
};

/// Logs every change a store announces until the store goes away
fn log_changes(store: &'static str, mut subscription: ChangeSubscription) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = subscription.next().await {
            tracing::info!(store, at = ?event.timestamp(), "Store changed");
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_filter);

    let session = UserSession::new();
    let loggers = vec![
        log_changes("watchlist", session.watchlist().subscribe()),
        log_changes("progress", session.progress().subscribe()),
        log_changes("lists", session.lists().subscribe()),
    ];

    match &config.snapshot_path {
        Some(path) => {
            let source = SnapshotSource::from_path(path).await?;
            let sync = SyncService::new(Arc::new(source), session.clone());
            sync.refresh_all(true).await?;
        }
        None => tracing::warn!("No snapshot configured, stores stay unloaded"),
    }

    let (movies, shows) = session.watchlist().len().await;
    let (started_movies, started_shows) = session.progress().len().await;
    let lists = session.lists().len().await;
    tracing::info!(
        watchlist_movies = movies,
        watchlist_shows = shows,
        progress_movies = started_movies,
        progress_shows = started_shows,
        lists,
        "Cache populated"
    );

    session.sign_out().await;
    // Dropping the last session handle closes every subscription
    drop(session);
    for logger in loggers {
        if let Err(e) = logger.await {
            tracing::error!(error = %e, "Change logger failed");
        }
    }

    Ok(())
}
