mod api;
mod dto;
mod error;
mod geo;
mod model;
mod service;
mod store;

use std::{net::SocketAddr, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info, warn};

use crate::{api::AppState, store::Store};

#[derive(Parser)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
    /// Snapshot file read at startup and written on shutdown
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let store = match &args.snapshot {
        Some(path) if path.exists() => {
            let now = Instant::now();
            info!("Loading snapshot from {path:?}");
            let store = Store::load(path)?;
            info!(
                "Loaded {} trajets, {} arrets, {} horaires and {} passages in {:?}",
                store.trajets().count(),
                store.arrets().count(),
                store.horaires().count(),
                store.horaire_arrets().count(),
                now.elapsed()
            );
            store
        }
        Some(path) => {
            warn!("Snapshot {path:?} does not exist yet, starting empty");
            Store::new()
        }
        None => Store::new(),
    };

    let state = AppState::new(store);
    let app = api::router(state.clone());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!("Listening on {}", args.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &args.snapshot {
        let now = Instant::now();
        info!("Saving snapshot to {path:?}");
        state.store.read().await.save(path)?;
        info!("Done in {:?}", now.elapsed());
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down");
}

#[cfg(all(test, unix))]
mod tests {
    use super::shutdown_signal;

    #[tokio::test]
    async fn sigterm_triggers_shutdown() {
        let shutdown = tokio::spawn(shutdown_signal());
        // let the handler register before signalling ourselves
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        shutdown.await.unwrap();
    }
}
