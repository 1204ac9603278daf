//! notepad-api - HTTP server for notepad

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notepad_api::{router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _log_guard = init_tracing();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;
    let state = AppState::from_config(&config).await?;
    let app = router(state, config.max_body_bytes);

    info!(
        store_backend = %config.store_backend,
        max_body_bytes = config.max_body_bytes,
        "Starting server on {}",
        addr
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Install the global subscriber.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - write to this file, rotated daily, instead of stdout
///   LOG_ANSI    - "true"/"1" forces colours on, any other value off (default: auto, off for files)
///   RUST_LOG    - env filter (default: "notepad_api=debug,notepad_store=debug,tower_http=debug")
///
/// The returned guard must live as long as the process or buffered file
/// output is lost.
fn init_tracing() -> Option<WorkerGuard> {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json");
    let ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");
    let log_file = std::env::var("LOG_FILE").ok().map(PathBuf::from);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "notepad_api=debug,notepad_store=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    let guard = match &log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .unwrap_or(OsStr::new("notepad-api.log"));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            // Plain text in files unless colours are asked for
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi.unwrap_or(false));
            if json {
                registry.with(layer.json()).init();
            } else {
                registry.with(layer).init();
            }
            Some(guard)
        }
        None => {
            let mut layer = fmt::layer();
            if let Some(ansi) = ansi {
                layer = layer.with_ansi(ansi);
            }
            if json {
                registry.with(layer.json()).init();
            } else {
                registry.with(layer).init();
            }
            None
        }
    };

    let log_format = if json { "json" } else { "text" };
    let destination = log_file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(stdout)".to_string());
    info!(log_format, log_file = %destination, "Logging initialized");
    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
