//! Bookstore API Binary
//!
//! Starts the bookstore REST service backed by the in-memory repository.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bookstore-api
//! ```
//!
//! # Environment Variables
//!
//! - `BOOKSTORE_HTTP_HOST`: Bind address (default: 0.0.0.0)
//! - `BOOKSTORE_HTTP_PORT`: HTTP server port (default: 8080)
//! - `BOOKSTORE_METRICS_ENABLED`: Serve Prometheus metrics (default: true)
//! - `OTEL_ENABLED`: Export spans over OTLP (default: false)
//! - `RUST_LOG`: Log filter (default: bookstore_api=info)

use anyhow::Context;
use bookstore_api::infrastructure::config::{AppConfig, Container};
use bookstore_api::infrastructure::{metrics, telemetry};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let _telemetry = telemetry::init(&config.telemetry).context("failed to initialize tracing")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting bookstore API");
    log_config(&config);

    if config.metrics_enabled {
        metrics::init_metrics().context("failed to install metrics recorder")?;
    }

    let container = Container::in_memory();
    let app = container.router(env!("CARGO_PKG_VERSION"));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "HTTP server listening");
    tracing::info!("Endpoints:");
    tracing::info!("  POST   /books");
    tracing::info!("  GET    /books");
    tracing::info!("  GET    /books/{{id}}");
    tracing::info!("  DELETE /books/{{id}}");
    tracing::info!("  GET    /health");
    if config.metrics_enabled {
        tracing::info!("  GET    /metrics");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Bookstore API stopped");
    Ok(())
}

/// Log the parsed configuration.
fn log_config(config: &AppConfig) {
    tracing::info!(
        host = %config.server.host,
        http_port = config.server.http_port,
        metrics_enabled = config.metrics_enabled,
        otel_enabled = config.telemetry.enabled,
        "Configuration loaded"
    );
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// If a handler cannot be installed that branch never resolves and the
/// other signal still stops the server.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
