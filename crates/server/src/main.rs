//! Keygate server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use keygate_core::config::AppConfig;
use keygate_server::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keygate - an API-key validation service
#[derive(Parser, Debug)]
#[command(name = "keygated")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "KEYGATE_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Startup banner
    tracing::info!("Keygate v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (file is optional, env vars override everything)
    let config_path = std::path::Path::new(&args.config);
    let mut figment = Figment::new();
    if config_path.exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}, using defaults", args.config);
    }

    let config: AppConfig = figment
        .merge(Env::prefixed("KEYGATE_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    // Create application state
    let state = AppState::new(config);

    // Initial key load is fatal on failure; later errors are recovered via /refresh.
    let keys_loaded = state
        .reload_keys()
        .await
        .context("failed to load key file at startup")?;
    tracing::info!(
        keys_loaded,
        key_file = %state.config.keys.path.display(),
        "Key file loaded"
    );

    // Create router
    let app = create_router(state.clone());

    // Parse bind address
    let addr: SocketAddr = state
        .config
        .server
        .bind
        .parse()
        .context("invalid bind address")?;

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    // Serve until a shutdown signal arrives, then drain in-flight requests
    // for the configured grace window and abort whatever remains.
    let grace = state.config.server.shutdown_grace();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            // The listener failed before any signal arrived.
            return result
                .context("server task panicked")?
                .context("server error");
        }
        _ = shutdown_signal() => {}
    }

    tracing::info!(
        grace_secs = grace.as_secs(),
        "Shutdown signal received, draining connections"
    );
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => {
            result
                .context("server task panicked")?
                .context("server error")?;
        }
        Err(_) => {
            tracing::warn!("Grace period elapsed, aborting remaining requests");
            server.abort();
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_without_file_or_env() {
        let config: AppConfig = Figment::new().extract().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:1323");
        assert_eq!(config.server.shutdown_grace_secs, 10);
        assert!(config.keys.strip_comments);
    }

    #[test]
    fn config_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "server.toml",
                r#"
                [server]
                bind = "0.0.0.0:9999"

                [keys]
                path = "keys.txt"
                headers = ["x-service-key"]
                "#,
            )?;

            let config: AppConfig = Figment::new()
                .merge(Toml::file("server.toml"))
                .merge(Env::prefixed("KEYGATE_").split("__"))
                .extract()?;

            assert_eq!(config.server.bind, "0.0.0.0:9999");
            assert_eq!(config.keys.headers, vec!["x-service-key"]);
            assert!(config.server.list_keys_enabled);
            Ok(())
        });
    }
}
