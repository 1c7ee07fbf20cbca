// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Feed API Server
//!
//! Serves the users/activities GraphQL API over HTTP and WebSocket.

use activity_feed::{config::Config, AppState};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long open subscriptions get to finish after the shutdown signal.
const SUBSCRIPTION_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        seed_data = config.seed_data,
        "Starting Activity Feed API"
    );

    // Build shared state
    let state = Arc::new(AppState::new(config.clone()));
    tracing::info!(
        users = state.feed.users()?.len(),
        activities = state.feed.activities()?.len(),
        "Store initialized"
    );

    // Build router
    let feed = state.feed.clone();
    let app = activity_feed::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        address = %addr,
        path = activity_feed::config::GRAPHQL_PATH,
        "Server listening"
    );

    // WebSocket connections are upgraded out of the HTTP server, so `serve`
    // does not wait for them. Ending the subscription streams makes the
    // transport send `complete` to every client before the runtime goes away.
    let subscriptions = feed.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            subscriptions.shutdown();
        })
        .await?;

    if feed.drain(SUBSCRIPTION_DRAIN_TIMEOUT).await {
        tracing::info!("Subscriptions drained");
    }
    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_feed=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
    tracing::info!("Shutdown signal received, draining connections");
}
