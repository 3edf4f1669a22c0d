// ABOUTME: HTTP surface of the menu ranker built on axum
// ABOUTME: Assembles health and menu routes and runs the server with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route modules
//!
//! Every menu route returns the same [`MenuReport`](crate::service::MenuReport)
//! JSON the CLI prints with `--json`; failures use the shared error body.

/// Health check routes
pub mod health;
/// Menu view routes
pub mod menu;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use health::HealthRoutes;
pub use menu::MenuRoutes;

use crate::errors::{AppError, AppResult};
use crate::service::MenuService;

/// Full application router
pub fn router(service: Arc<MenuService>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(MenuRoutes::routes(service))
        .layer(TraceLayer::new_for_http())
}

/// Bind `port` and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn serve(service: Arc<MenuService>, port: u16) -> AppResult<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::internal(format!("failed to bind {address}: {e}")).with_source(e)
    })?;
    info!("Menu ranker listening on {address}");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Menu ranker stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
