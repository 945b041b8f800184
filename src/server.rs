// ABOUTME: HTTP server composition and lifecycle
// ABOUTME: Merges domain routers, applies middleware layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server setup
//!
//! Builds the full axum router from the per-domain route modules and runs it
//! with request tracing, CORS, and a request timeout.

use crate::constants::defaults;
use crate::context::ServerResources;
use crate::middleware::setup_cors;
use crate::routes::{
    ExerciseRoutes, HealthRoutes, StatsRoutes, WorkoutExerciseRoutes, WorkoutRoutes,
};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// The FitTrack HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// Exposed separately so tests can drive the router without binding a
    /// socket.
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        let cors = setup_cors(&resources.config);

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(ExerciseRoutes::routes(resources.clone()))
            .merge(WorkoutRoutes::routes(resources.clone()))
            .merge(WorkoutExerciseRoutes::routes(resources.clone()))
            .merge(StatsRoutes::routes(resources))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(
                defaults::REQUEST_TIMEOUT_SECS,
            )))
    }

    /// Bind and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self, port: u16) -> Result<()> {
        let router = Self::router(self.resources);

        let listener = TcpListener::bind(("0.0.0.0", port)).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, stopping server");
    }
}
