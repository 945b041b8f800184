// ABOUTME: Route handlers for aggregate workout statistics
// ABOUTME: Stats are derived from the full history on every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Statistics routes

use crate::{
    context::ServerResources, database_plugins::DatabaseProvider, errors::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Statistics routes handler
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Handle GET /api/stats - compute aggregate statistics
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let stats = resources.database.get_workout_stats().await?;
        Ok((StatusCode::OK, Json(stats)).into_response())
    }
}
