// ABOUTME: Route handlers for the exercise catalog REST API
// ABOUTME: Read-only listing, filtering, searching, and single-exercise lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog routes
//!
//! The catalog is reference data: these endpoints never mutate it.

use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::AppError,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing exercises
///
/// A non-empty `search` wins over `category`; empty or missing parameters
/// fall back to the full list.
#[derive(Debug, Deserialize, Default)]
pub struct ListExercisesQuery {
    /// Case-insensitive substring search over name, category, description
    pub search: Option<String>,
    /// Exact-match category filter
    pub category: Option<String>,
}

/// Exercise catalog routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/exercises - list, filter, or search the catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListExercisesQuery>,
    ) -> Result<Response, AppError> {
        let search = query.search.filter(|s| !s.is_empty());
        let category = query.category.filter(|c| !c.is_empty());

        let exercises = if let Some(search) = search {
            resources.database.search_exercises(&search).await?
        } else if let Some(category) = category {
            resources
                .database
                .get_exercises_by_category(&category)
                .await?
        } else {
            resources.database.get_exercises().await?
        };

        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /api/exercises/:id - get a single exercise
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let exercise = resources
            .database
            .get_exercise(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;

        Ok((StatusCode::OK, Json(exercise)).into_response())
    }
}
