// ABOUTME: Route handlers for the workout store REST API
// ABOUTME: CRUD on workouts with joined views and inclusive date-range listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout store routes

use super::parse_body;
use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::{parse_flexible_date, InsertWorkout, UpdateWorkout},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing workouts
///
/// When both bounds are present the listing is restricted to the inclusive
/// range; otherwise the full history is returned.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkoutsQuery {
    /// Inclusive lower bound
    pub start_date: Option<String>,
    /// Inclusive upper bound
    pub end_date: Option<String>,
}

/// Workout store routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout store routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts", post(Self::handle_create))
            .route("/api/workouts/:id", get(Self::handle_get))
            .route("/api/workouts/:id", put(Self::handle_update))
            .route("/api/workouts/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/workouts - list workouts with their exercise entries
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListWorkoutsQuery>,
    ) -> Result<Response, AppError> {
        let start = query.start_date.filter(|s| !s.is_empty());
        let end = query.end_date.filter(|s| !s.is_empty());

        let workouts = if let (Some(start), Some(end)) = (start, end) {
            let start = parse_flexible_date(&start)
                .ok_or_else(|| AppError::invalid_format(format!("Invalid startDate: {start}")))?;
            let end = parse_flexible_date(&end)
                .ok_or_else(|| AppError::invalid_format(format!("Invalid endDate: {end}")))?;
            resources
                .database
                .get_workouts_by_date_range(start, end)
                .await?
        } else {
            resources.database.get_workouts_with_exercises().await?
        };

        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle GET /api/workouts/:id - get a workout with its entries
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let workout = resources
            .database
            .get_workout(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;

        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle POST /api/workouts - create a workout
    ///
    /// Nested exercise entries, when present, are persisted in the same
    /// transaction as the workout itself.
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let insert: InsertWorkout = parse_body(body, "workout data")?;
        insert.validate()?;

        let workout = resources.database.create_workout(&insert).await?;

        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle PUT /api/workouts/:id - partially update a workout
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let update: UpdateWorkout = parse_body(body, "workout data")?;
        update.validate()?;

        let workout = resources
            .database
            .update_workout(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;

        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle DELETE /api/workouts/:id - delete a workout and its entries
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_workout(id).await?;

        if !deleted {
            return Err(AppError::not_found(format!("Workout {id}")));
        }

        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
