// ABOUTME: Route handlers for workout exercise entries
// ABOUTME: Incremental attach, update, and removal of per-exercise performance rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout exercise entry routes
//!
//! The two-step flow (create a workout, then attach entries one by one)
//! remains available here; the atomic path is the nested create on
//! `POST /api/workouts`.

use super::parse_body;
use crate::{
    context::ServerResources,
    database_plugins::DatabaseProvider,
    errors::AppError,
    models::{InsertWorkoutExercise, UpdateWorkoutExercise},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, post, put},
    Json, Router,
};
use std::sync::Arc;

/// Workout exercise entry routes handler
pub struct WorkoutExerciseRoutes;

impl WorkoutExerciseRoutes {
    /// Create all workout exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout-exercises", post(Self::handle_create))
            .route("/api/workout-exercises/:id", put(Self::handle_update))
            .route("/api/workout-exercises/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle POST /api/workout-exercises - attach an entry to a workout
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let insert: InsertWorkoutExercise = parse_body(body, "workout exercise data")?;
        insert.validate()?;

        let entry = resources.database.add_exercise_to_workout(&insert).await?;

        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle PUT /api/workout-exercises/:id - partially update an entry
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let update: UpdateWorkoutExercise = parse_body(body, "workout exercise data")?;

        let entry = resources
            .database
            .update_workout_exercise(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout exercise {id}")))?;

        Ok((StatusCode::OK, Json(entry)).into_response())
    }

    /// Handle DELETE /api/workout-exercises/:id - remove an entry
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let removed = resources.database.remove_workout_exercise(id).await?;

        if !removed {
            return Err(AppError::not_found(format!("Workout exercise {id}")));
        }

        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
