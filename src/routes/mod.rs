// ABOUTME: Route module organization for FitTrack HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the FitTrack server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the storage layer.

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;

/// Exercise catalog routes
pub mod exercises;
/// Health check and system status routes
pub mod health;
/// Aggregate statistics routes
pub mod stats;
/// Workout exercise entry routes
pub mod workout_exercises;
/// Workout store routes
pub mod workouts;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use stats::StatsRoutes;
pub use workout_exercises::WorkoutExerciseRoutes;
pub use workouts::WorkoutRoutes;

/// Parse a JSON request body into a typed shape
///
/// Deserialization failures become `INVALID_INPUT` responses carrying the
/// serde message, which names the offending field.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: serde_json::Value,
    what: &str,
) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| {
        AppError::invalid_input(format!("Invalid {what}"))
            .with_details(serde_json::json!({ "errors": [{ "message": e.to_string() }] }))
    })
}
