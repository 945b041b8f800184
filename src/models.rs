// ABOUTME: Core data models and types for the FitTrack API
// ABOUTME: Defines Exercise, Workout, WorkoutExercise and derived view structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! This module contains the core data structures used throughout the FitTrack
//! server: the exercise catalog, workout records, per-workout exercise
//! entries, and the derived composite views assembled on read.
//!
//! ## Core Models
//!
//! - `Exercise`: Catalog entry with category and muscle-group metadata
//! - `Workout`: A logged training session
//! - `WorkoutExercise`: Per-exercise performance entry within a workout
//! - `WorkoutWithExercises`: Workout joined with its resolved entries
//! - `WorkoutStats`: Aggregate metrics recomputed on every request

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{AppError, AppResult};

/// Exercise category used for presentation-layer grouping
///
/// The catalog stores the literal category string; unknown values parse to
/// `Other` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Weight and resistance training
    Strength,
    /// Cardiovascular exercise
    Cardio,
    /// Yoga and flexibility work
    Yoga,
    /// Anything the catalog does not recognize
    Other,
}

impl ExerciseCategory {
    /// Convert to the stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Yoga => "yoga",
            Self::Other => "other",
        }
    }

    /// Parse from the stored string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "strength" => Self::Strength,
            "cardio" => Self::Cardio,
            "yoga" => Self::Yoga,
            _ => Self::Other,
        }
    }
}

/// A catalog exercise
///
/// Reference data: created via seeding, never mutated or deleted by normal
/// application flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category (strength, cardio, yoga)
    pub category: String,
    /// Ordered muscle-group tags
    pub muscle_groups: Vec<String>,
    /// Optional free-text description
    pub description: Option<String>,
}

/// Request to create a catalog exercise (seeding and tests)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertExercise {
    /// Display name
    pub name: String,
    /// Category (strength, cardio, yoga)
    pub category: String,
    /// Ordered muscle-group tags
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Optional free-text description
    pub description: Option<String>,
}

/// A logged workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: Option<i64>,
    /// Calories burned
    pub calories: Option<i64>,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Request to create a workout
///
/// The optional `exercises` list is written together with the workout in a
/// single transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkout {
    /// Display name, must be non-empty
    pub name: String,
    /// Session timestamp; accepts RFC 3339, naive datetime, or date-only
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: Option<i64>,
    /// Calories burned
    pub calories: Option<i64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Exercise entries created atomically with the workout
    #[serde(default)]
    pub exercises: Vec<InsertWorkoutEntry>,
}

impl InsertWorkout {
    /// Validate field contents beyond what deserialization enforces
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error with per-field details when the
    /// workout name is empty or an entry references a non-positive exercise id
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(field_error("name", "must not be empty"));
        }
        for (i, entry) in self.exercises.iter().enumerate() {
            if entry.exercise_id <= 0 {
                errors.push(field_error(
                    &format!("exercises[{i}].exerciseId"),
                    "must be a positive id",
                ));
            }
        }
        reject_if_any(errors, "Invalid workout data")
    }
}

/// Partial update of a workout; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkout {
    /// New display name
    pub name: Option<String>,
    /// New session timestamp
    #[serde(default, deserialize_with = "deserialize_flexible_date_opt")]
    pub date: Option<DateTime<Utc>>,
    /// New duration in minutes
    pub duration: Option<i64>,
    /// New calorie count
    pub calories: Option<i64>,
    /// New notes
    pub notes: Option<String>,
}

impl UpdateWorkout {
    /// Validate field contents beyond what deserialization enforces
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error when a provided name is empty
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(field_error("name", "must not be empty"));
            }
        }
        reject_if_any(errors, "Invalid workout data")
    }
}

/// A per-exercise performance entry within a workout
///
/// Which of the optional fields are meaningful depends on the referenced
/// exercise's category (sets/reps/weight for strength, distance/duration/pace
/// for cardio); the store does not enforce this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    /// Unique identifier
    pub id: i64,
    /// Owning workout
    pub workout_id: i64,
    /// Referenced catalog exercise
    pub exercise_id: i64,
    /// Number of sets
    pub sets: Option<i64>,
    /// Repetitions per set
    pub reps: Option<i64>,
    /// Weight in pounds
    pub weight: Option<i64>,
    /// Distance in meters
    pub distance: Option<i64>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Free-text pace, e.g. "7:30/mi"
    pub pace: Option<String>,
}

/// Request to attach an exercise entry to an existing workout
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkoutExercise {
    /// Owning workout id, obtained from a prior create call
    pub workout_id: i64,
    /// Referenced catalog exercise
    pub exercise_id: i64,
    /// Number of sets
    pub sets: Option<i64>,
    /// Repetitions per set
    pub reps: Option<i64>,
    /// Weight in pounds
    pub weight: Option<i64>,
    /// Distance in meters
    pub distance: Option<i64>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Free-text pace
    pub pace: Option<String>,
}

impl InsertWorkoutExercise {
    /// Validate field contents beyond what deserialization enforces
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_INPUT` error with per-field details when either
    /// referenced id is non-positive
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.workout_id <= 0 {
            errors.push(field_error("workoutId", "must be a positive id"));
        }
        if self.exercise_id <= 0 {
            errors.push(field_error("exerciseId", "must be a positive id"));
        }
        reject_if_any(errors, "Invalid workout exercise data")
    }
}

/// An exercise entry nested inside an atomic workout create
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkoutEntry {
    /// Referenced catalog exercise
    pub exercise_id: i64,
    /// Number of sets
    pub sets: Option<i64>,
    /// Repetitions per set
    pub reps: Option<i64>,
    /// Weight in pounds
    pub weight: Option<i64>,
    /// Distance in meters
    pub distance: Option<i64>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Free-text pace
    pub pace: Option<String>,
}

/// Partial update of an exercise entry; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutExercise {
    /// New set count
    pub sets: Option<i64>,
    /// New repetition count
    pub reps: Option<i64>,
    /// New weight in pounds
    pub weight: Option<i64>,
    /// New distance in meters
    pub distance: Option<i64>,
    /// New duration in seconds
    pub duration: Option<i64>,
    /// New pace
    pub pace: Option<String>,
}

/// An entry joined with its resolved catalog exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// The raw entry fields, flattened into the response object
    #[serde(flatten)]
    pub entry: WorkoutExercise,
    /// The referenced catalog exercise
    pub exercise: Exercise,
}

/// A workout joined with its ordered exercise entries
///
/// Constructed on read; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutWithExercises {
    /// The workout fields, flattened into the response object
    #[serde(flatten)]
    pub workout: Workout,
    /// Entries with resolved exercises, in insertion order
    pub exercises: Vec<ExerciseEntry>,
}

/// Aggregate workout metrics, recomputed fully on every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Count of all workouts
    pub total_workouts: i64,
    /// Consecutive active days ending today or yesterday
    pub current_streak: i64,
    /// Fixed weekly goal
    pub weekly_goal: i64,
    /// Workouts since the most recent Sunday
    pub weekly_progress: i64,
    /// Rounded mean duration in minutes, missing treated as 0
    pub avg_duration: i64,
    /// Total calories, missing treated as 0
    pub total_calories: i64,
}

fn field_error(field: &str, message: &str) -> serde_json::Value {
    serde_json::json!({ "field": field, "message": message })
}

fn reject_if_any(errors: Vec<serde_json::Value>, message: &str) -> AppResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::invalid_input(message)
            .with_details(serde_json::json!({ "errors": errors })))
    }
}

/// Parse a timestamp the way clients send them
///
/// Accepts full RFC 3339 (`2024-01-15T10:30:00Z`), a naive datetime
/// (`2024-01-15T10:30:00`, interpreted as UTC), or a bare date
/// (`2024-01-15`, midnight UTC).
#[must_use]
pub fn parse_flexible_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_flexible_date(&value).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "date must be an RFC 3339 timestamp or YYYY-MM-DD date, got {value:?}"
        ))
    })
}

fn deserialize_flexible_date_opt<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) => parse_flexible_date(&s).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "date must be an RFC 3339 timestamp or YYYY-MM-DD date, got {s:?}"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_category_round_trip() {
        assert_eq!(ExerciseCategory::parse("strength"), ExerciseCategory::Strength);
        assert_eq!(ExerciseCategory::parse("cardio").as_str(), "cardio");
        assert_eq!(ExerciseCategory::parse("pilates"), ExerciseCategory::Other);
    }

    #[test]
    fn test_parse_flexible_date_variants() {
        let rfc = parse_flexible_date("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let naive = parse_flexible_date("2024-01-15T10:30:00").unwrap();
        assert_eq!(naive, rfc);

        let date_only = parse_flexible_date("2024-01-15").unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        assert!(parse_flexible_date("yesterday").is_none());
    }

    #[test]
    fn test_insert_workout_deserializes_date_only() {
        let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
            "name": "Leg Day",
            "date": "2024-01-15",
            "duration": 45,
            "calories": 300
        }))
        .unwrap();

        assert_eq!(insert.name, "Leg Day");
        assert_eq!(insert.duration, Some(45));
        assert!(insert.exercises.is_empty());
        assert!(insert.validate().is_ok());
    }

    #[test]
    fn test_insert_workout_rejects_empty_name() {
        let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "date": "2024-01-15"
        }))
        .unwrap();

        let err = insert.validate().unwrap_err();
        assert_eq!(err.details["errors"][0]["field"], "name");
    }

    #[test]
    fn test_workout_with_exercises_flattens() {
        let view = WorkoutWithExercises {
            workout: Workout {
                id: 1,
                name: "Morning Run".into(),
                date: parse_flexible_date("2024-01-15").unwrap(),
                duration: Some(30),
                calories: None,
                notes: None,
            },
            exercises: vec![ExerciseEntry {
                entry: WorkoutExercise {
                    id: 7,
                    workout_id: 1,
                    exercise_id: 3,
                    sets: None,
                    reps: None,
                    weight: None,
                    distance: Some(5000),
                    duration: Some(1800),
                    pace: Some("6:00/km".into()),
                },
                exercise: Exercise {
                    id: 3,
                    name: "Running".into(),
                    category: "cardio".into(),
                    muscle_groups: vec!["legs".into(), "core".into()],
                    description: Some("Cardiovascular exercise".into()),
                },
            }],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Morning Run");
        assert_eq!(json["exercises"][0]["workoutId"], 1);
        assert_eq!(json["exercises"][0]["exercise"]["name"], "Running");
    }
}
