// ABOUTME: Database abstraction layer for the FitTrack server
// ABOUTME: Plugin architecture with a single interface selected at process startup

use crate::errors::AppResult;
use crate::models::{
    Exercise, InsertExercise, InsertWorkout, InsertWorkoutExercise, UpdateWorkout,
    UpdateWorkoutExercise, Workout, WorkoutExercise, WorkoutStats, WorkoutWithExercises,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod factory;
pub mod sqlite;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> AppResult<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> AppResult<()>;

    // ================================
    // Exercise Catalog
    // ================================

    /// Get all exercises in storage order
    async fn get_exercises(&self) -> AppResult<Vec<Exercise>>;

    /// Get exercises matching a category exactly; unknown categories yield
    /// an empty list
    async fn get_exercises_by_category(&self, category: &str) -> AppResult<Vec<Exercise>>;

    /// Case-insensitive substring search over name, category, and description
    async fn search_exercises(&self, query: &str) -> AppResult<Vec<Exercise>>;

    /// Get a single exercise by id
    async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>>;

    /// Create a catalog exercise (seeding and tests)
    async fn create_exercise(&self, insert: &InsertExercise) -> AppResult<Exercise>;

    // ================================
    // Workout Store
    // ================================

    /// Get all workouts ordered by date descending
    async fn get_workouts(&self) -> AppResult<Vec<Workout>>;

    /// Get a workout joined with its exercise entries
    async fn get_workout(&self, id: i64) -> AppResult<Option<WorkoutWithExercises>>;

    /// Get every workout expanded to its joined view, date descending
    async fn get_workouts_with_exercises(&self) -> AppResult<Vec<WorkoutWithExercises>>;

    /// Get workouts within the inclusive date range, expanded to joined views
    async fn get_workouts_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutWithExercises>>;

    /// Create a workout; nested entries are written in the same transaction
    async fn create_workout(&self, insert: &InsertWorkout) -> AppResult<Workout>;

    /// Apply a partial update; `None` when the workout does not exist
    async fn update_workout(&self, id: i64, update: &UpdateWorkout)
        -> AppResult<Option<Workout>>;

    /// Delete a workout and its entries; `false` when nothing was removed
    async fn delete_workout(&self, id: i64) -> AppResult<bool>;

    /// Append an exercise entry to an existing workout
    async fn add_exercise_to_workout(
        &self,
        insert: &InsertWorkoutExercise,
    ) -> AppResult<WorkoutExercise>;

    /// Apply a partial update to an entry; `None` when it does not exist
    async fn update_workout_exercise(
        &self,
        id: i64,
        update: &UpdateWorkoutExercise,
    ) -> AppResult<Option<WorkoutExercise>>;

    /// Remove a single entry; `false` when nothing was removed
    async fn remove_workout_exercise(&self, id: i64) -> AppResult<bool>;

    // ================================
    // Statistics
    // ================================

    /// Derive aggregate statistics from the full workout history
    async fn get_workout_stats(&self) -> AppResult<WorkoutStats>;
}
