//! SQLite database implementation
//!
//! This module wraps the SQLite database functionality to implement the
//! `DatabaseProvider` trait.

use super::DatabaseProvider;
use crate::errors::AppResult;
use crate::models::{
    Exercise, InsertExercise, InsertWorkout, InsertWorkoutExercise, UpdateWorkout,
    UpdateWorkoutExercise, Workout, WorkoutExercise, WorkoutStats, WorkoutWithExercises,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteStorage {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteStorage {
    /// Get a reference to the inner database for maintenance operations
    /// (seeding) not exposed on the provider trait
    #[must_use]
    pub const fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteStorage {
    async fn new(database_url: &str) -> AppResult<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> AppResult<()> {
        self.inner.migrate().await
    }

    async fn get_exercises(&self) -> AppResult<Vec<Exercise>> {
        self.inner.get_exercises().await
    }

    async fn get_exercises_by_category(&self, category: &str) -> AppResult<Vec<Exercise>> {
        self.inner.get_exercises_by_category(category).await
    }

    async fn search_exercises(&self, query: &str) -> AppResult<Vec<Exercise>> {
        self.inner.search_exercises(query).await
    }

    async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        self.inner.get_exercise(id).await
    }

    async fn create_exercise(&self, insert: &InsertExercise) -> AppResult<Exercise> {
        self.inner.create_exercise(insert).await
    }

    async fn get_workouts(&self) -> AppResult<Vec<Workout>> {
        self.inner.get_workouts().await
    }

    async fn get_workout(&self, id: i64) -> AppResult<Option<WorkoutWithExercises>> {
        self.inner.get_workout(id).await
    }

    async fn get_workouts_with_exercises(&self) -> AppResult<Vec<WorkoutWithExercises>> {
        self.inner.get_workouts_with_exercises().await
    }

    async fn get_workouts_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutWithExercises>> {
        self.inner.get_workouts_by_date_range(start, end).await
    }

    async fn create_workout(&self, insert: &InsertWorkout) -> AppResult<Workout> {
        self.inner.create_workout(insert).await
    }

    async fn update_workout(
        &self,
        id: i64,
        update: &UpdateWorkout,
    ) -> AppResult<Option<Workout>> {
        self.inner.update_workout(id, update).await
    }

    async fn delete_workout(&self, id: i64) -> AppResult<bool> {
        self.inner.delete_workout(id).await
    }

    async fn add_exercise_to_workout(
        &self,
        insert: &InsertWorkoutExercise,
    ) -> AppResult<WorkoutExercise> {
        self.inner.add_exercise_to_workout(insert).await
    }

    async fn update_workout_exercise(
        &self,
        id: i64,
        update: &UpdateWorkoutExercise,
    ) -> AppResult<Option<WorkoutExercise>> {
        self.inner.update_workout_exercise(id, update).await
    }

    async fn remove_workout_exercise(&self, id: i64) -> AppResult<bool> {
        self.inner.remove_workout_exercise(id).await
    }

    async fn get_workout_stats(&self) -> AppResult<WorkoutStats> {
        self.inner.get_workout_stats().await
    }
}
