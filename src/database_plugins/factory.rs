// ABOUTME: Database factory and provider abstraction for backend selection
// ABOUTME: Detects the backend from the connection string once at startup
//! Database factory for creating database providers
//!
//! This module provides automatic database type detection and creation
//! based on connection strings. The backend is chosen exactly once, at
//! process startup; nothing branches on it at call time.

use super::sqlite::SqliteStorage;
use super::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Exercise, InsertExercise, InsertWorkout, InsertWorkoutExercise, UpdateWorkout,
    UpdateWorkoutExercise, Workout, WorkoutExercise, WorkoutStats, WorkoutWithExercises,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded SQLite backend
    SQLite,
    /// PostgreSQL backend (detected but not bundled in this build)
    PostgreSQL,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// SQLite-backed storage
    SQLite(SqliteStorage),
}

impl Database {
    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (embedded)",
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }

    /// Create a new database instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database URL names a backend this build does not bundle
    /// - The database connection fails
    /// - Schema migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteStorage::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
            DatabaseType::PostgreSQL => Err(AppError::config(
                "PostgreSQL support is not bundled in this build. \
                 Use a sqlite: connection string.",
            )),
        }
    }
}

/// Automatically detect database type from connection string
///
/// # Errors
///
/// Returns an error if the URL format is not recognized (must start with
/// `sqlite:`, `postgres://`, or `postgresql://`)
pub fn detect_database_type(database_url: &str) -> AppResult<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("postgresql://") || database_url.starts_with("postgres://")
    {
        Ok(DatabaseType::PostgreSQL)
    } else {
        Err(AppError::config(format!(
            "Unsupported database URL format: {database_url}. \
             Supported formats: sqlite:path/to/db.sqlite, sqlite::memory:"
        )))
    }
}

// Implement DatabaseProvider for the enum by delegating to the appropriate implementation
#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> AppResult<Self> {
        Self::new(database_url).await
    }

    async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn get_exercises(&self) -> AppResult<Vec<Exercise>> {
        match self {
            Self::SQLite(db) => db.get_exercises().await,
        }
    }

    async fn get_exercises_by_category(&self, category: &str) -> AppResult<Vec<Exercise>> {
        match self {
            Self::SQLite(db) => db.get_exercises_by_category(category).await,
        }
    }

    async fn search_exercises(&self, query: &str) -> AppResult<Vec<Exercise>> {
        match self {
            Self::SQLite(db) => db.search_exercises(query).await,
        }
    }

    async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        match self {
            Self::SQLite(db) => db.get_exercise(id).await,
        }
    }

    async fn create_exercise(&self, insert: &InsertExercise) -> AppResult<Exercise> {
        match self {
            Self::SQLite(db) => db.create_exercise(insert).await,
        }
    }

    async fn get_workouts(&self) -> AppResult<Vec<Workout>> {
        match self {
            Self::SQLite(db) => db.get_workouts().await,
        }
    }

    async fn get_workout(&self, id: i64) -> AppResult<Option<WorkoutWithExercises>> {
        match self {
            Self::SQLite(db) => db.get_workout(id).await,
        }
    }

    async fn get_workouts_with_exercises(&self) -> AppResult<Vec<WorkoutWithExercises>> {
        match self {
            Self::SQLite(db) => db.get_workouts_with_exercises().await,
        }
    }

    async fn get_workouts_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutWithExercises>> {
        match self {
            Self::SQLite(db) => db.get_workouts_by_date_range(start, end).await,
        }
    }

    async fn create_workout(&self, insert: &InsertWorkout) -> AppResult<Workout> {
        match self {
            Self::SQLite(db) => db.create_workout(insert).await,
        }
    }

    async fn update_workout(
        &self,
        id: i64,
        update: &UpdateWorkout,
    ) -> AppResult<Option<Workout>> {
        match self {
            Self::SQLite(db) => db.update_workout(id, update).await,
        }
    }

    async fn delete_workout(&self, id: i64) -> AppResult<bool> {
        match self {
            Self::SQLite(db) => db.delete_workout(id).await,
        }
    }

    async fn add_exercise_to_workout(
        &self,
        insert: &InsertWorkoutExercise,
    ) -> AppResult<WorkoutExercise> {
        match self {
            Self::SQLite(db) => db.add_exercise_to_workout(insert).await,
        }
    }

    async fn update_workout_exercise(
        &self,
        id: i64,
        update: &UpdateWorkoutExercise,
    ) -> AppResult<Option<WorkoutExercise>> {
        match self {
            Self::SQLite(db) => db.update_workout_exercise(id, update).await,
        }
    }

    async fn remove_workout_exercise(&self, id: i64) -> AppResult<bool> {
        match self {
            Self::SQLite(db) => db.remove_workout_exercise(id).await,
        }
    }

    async fn get_workout_stats(&self) -> AppResult<WorkoutStats> {
        match self {
            Self::SQLite(db) => db.get_workout_stats().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_database_type() {
        assert_eq!(
            detect_database_type("sqlite:./data/fittrack.db").ok(),
            Some(DatabaseType::SQLite)
        );
        assert_eq!(
            detect_database_type("sqlite::memory:").ok(),
            Some(DatabaseType::SQLite)
        );
        assert_eq!(
            detect_database_type("postgres://localhost/fittrack").ok(),
            Some(DatabaseType::PostgreSQL)
        );
        assert!(detect_database_type("mysql://localhost/fittrack").is_err());
    }
}
