// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! SQLite-backed storage for the exercise catalog, workouts, and per-workout
//! exercise entries. Schema setup runs as inline migrations on connect;
//! referential cleanup is handled in application code (child rows are removed
//! with their parent inside one transaction).

mod exercises;
mod workouts;

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for catalog and workout storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema
    /// creation fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.ends_with(":memory:")
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.into()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if SQL statements fail to execute
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                muscle_groups TEXT NOT NULL DEFAULT '[]',
                description TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                duration INTEGER,
                calories INTEGER,
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workouts table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL,
                exercise_id INTEGER NOT NULL,
                sets INTEGER,
                reps INTEGER,
                weight INTEGER,
                distance INTEGER,
                duration INTEGER,
                pace TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create workout_exercises table: {e}"))
        })?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create index: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout_id \
             ON workout_exercises(workout_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create index: {e}")))?;

        Ok(())
    }

    /// Access the underlying connection pool
    pub(crate) const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

/// Parse a timestamp column stored as RFC 3339 text
pub(crate) fn parse_stored_date(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Malformed stored date {value:?}: {e}")))
}
