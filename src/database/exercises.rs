// ABOUTME: Database operations for the exercise catalog
// ABOUTME: Read-heavy reference data with category filter and substring search
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, InsertExercise};
use sqlx::{sqlite::SqliteRow, Row};

impl Database {
    /// Get all exercises in storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT id, name, category, muscle_groups, description FROM exercises",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Get exercises matching a category exactly
    ///
    /// An unknown category yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_exercises_by_category(&self, category: &str) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT id, name, category, muscle_groups, description FROM exercises \
             WHERE category = $1",
        )
        .bind(category)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises by category: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Case-insensitive substring search over name, category, and description
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn search_exercises(&self, query: &str) -> AppResult<Vec<Exercise>> {
        let pattern = format!("%{}%", query.to_lowercase());
        let rows = sqlx::query(
            "SELECT id, name, category, muscle_groups, description FROM exercises \
             WHERE LOWER(name) LIKE $1 \
                OR LOWER(category) LIKE $1 \
                OR LOWER(COALESCE(description, '')) LIKE $1",
        )
        .bind(&pattern)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to search exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Get a single exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            "SELECT id, name, category, muscle_groups, description FROM exercises \
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    /// Create a catalog exercise (seeding and tests)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_exercise(&self, insert: &InsertExercise) -> AppResult<Exercise> {
        let muscle_groups_json = serde_json::to_string(&insert.muscle_groups)?;

        let result = sqlx::query(
            r"
            INSERT INTO exercises (name, category, muscle_groups, description)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&insert.name)
        .bind(&insert.category)
        .bind(&muscle_groups_json)
        .bind(&insert.description)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;

        Ok(Exercise {
            id: result.last_insert_rowid(),
            name: insert.name.clone(),
            category: insert.category.clone(),
            muscle_groups: insert.muscle_groups.clone(),
            description: insert.description.clone(),
        })
    }

    /// Count catalog entries, used by the seeder's idempotency check
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn exercise_count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM exercises")
            .fetch_one(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;

        Ok(row.try_get("count")?)
    }

    /// Remove every catalog entry; only the seeder's `--force` path uses this
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn clear_exercises(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM exercises")
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to clear exercises: {e}")))?;
        Ok(())
    }
}

pub(crate) fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let muscle_groups_json: String = row.try_get("muscle_groups")?;
    let muscle_groups: Vec<String> = serde_json::from_str(&muscle_groups_json)?;

    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        muscle_groups,
        description: row.try_get("description")?,
    })
}
