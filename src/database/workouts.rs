// ABOUTME: Database operations for workouts and their per-exercise entries
// ABOUTME: CRUD plus joined reads; parent and child writes share one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{parse_stored_date, Database};
use crate::errors::{AppError, AppResult};
use crate::intelligence::stats::compute_stats;
use crate::models::{
    Exercise, ExerciseEntry, InsertWorkout, InsertWorkoutExercise, UpdateWorkout,
    UpdateWorkoutExercise, Workout, WorkoutExercise, WorkoutStats, WorkoutWithExercises,
};
use chrono::{DateTime, Local, Utc};
use sqlx::{sqlite::SqliteRow, Row};

/// Joined select used by every "workout with exercises" read.
///
/// Entries of a workout whose exercise row has gone missing are dropped at
/// grouping time, matching inner-join semantics on the exercise side while
/// still returning workouts that have no entries at all.
const JOINED_SELECT: &str = "\
    SELECT w.id, w.name, w.date, w.duration, w.calories, w.notes, \
           we.id AS entry_id, we.workout_id, we.exercise_id, \
           we.sets, we.reps, we.weight, we.distance, \
           we.duration AS entry_duration, we.pace, \
           e.id AS joined_exercise_id, e.name AS exercise_name, \
           e.category AS exercise_category, \
           e.muscle_groups AS exercise_muscle_groups, \
           e.description AS exercise_description \
    FROM workouts w \
    LEFT JOIN workout_exercises we ON we.workout_id = w.id \
    LEFT JOIN exercises e ON e.id = we.exercise_id";

impl Database {
    /// Get all workouts ordered by date descending
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_workouts(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            "SELECT id, name, date, duration, calories, notes FROM workouts \
             ORDER BY date DESC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Get a workout joined with its exercise entries
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_workout(&self, id: i64) -> AppResult<Option<WorkoutWithExercises>> {
        let Some(workout) = self.get_workout_row(id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query(
            "SELECT we.id AS entry_id, we.workout_id, we.exercise_id, \
                    we.sets, we.reps, we.weight, we.distance, \
                    we.duration AS entry_duration, we.pace, \
                    e.name AS exercise_name, e.category AS exercise_category, \
                    e.muscle_groups AS exercise_muscle_groups, \
                    e.description AS exercise_description \
             FROM workout_exercises we \
             INNER JOIN exercises e ON e.id = we.exercise_id \
             WHERE we.workout_id = $1 \
             ORDER BY we.id",
        )
        .bind(id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout exercises: {e}")))?;

        let exercises = rows.iter().map(row_to_entry).collect::<AppResult<Vec<_>>>()?;

        Ok(Some(WorkoutWithExercises { workout, exercises }))
    }

    /// Get every workout expanded to its joined view, date descending
    ///
    /// One join query grouped in memory, not one query per workout.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_workouts_with_exercises(&self) -> AppResult<Vec<WorkoutWithExercises>> {
        let query = format!("{JOINED_SELECT} ORDER BY w.date DESC, w.id DESC, we.id");
        let rows = sqlx::query(&query)
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        group_joined_rows(&rows)
    }

    /// Get workouts whose date falls within the inclusive range, expanded
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_workouts_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<WorkoutWithExercises>> {
        let query = format!(
            "{JOINED_SELECT} WHERE w.date >= $1 AND w.date <= $2 \
             ORDER BY w.date DESC, w.id DESC, we.id"
        );
        let rows = sqlx::query(&query)
            .bind(start.to_rfc3339())
            .bind(end.to_rfc3339())
            .fetch_all(self.pool())
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to list workouts by date range: {e}"))
            })?;

        group_joined_rows(&rows)
    }

    /// Create a workout, writing parent and any nested entries in one
    /// transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails; on failure nothing
    /// is persisted
    pub async fn create_workout(&self, insert: &InsertWorkout) -> AppResult<Workout> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO workouts (name, date, duration, calories, notes)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&insert.name)
        .bind(insert.date.to_rfc3339())
        .bind(insert.duration)
        .bind(insert.calories)
        .bind(&insert.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        let workout_id = result.last_insert_rowid();

        for entry in &insert.exercises {
            sqlx::query(
                r"
                INSERT INTO workout_exercises
                    (workout_id, exercise_id, sets, reps, weight, distance, duration, pace)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(workout_id)
            .bind(entry.exercise_id)
            .bind(entry.sets)
            .bind(entry.reps)
            .bind(entry.weight)
            .bind(entry.distance)
            .bind(entry.duration)
            .bind(&entry.pace)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to add workout exercise: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit workout: {e}")))?;

        Ok(Workout {
            id: workout_id,
            name: insert.name.clone(),
            date: insert.date,
            duration: insert.duration,
            calories: insert.calories,
            notes: insert.notes.clone(),
        })
    }

    /// Apply a partial update to a workout
    ///
    /// Returns `None` when no workout with the id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_workout(
        &self,
        id: i64,
        update: &UpdateWorkout,
    ) -> AppResult<Option<Workout>> {
        let Some(existing) = self.get_workout_row(id).await? else {
            return Ok(None);
        };

        let updated = Workout {
            id,
            name: update.name.clone().unwrap_or(existing.name),
            date: update.date.unwrap_or(existing.date),
            duration: update.duration.or(existing.duration),
            calories: update.calories.or(existing.calories),
            notes: update.notes.clone().or(existing.notes),
        };

        sqlx::query(
            r"
            UPDATE workouts
            SET name = $1, date = $2, duration = $3, calories = $4, notes = $5
            WHERE id = $6
            ",
        )
        .bind(&updated.name)
        .bind(updated.date.to_rfc3339())
        .bind(updated.duration)
        .bind(updated.calories)
        .bind(&updated.notes)
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout: {e}")))?;

        Ok(Some(updated))
    }

    /// Delete a workout and all entries referencing it, in one transaction
    ///
    /// Returns whether a workout was actually removed; a missing id yields
    /// `false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_workout(&self, id: i64) -> AppResult<bool> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM workout_exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to delete workout exercises: {e}"))
            })?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit delete: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Append an exercise entry to an existing workout
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn add_exercise_to_workout(
        &self,
        insert: &InsertWorkoutExercise,
    ) -> AppResult<WorkoutExercise> {
        let result = sqlx::query(
            r"
            INSERT INTO workout_exercises
                (workout_id, exercise_id, sets, reps, weight, distance, duration, pace)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(insert.workout_id)
        .bind(insert.exercise_id)
        .bind(insert.sets)
        .bind(insert.reps)
        .bind(insert.weight)
        .bind(insert.distance)
        .bind(insert.duration)
        .bind(&insert.pace)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to add workout exercise: {e}")))?;

        Ok(WorkoutExercise {
            id: result.last_insert_rowid(),
            workout_id: insert.workout_id,
            exercise_id: insert.exercise_id,
            sets: insert.sets,
            reps: insert.reps,
            weight: insert.weight,
            distance: insert.distance,
            duration: insert.duration,
            pace: insert.pace.clone(),
        })
    }

    /// Apply a partial update to an exercise entry
    ///
    /// Returns `None` when no entry with the id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_workout_exercise(
        &self,
        id: i64,
        update: &UpdateWorkoutExercise,
    ) -> AppResult<Option<WorkoutExercise>> {
        let Some(existing) = self.get_workout_exercise_row(id).await? else {
            return Ok(None);
        };

        let updated = WorkoutExercise {
            id,
            workout_id: existing.workout_id,
            exercise_id: existing.exercise_id,
            sets: update.sets.or(existing.sets),
            reps: update.reps.or(existing.reps),
            weight: update.weight.or(existing.weight),
            distance: update.distance.or(existing.distance),
            duration: update.duration.or(existing.duration),
            pace: update.pace.clone().or(existing.pace),
        };

        sqlx::query(
            r"
            UPDATE workout_exercises
            SET sets = $1, reps = $2, weight = $3, distance = $4, duration = $5, pace = $6
            WHERE id = $7
            ",
        )
        .bind(updated.sets)
        .bind(updated.reps)
        .bind(updated.weight)
        .bind(updated.distance)
        .bind(updated.duration)
        .bind(&updated.pace)
        .bind(id)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout exercise: {e}")))?;

        Ok(Some(updated))
    }

    /// Remove a single exercise entry by id
    ///
    /// Returns whether an entry was actually removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn remove_workout_exercise(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workout_exercises WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to remove workout exercise: {e}"))
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Derive aggregate statistics from the full workout history
    ///
    /// Recomputed fully on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_workout_stats(&self) -> AppResult<WorkoutStats> {
        let workouts = self.get_workouts().await?;
        Ok(compute_stats(&workouts, Local::now()))
    }

    async fn get_workout_row(&self, id: i64) -> AppResult<Option<Workout>> {
        let row = sqlx::query(
            "SELECT id, name, date, duration, calories, notes FROM workouts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        row.map(|r| row_to_workout(&r)).transpose()
    }

    async fn get_workout_exercise_row(&self, id: i64) -> AppResult<Option<WorkoutExercise>> {
        let row = sqlx::query(
            "SELECT id, workout_id, exercise_id, sets, reps, weight, distance, duration, pace \
             FROM workout_exercises WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout exercise: {e}")))?;

        row.map(|r| row_to_workout_exercise(&r)).transpose()
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let date_str: String = row.try_get("date")?;

    Ok(Workout {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date: parse_stored_date(&date_str)?,
        duration: row.try_get("duration")?,
        calories: row.try_get("calories")?,
        notes: row.try_get("notes")?,
    })
}

fn row_to_workout_exercise(row: &SqliteRow) -> AppResult<WorkoutExercise> {
    Ok(WorkoutExercise {
        id: row.try_get("id")?,
        workout_id: row.try_get("workout_id")?,
        exercise_id: row.try_get("exercise_id")?,
        sets: row.try_get("sets")?,
        reps: row.try_get("reps")?,
        weight: row.try_get("weight")?,
        distance: row.try_get("distance")?,
        duration: row.try_get("duration")?,
        pace: row.try_get("pace")?,
    })
}

/// Map one row of a joined (aliased) select to an entry with its exercise
fn row_to_entry(row: &SqliteRow) -> AppResult<ExerciseEntry> {
    let exercise_id: i64 = row.try_get("exercise_id")?;
    let muscle_groups_json: String = row.try_get("exercise_muscle_groups")?;
    let muscle_groups: Vec<String> = serde_json::from_str(&muscle_groups_json)?;

    Ok(ExerciseEntry {
        entry: WorkoutExercise {
            id: row.try_get("entry_id")?,
            workout_id: row.try_get("workout_id")?,
            exercise_id,
            sets: row.try_get("sets")?,
            reps: row.try_get("reps")?,
            weight: row.try_get("weight")?,
            distance: row.try_get("distance")?,
            duration: row.try_get("entry_duration")?,
            pace: row.try_get("pace")?,
        },
        exercise: Exercise {
            id: exercise_id,
            name: row.try_get("exercise_name")?,
            category: row.try_get("exercise_category")?,
            muscle_groups,
            description: row.try_get("exercise_description")?,
        },
    })
}

/// Group rows of the joined listing select by workout
///
/// Rows arrive ordered by workout; a NULL `entry_id` marks a workout with no
/// entries, a NULL `joined_exercise_id` marks an entry whose exercise row is
/// gone (skipped).
fn group_joined_rows(rows: &[SqliteRow]) -> AppResult<Vec<WorkoutWithExercises>> {
    let mut result: Vec<WorkoutWithExercises> = Vec::new();

    for row in rows {
        let workout_id: i64 = row.try_get("id")?;
        let is_new_workout = result
            .last()
            .is_none_or(|last| last.workout.id != workout_id);

        if is_new_workout {
            result.push(WorkoutWithExercises {
                workout: row_to_workout(row)?,
                exercises: Vec::new(),
            });
        }

        let entry_id: Option<i64> = row.try_get("entry_id")?;
        let joined_exercise_id: Option<i64> = row.try_get("joined_exercise_id")?;
        if entry_id.is_some() && joined_exercise_id.is_some() {
            if let Some(current) = result.last_mut() {
                current.exercises.push(row_to_entry(row)?);
            }
        }
    }

    Ok(result)
}
