// ABOUTME: Integration tests for the workout store
// ABOUTME: Covers CRUD, joined views, date ranges, and cascade deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_database, create_workout_days_back, insert_workout, seed_exercise};
use fittrack_server::database_plugins::DatabaseProvider;
use fittrack_server::models::{InsertWorkout, InsertWorkoutExercise, UpdateWorkout};

#[tokio::test]
async fn test_create_and_get_round_trip() {
    let database = create_test_database().await.unwrap();

    let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
        "name": "Leg Day",
        "date": "2024-01-15",
        "duration": 45,
        "calories": 300
    }))
    .unwrap();

    let created = database.create_workout(&insert).await.unwrap();
    assert!(created.id > 0);

    let fetched = database.get_workout(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.workout.name, "Leg Day");
    assert_eq!(fetched.workout.duration, Some(45));
    assert_eq!(fetched.workout.calories, Some(300));
    assert_eq!(
        fetched.workout.date.to_rfc3339(),
        "2024-01-15T00:00:00+00:00"
    );
    assert!(fetched.exercises.is_empty());
}

#[tokio::test]
async fn test_get_missing_workout_is_none() {
    let database = create_test_database().await.unwrap();
    assert!(database.get_workout(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_with_nested_entries_is_atomic() {
    let database = create_test_database().await.unwrap();
    let squats = seed_exercise(&database, "Squats", "strength", "Lower body").await.unwrap();
    let running = seed_exercise(&database, "Running", "cardio", "Cardio").await.unwrap();

    let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
        "name": "Full Session",
        "date": "2024-02-01T09:00:00Z",
        "duration": 60,
        "exercises": [
            { "exerciseId": squats.id, "sets": 3, "reps": 10, "weight": 100 },
            { "exerciseId": running.id, "distance": 5000, "duration": 1800, "pace": "6:00/km" }
        ]
    }))
    .unwrap();

    let created = database.create_workout(&insert).await.unwrap();
    let fetched = database.get_workout(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.exercises.len(), 2);
    assert_eq!(fetched.exercises[0].exercise.name, "Squats");
    assert_eq!(fetched.exercises[0].entry.weight, Some(100));
    assert_eq!(fetched.exercises[1].exercise.category, "cardio");
    assert_eq!(fetched.exercises[1].entry.pace.as_deref(), Some("6:00/km"));
}

#[tokio::test]
async fn test_list_orders_by_date_descending() {
    let database = create_test_database().await.unwrap();
    create_workout_days_back(&database, "Oldest", 10).await.unwrap();
    create_workout_days_back(&database, "Newest", 1).await.unwrap();
    create_workout_days_back(&database, "Middle", 5).await.unwrap();

    let workouts = database.get_workouts().await.unwrap();
    let names: Vec<&str> = workouts.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);

    let joined = database.get_workouts_with_exercises().await.unwrap();
    let joined_names: Vec<&str> = joined.iter().map(|w| w.workout.name.as_str()).collect();
    assert_eq!(joined_names, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn test_date_range_is_inclusive() {
    let database = create_test_database().await.unwrap();

    for (name, date) in [
        ("Early", "2024-01-10"),
        ("Mid", "2024-01-15"),
        ("Late", "2024-01-20"),
    ] {
        database
            .create_workout(&insert_workout(name, date))
            .await
            .unwrap();
    }

    let start = fittrack_server::models::parse_flexible_date("2024-01-10").unwrap();
    let end = fittrack_server::models::parse_flexible_date("2024-01-15").unwrap();

    let in_range = database
        .get_workouts_by_date_range(start, end)
        .await
        .unwrap();
    let names: Vec<&str> = in_range.iter().map(|w| w.workout.name.as_str()).collect();

    // Both boundary days are included, newest first
    assert_eq!(names, vec!["Mid", "Early"]);
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let database = create_test_database().await.unwrap();

    let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
        "name": "Morning Run",
        "date": "2024-03-01",
        "duration": 30,
        "notes": "easy pace"
    }))
    .unwrap();
    let created = database.create_workout(&insert).await.unwrap();

    let update: UpdateWorkout =
        serde_json::from_value(serde_json::json!({ "duration": 42 })).unwrap();
    let updated = database
        .update_workout(created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Morning Run");
    assert_eq!(updated.duration, Some(42));
    assert_eq!(updated.notes.as_deref(), Some("easy pace"));

    // And the change is persisted
    let fetched = database.get_workout(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.workout.duration, Some(42));
}

#[tokio::test]
async fn test_update_missing_workout_is_none() {
    let database = create_test_database().await.unwrap();
    let update = UpdateWorkout::default();
    assert!(database.update_workout(42, &update).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_cascades_to_entries() {
    let database = create_test_database().await.unwrap();
    let squats = seed_exercise(&database, "Squats", "strength", "Lower body").await.unwrap();

    let created = database
        .create_workout(&insert_workout("To Delete", "2024-04-01"))
        .await
        .unwrap();

    let entry = database
        .add_exercise_to_workout(&InsertWorkoutExercise {
            workout_id: created.id,
            exercise_id: squats.id,
            sets: Some(3),
            reps: Some(10),
            weight: Some(135),
            distance: None,
            duration: None,
            pace: None,
        })
        .await
        .unwrap();

    assert!(database.delete_workout(created.id).await.unwrap());

    // Workout is gone
    assert!(database.get_workout(created.id).await.unwrap().is_none());

    // And no orphaned entries remain queryable
    assert!(!database.remove_workout_exercise(entry.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_workout_returns_false() {
    let database = create_test_database().await.unwrap();
    assert!(!database.delete_workout(42).await.unwrap());
}

#[tokio::test]
async fn test_file_backed_database_persists_across_connections() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/fittrack.db", dir.path().display());

    let id = {
        let database = fittrack_server::database_plugins::factory::Database::new(&url)
            .await
            .unwrap();
        let created = database
            .create_workout(&insert_workout("Persisted", "2024-06-01"))
            .await
            .unwrap();
        created.id
    };

    // A fresh connection against the same file sees the workout
    let reopened = fittrack_server::database_plugins::factory::Database::new(&url)
        .await
        .unwrap();
    let fetched = reopened.get_workout(id).await.unwrap().unwrap();
    assert_eq!(fetched.workout.name, "Persisted");
}

#[tokio::test]
async fn test_entry_update_and_remove() {
    let database = create_test_database().await.unwrap();
    let squats = seed_exercise(&database, "Squats", "strength", "Lower body").await.unwrap();

    let workout = database
        .create_workout(&insert_workout("Strength", "2024-05-01"))
        .await
        .unwrap();
    let entry = database
        .add_exercise_to_workout(&InsertWorkoutExercise {
            workout_id: workout.id,
            exercise_id: squats.id,
            sets: Some(3),
            reps: Some(8),
            weight: Some(185),
            distance: None,
            duration: None,
            pace: None,
        })
        .await
        .unwrap();

    let update = serde_json::from_value(serde_json::json!({ "weight": 195 })).unwrap();
    let updated = database
        .update_workout_exercise(entry.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.weight, Some(195));
    assert_eq!(updated.sets, Some(3));

    assert!(database.remove_workout_exercise(entry.id).await.unwrap());
    assert!(!database.remove_workout_exercise(entry.id).await.unwrap());

    let update = serde_json::from_value(serde_json::json!({ "weight": 200 })).unwrap();
    assert!(database
        .update_workout_exercise(entry.id, &update)
        .await
        .unwrap()
        .is_none());
}
