// ABOUTME: Integration tests for the exercise catalog storage operations
// ABOUTME: Covers listing, category filtering, substring search, and lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_database, seed_exercise};
use fittrack_server::database_plugins::DatabaseProvider;

async fn seeded_catalog() -> fittrack_server::database_plugins::factory::Database {
    let database = create_test_database().await.unwrap();
    seed_exercise(&database, "Squats", "strength", "Bodyweight lower body exercise")
        .await
        .unwrap();
    seed_exercise(&database, "Running", "cardio", "Cardiovascular exercise")
        .await
        .unwrap();
    seed_exercise(&database, "Yoga Flow", "yoga", "Flexibility and balance exercise")
        .await
        .unwrap();
    database
}

#[tokio::test]
async fn test_list_returns_all_exercises() {
    let database = seeded_catalog().await;

    let exercises = database.get_exercises().await.unwrap();
    assert_eq!(exercises.len(), 3);
}

#[tokio::test]
async fn test_category_filter_exact_match() {
    let database = seeded_catalog().await;

    let strength = database.get_exercises_by_category("strength").await.unwrap();
    assert_eq!(strength.len(), 1);
    assert_eq!(strength[0].name, "Squats");

    // Unknown category yields an empty set, not an error
    let unknown = database.get_exercises_by_category("pilates").await.unwrap();
    assert!(unknown.is_empty());

    // Filtering is exact, not substring
    let partial = database.get_exercises_by_category("stre").await.unwrap();
    assert!(partial.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let database = seeded_catalog().await;

    let matches = database.search_exercises("squat").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Squats");

    let upper = database.search_exercises("SQUAT").await.unwrap();
    assert_eq!(upper.len(), 1);
}

#[tokio::test]
async fn test_search_spans_category_and_description() {
    let database = seeded_catalog().await;

    // Matches the category column
    let by_category = database.search_exercises("cardio").await.unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].name, "Running");

    // Matches the description column
    let by_description = database.search_exercises("balance").await.unwrap();
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "Yoga Flow");

    let no_match = database.search_exercises("swimming").await.unwrap();
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn test_get_by_id() {
    let database = seeded_catalog().await;

    let all = database.get_exercises().await.unwrap();
    let first = &all[0];

    let found = database.get_exercise(first.id).await.unwrap().unwrap();
    assert_eq!(found.name, first.name);
    assert_eq!(found.muscle_groups, vec!["core".to_owned()]);

    assert!(database.get_exercise(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let database = create_test_database().await.unwrap();

    let first = seed_exercise(&database, "Push-ups", "strength", "Upper body").await.unwrap();
    let second = seed_exercise(&database, "Pull-ups", "strength", "Back").await.unwrap();

    assert!(second.id > first.id);
}
