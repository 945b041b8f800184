// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, resource, and request helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fittrack_server`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use axum::body::Body;
use axum::Router;
use fittrack_server::{
    config::environment::{
        CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
    },
    context::ServerResources,
    database_plugins::{factory::Database, DatabaseProvider},
    models::{Exercise, InsertExercise, InsertWorkout, Workout},
    server::HttpServer,
};
use http::{Request, StatusCode};
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup against an in-memory SQLite store
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Test server configuration (no environment reads)
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::default(),
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
        environment: Environment::Testing,
    }
}

/// Full application router over a fresh in-memory database
pub async fn create_test_router() -> Result<Router> {
    let database = create_test_database().await?;
    let resources = Arc::new(ServerResources::new(database, create_test_config()));
    Ok(HttpServer::router(resources))
}

/// Router plus a handle to its backing database
pub async fn create_test_router_with_database() -> Result<(Router, Database)> {
    let database = create_test_database().await?;
    let resources = Arc::new(ServerResources::new(database.clone(), create_test_config()));
    Ok((HttpServer::router(resources), database))
}

/// Insert a catalog exercise for test fixtures
pub async fn seed_exercise(
    database: &Database,
    name: &str,
    category: &str,
    description: &str,
) -> Result<Exercise> {
    let exercise = database
        .create_exercise(&InsertExercise {
            name: name.into(),
            category: category.into(),
            muscle_groups: vec!["core".into()],
            description: Some(description.into()),
        })
        .await?;
    Ok(exercise)
}

/// Build a minimal workout insert with no nested entries
pub fn insert_workout(name: &str, date: &str) -> InsertWorkout {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "date": date,
    }))
    .unwrap()
}

/// Create a workout dated `days_back` days before now
pub async fn create_workout_days_back(
    database: &Database,
    name: &str,
    days_back: i64,
) -> Result<Workout> {
    let date = chrono::Utc::now() - chrono::Duration::days(days_back);
    let insert: InsertWorkout = serde_json::from_value(serde_json::json!({
        "name": name,
        "date": date.to_rfc3339(),
    }))?;
    let workout = database.create_workout(&insert).await?;
    Ok(workout)
}

/// Drive the router with a JSON request and decode the JSON response
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
