// ABOUTME: Main library entry point for the FitTrack fitness tracking API
// ABOUTME: Provides a REST API over an exercise catalog, workout store, and statistics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # FitTrack Server
//!
//! A personal fitness-tracking REST backend. Users log workouts composed of
//! exercises (strength, cardio, yoga), browse a seeded exercise catalog,
//! and read aggregate progress statistics derived from their full history.
//!
//! ## Architecture
//!
//! - **Models**: Common data structures for catalog and workout data
//! - **Database**: SQLite storage with inline migrations
//! - **Database plugins**: Storage abstraction selected once at startup
//! - **Intelligence**: Pure derived analytics (streaks, progressions, series)
//! - **Routes**: REST endpoints organized by domain
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fittrack_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FitTrack server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management and persistence
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Focused dependency injection context
pub mod context;

/// SQLite database management
pub mod database;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Derived analytics over the workout history
pub mod intelligence;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for cross-origin request handling
pub mod middleware;

/// Common data models for catalog and workout data
pub mod models;

/// `HTTP` routes for the REST API
pub mod routes;

/// HTTP server composition and lifecycle
pub mod server;
