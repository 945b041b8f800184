// ABOUTME: Dependency injection context shared by all route handlers
// ABOUTME: Bundles the storage handle and server configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Focused dependency injection context
//!
//! Route handlers receive an `Arc<ServerResources>` as axum state rather
//! than individual handles.

use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;

/// Shared resources for the HTTP server
pub struct ServerResources {
    /// Storage backend, selected once at startup
    pub database: Database,
    /// Server configuration loaded from the environment
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle resources for handler state
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}
