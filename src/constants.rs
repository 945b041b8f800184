// ABOUTME: System-wide constants and configuration values for the FitTrack API
// ABOUTME: Contains default settings, environment variable names, and goal constants
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

/// Service identity
pub mod service {
    /// Service name used in logs and health responses
    pub const NAME: &str = "fittrack-server";

    /// Server version from Cargo.toml
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Default values applied when the environment provides nothing
pub mod defaults {
    /// Default HTTP port for the REST API
    pub const HTTP_PORT: u16 = 8080;

    /// Default database connection string
    pub const DATABASE_URL: &str = "sqlite:./data/fittrack.db";

    /// Fixed weekly workout goal; not user-configurable in this version
    pub const WEEKLY_GOAL: i64 = 5;

    /// Request timeout applied to every HTTP request
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names read by the configuration layer
pub mod env_keys {
    /// Override for the HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Comma-separated CORS origin allowlist, or "*"
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
