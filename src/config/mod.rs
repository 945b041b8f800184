// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-derived configuration and typed settings values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration module for the FitTrack server
//!
//! Centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables

/// Environment and server configuration
pub mod environment;
