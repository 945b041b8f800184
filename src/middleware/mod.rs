// ABOUTME: HTTP middleware for cross-origin request handling
// ABOUTME: CORS policy configured from the environment at startup

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
