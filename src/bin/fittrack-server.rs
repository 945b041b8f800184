// ABOUTME: FitTrack server binary serving the REST API
// ABOUTME: Loads env configuration, initializes storage, and runs the HTTP server
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # FitTrack API Server Binary
//!
//! Starts the FitTrack REST API: exercise catalog, workout store, and
//! statistics engine over a SQLite database.

use anyhow::Result;
use clap::Parser;
use fittrack_server::{
    config::environment::ServerConfig,
    context::ServerResources,
    database_plugins::factory::Database,
    logging,
    server::HttpServer,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fittrack-server")]
#[command(about = "FitTrack - personal fitness tracking REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url =
            fittrack_server::config::environment::DatabaseUrl::parse_url(&database_url);
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting FitTrack API Server");
    info!("{}", config.summary());

    // Initialize storage; backend selection happens exactly once, here
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));

    HttpServer::new(resources).run(port).await
}
