// ABOUTME: Exercise catalog seeding utility for the FitTrack server
// ABOUTME: Seeds the default strength, cardio, and yoga exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog seeder for the FitTrack server.
//!
//! The catalog is reference data the application never mutates; this binary
//! creates the default exercises.
//!
//! Usage:
//! ```bash
//! # Seed exercises (uses DATABASE_URL from environment)
//! cargo run --bin seed-exercises
//!
//! # Override database URL
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/fittrack.db
//!
//! # Force re-seed (replaces existing data)
//! cargo run --bin seed-exercises -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use fittrack_server::constants::defaults;
use fittrack_server::database_plugins::{factory::Database, DatabaseProvider};
use fittrack_server::models::InsertExercise;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-exercises",
    about = "FitTrack exercise catalog seeder",
    long_about = "Create the default exercise catalog for the FitTrack app"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if data already exists
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

struct ExerciseData {
    name: &'static str,
    category: &'static str,
    muscle_groups: &'static [&'static str],
    description: &'static str,
}

const EXERCISES: &[ExerciseData] = &[
    ExerciseData {
        name: "Push-ups",
        category: "strength",
        muscle_groups: &["chest", "triceps", "shoulders"],
        description: "Bodyweight upper body exercise",
    },
    ExerciseData {
        name: "Squats",
        category: "strength",
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        description: "Bodyweight lower body exercise",
    },
    ExerciseData {
        name: "Running",
        category: "cardio",
        muscle_groups: &["legs", "core"],
        description: "Cardiovascular exercise",
    },
    ExerciseData {
        name: "Deadlift",
        category: "strength",
        muscle_groups: &["hamstrings", "glutes", "back"],
        description: "Compound strength exercise",
    },
    ExerciseData {
        name: "Bench Press",
        category: "strength",
        muscle_groups: &["chest", "triceps", "shoulders"],
        description: "Upper body strength exercise",
    },
    ExerciseData {
        name: "Cycling",
        category: "cardio",
        muscle_groups: &["legs", "core"],
        description: "Low-impact cardio exercise",
    },
    ExerciseData {
        name: "Yoga Flow",
        category: "yoga",
        muscle_groups: &["full body"],
        description: "Flexibility and balance exercise",
    },
    ExerciseData {
        name: "Mountain Pose",
        category: "yoga",
        muscle_groups: &["core", "legs"],
        description: "Basic standing yoga pose",
    },
    ExerciseData {
        name: "Burpees",
        category: "cardio",
        muscle_groups: &["full body"],
        description: "High-intensity full body exercise",
    },
    ExerciseData {
        name: "Plank",
        category: "strength",
        muscle_groups: &["core", "shoulders"],
        description: "Core strengthening exercise",
    },
    ExerciseData {
        name: "Pull-ups",
        category: "strength",
        muscle_groups: &["back", "biceps"],
        description: "Upper body pulling exercise",
    },
    ExerciseData {
        name: "Lunges",
        category: "strength",
        muscle_groups: &["quadriceps", "glutes", "calves"],
        description: "Single-leg strength exercise",
    },
    ExerciseData {
        name: "Rowing",
        category: "cardio",
        muscle_groups: &["back", "arms", "legs"],
        description: "Full-body cardio exercise",
    },
    ExerciseData {
        name: "Warrior Pose",
        category: "yoga",
        muscle_groups: &["legs", "core"],
        description: "Standing yoga pose for strength and balance",
    },
    ExerciseData {
        name: "Swimming",
        category: "cardio",
        muscle_groups: &["full body"],
        description: "Low-impact full-body cardio",
    },
    ExerciseData {
        name: "Overhead Press",
        category: "strength",
        muscle_groups: &["shoulders", "triceps", "core"],
        description: "Shoulder strength exercise",
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== FitTrack Exercise Catalog Seeder ===");

    // Load database URL
    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    // Check if data already exists
    let Database::SQLite(storage) = &database;
    let existing = storage.inner().exercise_count().await?;

    if existing > 0 && !args.force {
        info!(
            "Exercise catalog already seeded ({existing} exercises). Use --force to re-seed."
        );
        return Ok(());
    }

    if existing > 0 {
        info!("Clearing {existing} existing exercises");
        storage.inner().clear_exercises().await?;
    }

    info!("Seeding {} exercises...", EXERCISES.len());
    for data in EXERCISES {
        let exercise = database
            .create_exercise(&InsertExercise {
                name: data.name.into(),
                category: data.category.into(),
                muscle_groups: data.muscle_groups.iter().map(|&m| m.into()).collect(),
                description: Some(data.description.into()),
            })
            .await?;
        info!("  seeded {} ({})", exercise.name, exercise.category);
    }

    info!("Exercise catalog seeded successfully");
    Ok(())
}
