// ABOUTME: Intelligence module for derived workout analytics
// ABOUTME: Pure aggregation functions recomputed from fetched state on every read
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Intelligence Module
//!
//! Derived analytics over the workout history. Everything here is a pure,
//! deterministic transform of already-fetched data: the statistics engine
//! recomputes aggregate metrics per request, and the progress/timeline
//! functions feed presentation-layer views (charts, volume summaries,
//! calendar coloring).

/// Per-exercise progression and volume aggregations over a time window
pub mod progress;

/// Aggregate workout statistics (streaks, weekly goal progress)
pub mod stats;

/// Daily activity series and calendar day-categorization
pub mod timeline;

pub use progress::{
    pace_progression, volume_stats, weight_progression, PaceProgress, TimeWindow, VolumeStats,
    WeightProgress,
};
pub use stats::compute_stats;
pub use timeline::{daily_series, day_categories, display_category, DailyActivity};
