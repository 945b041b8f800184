// ABOUTME: Aggregate workout statistics derived from the full history
// ABOUTME: Streak over distinct active days, weekly goal progress, duration and calorie totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate workout statistics
//!
//! All metrics are recomputed from the full workout history on every request.
//! Calendar math runs in the server's local timezone; callers pass the clock
//! so tests can pin it.

use crate::constants::defaults;
use crate::models::{Workout, WorkoutStats};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeSet;

/// Compute aggregate statistics over the full workout history
///
/// `now` is the wall clock used for "today", week boundaries, and streak
/// anchoring.
#[must_use]
pub fn compute_stats(workouts: &[Workout], now: DateTime<Local>) -> WorkoutStats {
    let today = now.date_naive();
    let week_start = today - Duration::days(i64::from(now.weekday().num_days_from_sunday()));

    let weekly_progress = workouts
        .iter()
        .filter(|w| local_day(w) >= week_start)
        .count();

    let total_duration: i64 = workouts.iter().map(|w| w.duration.unwrap_or(0)).sum();
    let avg_duration = if workouts.is_empty() {
        0
    } else {
        (total_duration as f64 / workouts.len() as f64).round() as i64
    };

    WorkoutStats {
        total_workouts: workouts.len() as i64,
        current_streak: current_streak(workouts, today),
        weekly_goal: defaults::WEEKLY_GOAL,
        weekly_progress: weekly_progress as i64,
        avg_duration,
        total_calories: workouts.iter().map(|w| w.calories.unwrap_or(0)).sum(),
    }
}

/// Count consecutive active calendar days ending today or yesterday
///
/// Workout timestamps are first collapsed into a set of distinct local days,
/// so several workouts on one day count as a single streak day. The walk
/// seeds only if the most recent active day is today or yesterday; a gap
/// before that yields 0.
fn current_streak(workouts: &[Workout], today: NaiveDate) -> i64 {
    let active_days: BTreeSet<NaiveDate> = workouts.iter().map(local_day).collect();

    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;

    for day in active_days.iter().rev() {
        match expected {
            None => {
                if *day == today || *day == today - Duration::days(1) {
                    streak = 1;
                } else {
                    break;
                }
            }
            Some(expected_day) => {
                if *day == expected_day {
                    streak += 1;
                } else {
                    break;
                }
            }
        }
        expected = Some(*day - Duration::days(1));
    }

    streak
}

fn local_day(workout: &Workout) -> NaiveDate {
    workout.date.with_timezone(&Local).date_naive()
}
