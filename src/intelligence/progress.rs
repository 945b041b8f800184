// ABOUTME: Per-exercise progression and volume aggregations over a time window
// ABOUTME: Pure transforms of fetched workout views for the progress screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Progression and volume aggregations
//!
//! Groups performance entries by exercise name within a selectable time
//! window. Pace values are opaque strings throughout; "best" and "average"
//! pace are the first and middle recorded values, not parsed comparisons.

use crate::models::{ExerciseCategory, WorkoutWithExercises};
use chrono::{DateTime, Duration, Local, Utc};
use serde::Serialize;

/// Selectable reporting window, in days back from now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Last 7 days
    Week,
    /// Last 14 days
    Fortnight,
    /// Last 30 days
    Month,
    /// Last 90 days
    Quarter,
    /// Last 365 days
    Year,
}

impl TimeWindow {
    /// Window length in days
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Fortnight => 14,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Parse a day count into a window; only the supported sizes map
    #[must_use]
    pub const fn from_days(days: i64) -> Option<Self> {
        match days {
            7 => Some(Self::Week),
            14 => Some(Self::Fortnight),
            30 => Some(Self::Month),
            90 => Some(Self::Quarter),
            365 => Some(Self::Year),
            _ => None,
        }
    }
}

/// Weight progression for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightProgress {
    /// Exercise name
    pub exercise: String,
    /// Heaviest recorded weight in pounds
    pub max_weight: i64,
    /// Rounded mean of recorded weights
    pub avg_weight: i64,
    /// Number of recorded entries
    pub sessions: usize,
}

/// Pace progression for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceProgress {
    /// Exercise name
    pub exercise: String,
    /// First recorded pace
    pub best_pace: String,
    /// Middle-index recorded pace
    pub avg_pace: String,
    /// Number of recorded entries
    pub sessions: usize,
}

/// Volume totals across the window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeStats {
    /// Total distance in kilometers, one decimal
    pub distance_km: f64,
    /// Total weight volume: sum of weight x sets x reps over strength entries
    pub weight_volume: i64,
    /// Total workout time, formatted as "Hh Mm"
    pub active_time: String,
}

/// Weight lifted per strength exercise, heaviest first
///
/// Only entries with a recorded weight whose exercise is strength-category
/// contribute.
#[must_use]
pub fn weight_progression(
    workouts: &[WorkoutWithExercises],
    window: TimeWindow,
    now: DateTime<Local>,
) -> Vec<WeightProgress> {
    let mut weights_by_exercise: Vec<(String, Vec<i64>)> = Vec::new();

    for workout in in_window(workouts, window, now) {
        for entry in &workout.exercises {
            let is_strength =
                ExerciseCategory::parse(&entry.exercise.category) == ExerciseCategory::Strength;
            if let (true, Some(weight)) = (is_strength, entry.entry.weight) {
                push_grouped(&mut weights_by_exercise, &entry.exercise.name, weight);
            }
        }
    }

    let mut progression: Vec<WeightProgress> = weights_by_exercise
        .into_iter()
        .map(|(exercise, weights)| WeightProgress {
            exercise,
            max_weight: weights.iter().copied().max().unwrap_or(0),
            avg_weight: rounded_mean(&weights),
            sessions: weights.len(),
        })
        .collect();

    progression.sort_by(|a, b| b.max_weight.cmp(&a.max_weight).then(a.exercise.cmp(&b.exercise)));
    progression
}

/// Pace per cardio exercise, in first-seen order
///
/// Pace strings are never parsed: "best" is the first recorded value and
/// "average" the middle-index value of the list.
#[must_use]
pub fn pace_progression(
    workouts: &[WorkoutWithExercises],
    window: TimeWindow,
    now: DateTime<Local>,
) -> Vec<PaceProgress> {
    let mut paces_by_exercise: Vec<(String, Vec<String>)> = Vec::new();

    for workout in in_window(workouts, window, now) {
        for entry in &workout.exercises {
            let is_cardio =
                ExerciseCategory::parse(&entry.exercise.category) == ExerciseCategory::Cardio;
            if let (true, Some(pace)) = (is_cardio, entry.entry.pace.clone()) {
                push_grouped(&mut paces_by_exercise, &entry.exercise.name, pace);
            }
        }
    }

    paces_by_exercise
        .into_iter()
        .map(|(exercise, paces)| PaceProgress {
            best_pace: paces[0].clone(),
            avg_pace: paces[paces.len() / 2].clone(),
            sessions: paces.len(),
            exercise,
        })
        .collect()
}

/// Distance, weight-volume, and active-time totals across the window
#[must_use]
pub fn volume_stats(
    workouts: &[WorkoutWithExercises],
    window: TimeWindow,
    now: DateTime<Local>,
) -> VolumeStats {
    let mut total_distance_m = 0_i64;
    let mut weight_volume = 0_i64;
    let mut total_minutes = 0_i64;

    for workout in in_window(workouts, window, now) {
        total_minutes += workout.workout.duration.unwrap_or(0);
        for entry in &workout.exercises {
            total_distance_m += entry.entry.distance.unwrap_or(0);
            if let (Some(weight), Some(sets), Some(reps)) =
                (entry.entry.weight, entry.entry.sets, entry.entry.reps)
            {
                weight_volume += weight * sets * reps;
            }
        }
    }

    VolumeStats {
        distance_km: (total_distance_m as f64 / 1000.0 * 10.0).round() / 10.0,
        weight_volume,
        active_time: format!("{}h {}m", total_minutes / 60, total_minutes % 60),
    }
}

fn in_window<'a>(
    workouts: &'a [WorkoutWithExercises],
    window: TimeWindow,
    now: DateTime<Local>,
) -> impl Iterator<Item = &'a WorkoutWithExercises> {
    let cutoff: DateTime<Utc> = now.with_timezone(&Utc) - Duration::days(window.days());
    workouts.iter().filter(move |w| w.workout.date >= cutoff)
}

fn push_grouped<T>(groups: &mut Vec<(String, Vec<T>)>, name: &str, value: T) {
    if let Some((_, values)) = groups.iter_mut().find(|(n, _)| n == name) {
        values.push(value);
    } else {
        groups.push((name.into(), vec![value]));
    }
}

fn rounded_mean(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    (values.iter().sum::<i64>() as f64 / values.len() as f64).round() as i64
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{Exercise, ExerciseEntry, Workout, WorkoutExercise};
    use chrono::Utc;

    fn exercise(id: i64, name: &str, category: &str) -> Exercise {
        Exercise {
            id,
            name: name.into(),
            category: category.into(),
            muscle_groups: Vec::new(),
            description: None,
        }
    }

    fn entry(exercise: Exercise, weight: Option<i64>, sets: Option<i64>, reps: Option<i64>, distance: Option<i64>, pace: Option<&str>) -> ExerciseEntry {
        ExerciseEntry {
            entry: WorkoutExercise {
                id: 0,
                workout_id: 0,
                exercise_id: exercise.id,
                sets,
                reps,
                weight,
                distance,
                duration: None,
                pace: pace.map(Into::into),
            },
            exercise,
        }
    }

    fn workout(days_back: i64, duration: Option<i64>, exercises: Vec<ExerciseEntry>) -> WorkoutWithExercises {
        WorkoutWithExercises {
            workout: Workout {
                id: 0,
                name: "Session".into(),
                date: Utc::now() - Duration::days(days_back),
                duration,
                calories: None,
                notes: None,
            },
            exercises,
        }
    }

    #[test]
    fn test_time_window_from_days() {
        assert_eq!(TimeWindow::from_days(7), Some(TimeWindow::Week));
        assert_eq!(TimeWindow::from_days(365), Some(TimeWindow::Year));
        assert_eq!(TimeWindow::from_days(13), None);
    }

    #[test]
    fn test_weight_progression_groups_and_sorts() {
        let workouts = vec![
            workout(1, None, vec![
                entry(exercise(1, "Squats", "strength"), Some(100), Some(3), Some(10), None, None),
                entry(exercise(2, "Bench Press", "strength"), Some(150), Some(3), Some(8), None, None),
            ]),
            workout(2, None, vec![
                entry(exercise(1, "Squats", "strength"), Some(110), Some(3), Some(10), None, None),
                // No weight recorded, must not contribute
                entry(exercise(1, "Squats", "strength"), None, Some(3), Some(10), None, None),
                // Cardio entries never contribute, even with a weight set
                entry(exercise(3, "Running", "cardio"), Some(10), None, None, Some(5000), None),
            ]),
        ];

        let progression = weight_progression(&workouts, TimeWindow::Week, Local::now());
        assert_eq!(progression.len(), 2);
        assert_eq!(progression[0].exercise, "Bench Press");
        assert_eq!(progression[0].max_weight, 150);
        assert_eq!(progression[1].exercise, "Squats");
        assert_eq!(progression[1].max_weight, 110);
        assert_eq!(progression[1].avg_weight, 105);
        assert_eq!(progression[1].sessions, 2);
    }

    #[test]
    fn test_weight_progression_respects_window() {
        let workouts = vec![workout(10, None, vec![
            entry(exercise(1, "Squats", "strength"), Some(100), None, None, None, None),
        ])];

        assert!(weight_progression(&workouts, TimeWindow::Week, Local::now()).is_empty());
        assert_eq!(
            weight_progression(&workouts, TimeWindow::Month, Local::now()).len(),
            1
        );
    }

    #[test]
    fn test_pace_progression_placeholders() {
        let workouts = vec![
            workout(1, None, vec![
                entry(exercise(3, "Running", "cardio"), None, None, None, None, Some("7:30/mi")),
            ]),
            workout(2, None, vec![
                entry(exercise(3, "Running", "cardio"), None, None, None, None, Some("7:45/mi")),
            ]),
            workout(3, None, vec![
                entry(exercise(3, "Running", "cardio"), None, None, None, None, Some("8:00/mi")),
            ]),
        ];

        let progression = pace_progression(&workouts, TimeWindow::Week, Local::now());
        assert_eq!(progression.len(), 1);
        assert_eq!(progression[0].best_pace, "7:30/mi");
        assert_eq!(progression[0].avg_pace, "7:45/mi");
        assert_eq!(progression[0].sessions, 3);
    }

    #[test]
    fn test_volume_stats_totals() {
        let workouts = vec![
            workout(1, Some(90), vec![
                entry(exercise(1, "Squats", "strength"), Some(100), Some(3), Some(10), None, None),
                entry(exercise(3, "Running", "cardio"), None, None, None, Some(5000), None),
            ]),
            workout(2, Some(45), vec![
                entry(exercise(2, "Bench Press", "strength"), Some(50), Some(2), Some(8), None, None),
                // Missing reps, excluded from weight volume
                entry(exercise(1, "Squats", "strength"), Some(200), Some(5), None, None, None),
                entry(exercise(3, "Running", "cardio"), None, None, None, Some(2500), None),
            ]),
        ];

        let stats = volume_stats(&workouts, TimeWindow::Week, Local::now());
        assert_eq!(stats.weight_volume, 100 * 3 * 10 + 50 * 2 * 8);
        assert!((stats.distance_km - 7.5).abs() < f64::EPSILON);
        assert_eq!(stats.active_time, "2h 15m");
    }

    #[test]
    fn test_volume_stats_empty_window() {
        let stats = volume_stats(&[], TimeWindow::Week, Local::now());
        assert_eq!(stats.weight_volume, 0);
        assert!(stats.distance_km.abs() < f64::EPSILON);
        assert_eq!(stats.active_time, "0h 0m");
    }
}
