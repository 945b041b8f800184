// ABOUTME: Daily activity series and calendar day-categorization
// ABOUTME: Feeds the progress chart and the calendar cell coloring
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily series and calendar categorization
//!
//! Day membership uses local-calendar-day equality: two timestamps on the
//! same wall-clock day in the server's timezone land in the same bucket.

use super::progress::TimeWindow;
use crate::models::{ExerciseCategory, WorkoutWithExercises};
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

/// One day of the activity chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    /// Calendar day
    pub date: NaiveDate,
    /// Number of workouts logged that day
    pub workouts: i64,
    /// Total duration in minutes
    pub duration: i64,
    /// Total calories
    pub calories: i64,
}

/// Build the per-day chart series for `[today - days + 1, today]`
#[must_use]
pub fn daily_series(
    workouts: &[WorkoutWithExercises],
    window: TimeWindow,
    today: NaiveDate,
) -> Vec<DailyActivity> {
    let start = today - Duration::days(window.days() - 1);

    (0..window.days())
        .map(|offset| {
            let day = start + Duration::days(offset);
            let mut point = DailyActivity {
                date: day,
                workouts: 0,
                duration: 0,
                calories: 0,
            };

            for w in workouts {
                if local_day(w) == day {
                    point.workouts += 1;
                    point.duration += w.workout.duration.unwrap_or(0);
                    point.calories += w.workout.calories.unwrap_or(0);
                }
            }

            point
        })
        .collect()
}

/// Distinct exercise categories among a day's workouts, in first-seen order
#[must_use]
pub fn day_categories(
    workouts: &[WorkoutWithExercises],
    date: NaiveDate,
) -> Vec<ExerciseCategory> {
    let mut categories = Vec::new();

    for workout in workouts.iter().filter(|w| local_day(w) == date) {
        for entry in &workout.exercises {
            let category = ExerciseCategory::parse(&entry.exercise.category);
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
    }

    categories
}

/// Pick the display category for a calendar cell
///
/// Fixed priority: strength > cardio > yoga > other. `None` means no
/// categorized activity that day.
#[must_use]
pub fn display_category(categories: &[ExerciseCategory]) -> Option<ExerciseCategory> {
    if categories.contains(&ExerciseCategory::Strength) {
        Some(ExerciseCategory::Strength)
    } else if categories.contains(&ExerciseCategory::Cardio) {
        Some(ExerciseCategory::Cardio)
    } else if categories.contains(&ExerciseCategory::Yoga) {
        Some(ExerciseCategory::Yoga)
    } else if categories.is_empty() {
        None
    } else {
        Some(ExerciseCategory::Other)
    }
}

fn local_day(workout: &WorkoutWithExercises) -> NaiveDate {
    workout.workout.date.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::{Exercise, ExerciseEntry, Workout, WorkoutExercise};
    use chrono::{DateTime, TimeZone, Utc};

    fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn workout_on(
        date: DateTime<Utc>,
        duration: Option<i64>,
        calories: Option<i64>,
        categories: &[&str],
    ) -> WorkoutWithExercises {
        let exercises = categories
            .iter()
            .enumerate()
            .map(|(i, category)| ExerciseEntry {
                entry: WorkoutExercise {
                    id: i as i64,
                    workout_id: 0,
                    exercise_id: i as i64,
                    sets: None,
                    reps: None,
                    weight: None,
                    distance: None,
                    duration: None,
                    pace: None,
                },
                exercise: Exercise {
                    id: i as i64,
                    name: format!("Exercise {i}"),
                    category: (*category).into(),
                    muscle_groups: Vec::new(),
                    description: None,
                },
            })
            .collect();

        WorkoutWithExercises {
            workout: Workout {
                id: 0,
                name: "Session".into(),
                date,
                duration,
                calories,
                notes: None,
            },
            exercises,
        }
    }

    #[test]
    fn test_daily_series_window_and_sums() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let workouts = vec![
            workout_on(local_noon(2024, 1, 15), Some(30), Some(200), &[]),
            workout_on(local_noon(2024, 1, 15), Some(20), Some(100), &[]),
            workout_on(local_noon(2024, 1, 10), Some(60), None, &[]),
            // Outside the 7-day window
            workout_on(local_noon(2024, 1, 1), Some(45), Some(500), &[]),
        ];

        let series = daily_series(&workouts, TimeWindow::Week, today);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        assert_eq!(series[6].date, today);

        assert_eq!(series[6].workouts, 2);
        assert_eq!(series[6].duration, 50);
        assert_eq!(series[6].calories, 300);

        assert_eq!(series[1].workouts, 1);
        assert_eq!(series[1].duration, 60);
        assert_eq!(series[1].calories, 0);

        assert_eq!(series[2].workouts, 0);
    }

    #[test]
    fn test_day_categories_distinct_first_seen() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let workouts = vec![
            workout_on(local_noon(2024, 1, 15), None, None, &["cardio", "strength"]),
            workout_on(local_noon(2024, 1, 15), None, None, &["cardio", "yoga"]),
            workout_on(local_noon(2024, 1, 14), None, None, &["strength"]),
        ];

        let categories = day_categories(&workouts, date);
        assert_eq!(
            categories,
            vec![
                ExerciseCategory::Cardio,
                ExerciseCategory::Strength,
                ExerciseCategory::Yoga
            ]
        );
    }

    #[test]
    fn test_display_category_priority() {
        assert_eq!(
            display_category(&[ExerciseCategory::Yoga, ExerciseCategory::Strength]),
            Some(ExerciseCategory::Strength)
        );
        assert_eq!(
            display_category(&[ExerciseCategory::Yoga, ExerciseCategory::Cardio]),
            Some(ExerciseCategory::Cardio)
        );
        assert_eq!(
            display_category(&[ExerciseCategory::Yoga]),
            Some(ExerciseCategory::Yoga)
        );
        assert_eq!(
            display_category(&[ExerciseCategory::Other]),
            Some(ExerciseCategory::Other)
        );
        assert_eq!(display_category(&[]), None);
    }
}
