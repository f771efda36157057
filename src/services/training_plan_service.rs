use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::models::{defaults, ResolvedProfile, Weekday, WeeklyWorkoutPlan};

/// Weekly training schedule generator.
///
/// Produces exactly 7 entries, one per calendar day in Monday-first order.
/// Workout days follow a fixed day-index pattern keyed by the total weekly
/// workout-day count; each workout day pulls its routine from the exercise
/// catalog via a counter that only advances on workout days, so the week
/// rotates through the authored day variants deterministically.
#[derive(Debug, Clone)]
pub struct TrainingPlanService {
    catalog: ExerciseCatalog,
    zero_day_fallback: u8,
}

impl TrainingPlanService {
    pub fn new() -> Self {
        Self::with_zero_day_fallback(defaults::WORKOUT_DAYS_FALLBACK)
    }

    /// Overrides the number of workout days scheduled when a profile asks
    /// for zero training and cardio days. Pass 0 to honor an all-rest week.
    pub fn with_zero_day_fallback(days: u8) -> Self {
        Self {
            catalog: ExerciseCatalog::new(),
            zero_day_fallback: days.min(7),
        }
    }

    pub fn generate(&self, profile: &ResolvedProfile) -> Vec<WeeklyWorkoutPlan> {
        let total_workout_days = self.total_workout_days(profile);
        let pattern = day_index_pattern(total_workout_days);
        debug!(
            total_workout_days,
            goal = ?profile.goal,
            fitness_level = ?profile.fitness_level,
            "building weekly schedule"
        );

        let mut workout_day_counter = 0;
        Weekday::ALL
            .iter()
            .enumerate()
            .map(|(day_index, &day)| {
                if pattern.contains(&day_index) {
                    let exercises = self.catalog.day_routine(
                        profile.goal,
                        profile.fitness_level,
                        workout_day_counter,
                    );
                    workout_day_counter += 1;
                    WeeklyWorkoutPlan {
                        day,
                        is_rest_day: false,
                        workout: Some(exercises),
                    }
                } else {
                    WeeklyWorkoutPlan {
                        day,
                        is_rest_day: true,
                        workout: None,
                    }
                }
            })
            .collect()
    }

    fn total_workout_days(&self, profile: &ResolvedProfile) -> usize {
        let requested =
            (profile.train_days_per_week as usize + profile.cardio_days_per_week as usize).min(7);
        if requested == 0 {
            self.zero_day_fallback as usize
        } else {
            requested
        }
    }
}

impl Default for TrainingPlanService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed weekday indices (0 = Monday) used as workout days for a given
/// weekly count. Unknown counts fall back to the three-day pattern.
fn day_index_pattern(total_workout_days: usize) -> &'static [usize] {
    match total_workout_days {
        0 => &[],
        1 => &[0],
        2 => &[0, 2],
        3 => &[0, 2, 4],
        4 => &[0, 1, 3, 5],
        5 => &[0, 1, 2, 4, 5],
        6 => &[0, 1, 2, 3, 4, 5],
        7 => &[0, 1, 2, 3, 4, 5, 6],
        _ => &[0, 2, 4],
    }
}
