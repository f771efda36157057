use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Strength,
    Cardio,
    Flexibility,
}

/// How an exercise is dosed: counted sets and reps, or a continuous hold /
/// work interval. Modeled as an enum so the two forms stay mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExerciseEffort {
    SetsReps { sets: u32, reps: u32 },
    Timed { duration_seconds: u32 },
}

/// Per-level scaling notes attached to every exercise template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingOptions {
    pub beginner: String,
    pub advanced: String,
}

/// A pre-authored exercise. Sourced only from the catalog and never mutated
/// by the generators; the same template is reused across every plan built
/// for its (goal, level, variant) slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    pub name: String,
    pub exercise_type: ExerciseType,
    #[serde(flatten)]
    pub effort: ExerciseEffort,
    pub rest_time_seconds: u32,
    pub instructions: Vec<String>,
    pub modifications: ScalingOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Calendar order used by every weekly schedule, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// One calendar day of the weekly schedule. `workout` is absent on rest
/// days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWorkoutPlan {
    pub day: Weekday,
    pub is_rest_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<Vec<ExerciseTemplate>>,
}
