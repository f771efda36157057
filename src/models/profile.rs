use serde::{Deserialize, Deserializer, Serialize};

/// Canonical defaults applied while resolving a plan request. Every lookup
/// site that needs a fallback value references these constants.
pub mod defaults {
    use super::{ActivityLevel, FitnessLevel, Gender, Goal};

    pub const WEIGHT_KG: f64 = 70.0;
    pub const HEIGHT_CM: f64 = 170.0;
    pub const AGE_YEARS: i32 = 30;
    pub const GENDER: Gender = Gender::Male;
    pub const FITNESS_LEVEL: FitnessLevel = FitnessLevel::Beginner;
    pub const GOAL: Goal = Goal::Maintenance;
    pub const ACTIVITY_LEVEL: ActivityLevel = ActivityLevel::ModeratelyActive;
    /// Workout days scheduled when a profile asks for zero training and
    /// cardio days, so the plan never degenerates to an all-rest week.
    pub const WORKOUT_DAYS_FALLBACK: u8 = 3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];
}

/// Training goal selecting which exercise, calorie, macro, and supplement
/// tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleBuilding,
    Maintenance,
    Strength,
    Endurance,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::FatLoss,
        Goal::MuscleBuilding,
        Goal::Maintenance,
        Goal::Strength,
        Goal::Endurance,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied on top of basal metabolic rate.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

/// Incoming user profile for plan generation.
///
/// Every field is optional; absent fields and unrecognized enum strings
/// resolve to the documented defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient")]
    pub fitness_level: Option<FitnessLevel>,
    #[serde(default, deserialize_with = "lenient")]
    pub goal: Option<Goal>,
    #[serde(default, deserialize_with = "lenient")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub train_days_per_week: Option<i32>,
    #[serde(default)]
    pub cardio_days_per_week: Option<i32>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl PlanRequest {
    /// Applies all defaults and clamps once, up front, so no formula ever
    /// sees an absent or non-positive value.
    pub fn resolve(&self) -> ResolvedProfile {
        ResolvedProfile {
            weight_kg: positive_or(self.weight_kg, defaults::WEIGHT_KG),
            height_cm: positive_or(self.height_cm, defaults::HEIGHT_CM),
            age: match self.age {
                Some(age) if age > 0 => age,
                _ => defaults::AGE_YEARS,
            },
            gender: self.gender.unwrap_or(defaults::GENDER),
            fitness_level: self.fitness_level.unwrap_or(defaults::FITNESS_LEVEL),
            goal: self.goal.unwrap_or(defaults::GOAL),
            activity_level: self.activity_level.unwrap_or(defaults::ACTIVITY_LEVEL),
            train_days_per_week: clamp_days(self.train_days_per_week),
            cardio_days_per_week: clamp_days(self.cardio_days_per_week),
            dietary_restrictions: self.dietary_restrictions.clone(),
        }
    }
}

/// Fully-populated profile produced by [`PlanRequest::resolve`]. The
/// generators only ever consume this form.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub gender: Gender,
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    pub train_days_per_week: u8,
    pub cardio_days_per_week: u8,
    pub dietary_restrictions: Vec<String>,
}

impl ResolvedProfile {
    pub fn is_plant_based(&self) -> bool {
        self.dietary_restrictions.iter().any(|restriction| {
            restriction.eq_ignore_ascii_case("vegan") || restriction.eq_ignore_ascii_case("vegetarian")
        })
    }
}

impl Default for ResolvedProfile {
    fn default() -> Self {
        PlanRequest::default().resolve()
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => fallback,
    }
}

fn clamp_days(value: Option<i32>) -> u8 {
    value.unwrap_or(0).clamp(0, 7) as u8
}

/// Deserializes a field but maps unrecognized content to `None` instead of
/// failing the whole request body. Buffers through `serde_json::Value` so a
/// failed parse cannot leave the deserializer mid-stream.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_request_resolves_to_defaults() {
        let profile = PlanRequest::default().resolve();

        assert_eq!(profile.weight_kg, defaults::WEIGHT_KG);
        assert_eq!(profile.height_cm, defaults::HEIGHT_CM);
        assert_eq!(profile.age, defaults::AGE_YEARS);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
        assert_eq!(profile.goal, Goal::Maintenance);
        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(profile.train_days_per_week, 0);
        assert_eq!(profile.cardio_days_per_week, 0);
        assert!(profile.dietary_restrictions.is_empty());
    }

    #[test]
    fn test_non_positive_measurements_fall_back_to_defaults() {
        let request = PlanRequest {
            weight_kg: Some(-5.0),
            height_cm: Some(0.0),
            age: Some(-1),
            ..PlanRequest::default()
        };
        let profile = request.resolve();

        assert_eq!(profile.weight_kg, defaults::WEIGHT_KG);
        assert_eq!(profile.height_cm, defaults::HEIGHT_CM);
        assert_eq!(profile.age, defaults::AGE_YEARS);
    }

    #[test]
    fn test_day_counts_are_clamped_to_week_range() {
        let request = PlanRequest {
            train_days_per_week: Some(12),
            cardio_days_per_week: Some(-3),
            ..PlanRequest::default()
        };
        let profile = request.resolve();

        assert_eq!(profile.train_days_per_week, 7);
        assert_eq!(profile.cardio_days_per_week, 0);
    }

    #[test]
    fn test_unknown_enum_strings_resolve_to_defaults() {
        let request: PlanRequest = serde_json::from_value(serde_json::json!({
            "goal": "get_shredded",
            "fitness_level": "olympian",
            "gender": "other",
            "activity_level": "couch"
        }))
        .expect("unknown enum strings must not reject the body");
        let profile = request.resolve();

        assert_eq!(profile.goal, Goal::Maintenance);
        assert_eq!(profile.fitness_level, FitnessLevel::Beginner);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_known_enum_strings_parse() {
        let request: PlanRequest = serde_json::from_value(serde_json::json!({
            "goal": "muscle_building",
            "fitness_level": "advanced",
            "gender": "female",
            "activity_level": "very_active"
        }))
        .unwrap();
        let profile = request.resolve();

        assert_eq!(profile.goal, Goal::MuscleBuilding);
        assert_eq!(profile.fitness_level, FitnessLevel::Advanced);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_plant_based_detection_ignores_case() {
        let request = PlanRequest {
            dietary_restrictions: vec!["Vegan".to_string()],
            ..PlanRequest::default()
        };
        assert!(request.resolve().is_plant_based());

        let request = PlanRequest {
            dietary_restrictions: vec!["gluten_free".to_string()],
            ..PlanRequest::default()
        };
        assert!(!request.resolve().is_plant_based());
    }
}
