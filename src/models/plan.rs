use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nutrition::NutritionRegimen;
use super::workout::WeeklyWorkoutPlan;

/// The complete generated plan: a 7-day training schedule plus the matching
/// nutrition regimen. Returned whole or not at all; the engine keeps no
/// reference after handing it to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedPlan {
    pub training_regimen: Vec<WeeklyWorkoutPlan>,
    pub nutrition_regimen: NutritionRegimen,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
