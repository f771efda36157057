use chrono::Utc;
use tracing::info;

use crate::models::{PersonalizedPlan, PlanRequest};

use super::nutrition_plan_service::NutritionPlanService;
use super::training_plan_service::TrainingPlanService;

/// Composes the training and nutrition generators into one personalized
/// plan. Stateless between calls; the catalogs it owns are immutable and
/// shared freely across concurrent invocations.
#[derive(Debug, Clone)]
pub struct PlanGenerationService {
    training_service: TrainingPlanService,
    nutrition_service: NutritionPlanService,
}

impl PlanGenerationService {
    pub fn new() -> Self {
        Self {
            training_service: TrainingPlanService::new(),
            nutrition_service: NutritionPlanService::new(),
        }
    }

    /// Generates a complete plan for a profile. Absent or unrecognized
    /// profile fields are resolved to defaults in one up-front step; the
    /// result is returned whole or not at all.
    pub fn generate_personalized_plan(&self, request: &PlanRequest) -> PersonalizedPlan {
        let profile = request.resolve();
        info!(
            goal = ?profile.goal,
            fitness_level = ?profile.fitness_level,
            "generating personalized plan"
        );

        let training_regimen = self.training_service.generate(&profile);
        let nutrition_regimen = self.nutrition_service.generate(&profile);

        let now = Utc::now();
        PersonalizedPlan {
            training_regimen,
            nutrition_regimen,
            created_at: now,
            last_updated: now,
        }
    }
}

impl Default for PlanGenerationService {
    fn default() -> Self {
        Self::new()
    }
}
