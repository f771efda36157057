// Plan generation services

pub mod nutrition_plan_service;
pub mod plan_generation_service;
pub mod training_plan_service;

pub use nutrition_plan_service::NutritionPlanService;
pub use plan_generation_service::PlanGenerationService;
pub use training_plan_service::TrainingPlanService;
