use tracing::debug;

use crate::catalog::MealCatalog;
use crate::models::{
    Gender, Goal, MacroSplit, MacroTargets, MealPlanTemplate, MealType, NutritionRegimen,
    ResolvedProfile,
};

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

const BASE_SUPPLEMENTS: [&str; 2] = ["Multivitamin", "Omega-3"];
const WHEY_PROTEIN: &str = "Whey protein";
const PLANT_PROTEIN: &str = "Plant protein";

/// Nutrition regimen generator.
///
/// Runs the Mifflin-St Jeor equation through activity and goal adjustments
/// to a daily calorie target, derives macro targets from per-goal ratios,
/// splits the day across four meal slots, and attaches hydration and
/// supplement guidance. All goal lookups key on the single resolved goal.
#[derive(Debug, Clone)]
pub struct NutritionPlanService {
    catalog: MealCatalog,
}

impl NutritionPlanService {
    pub fn new() -> Self {
        Self {
            catalog: MealCatalog::new(),
        }
    }

    pub fn generate(&self, profile: &ResolvedProfile) -> NutritionRegimen {
        let daily_calorie_target = daily_calorie_target(profile);
        let macro_targets = macro_targets(profile.goal, daily_calorie_target);
        debug!(
            daily_calorie_target,
            goal = ?profile.goal,
            "building nutrition regimen"
        );

        NutritionRegimen {
            daily_calorie_target,
            macro_targets,
            meal_plan: self.build_meal_plan(daily_calorie_target, macro_targets),
            hydration_target_liters: hydration_target_liters(profile.weight_kg),
            supplements: supplement_stack(profile),
        }
    }

    fn build_meal_plan(&self, daily_calories: u32, macros: MacroTargets) -> Vec<MealPlanTemplate> {
        MealType::ALL
            .iter()
            .map(|&meal_type| {
                let fraction = meal_fraction(meal_type);
                MealPlanTemplate {
                    meal_type,
                    target_calories: (f64::from(daily_calories) * fraction).round() as u32,
                    target_macros: MacroSplit {
                        protein_g: (f64::from(macros.protein_g) * fraction).round() as u32,
                        carbs_g: (f64::from(macros.carbs_g) * fraction).round() as u32,
                        fat_g: (f64::from(macros.fat_g) * fraction).round() as u32,
                    },
                    suggestions: self.catalog.suggestions(meal_type).to_vec(),
                }
            })
            .collect()
    }
}

impl Default for NutritionPlanService {
    fn default() -> Self {
        Self::new()
    }
}

/// Mifflin-St Jeor basal metabolic rate. The resolve step guarantees
/// positive weight, height, and age.
fn basal_metabolic_rate(profile: &ResolvedProfile) -> f64 {
    let base =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn daily_calorie_target(profile: &ResolvedProfile) -> u32 {
    let tdee = basal_metabolic_rate(profile) * profile.activity_level.multiplier();
    let adjusted = tdee + f64::from(calorie_delta(profile.goal));
    adjusted.round().max(0.0) as u32
}

/// Fixed calorie adjustment layered on top of TDEE per goal.
fn calorie_delta(goal: Goal) -> i32 {
    match goal {
        Goal::FatLoss => -500,
        Goal::MuscleBuilding => 300,
        Goal::Maintenance => 0,
        Goal::Strength => 200,
        Goal::Endurance => 100,
    }
}

/// Per-goal (protein, carbs, fat) calorie fractions. Each triple sums to
/// 1.0.
fn macro_ratio(goal: Goal) -> (f64, f64, f64) {
    match goal {
        Goal::FatLoss => (0.35, 0.35, 0.30),
        Goal::MuscleBuilding => (0.30, 0.45, 0.25),
        Goal::Maintenance => (0.25, 0.50, 0.25),
        Goal::Strength => (0.30, 0.40, 0.30),
        Goal::Endurance => (0.20, 0.55, 0.25),
    }
}

fn macro_targets(goal: Goal, daily_calories: u32) -> MacroTargets {
    let (protein_frac, carbs_frac, fat_frac) = macro_ratio(goal);
    let calories = f64::from(daily_calories);

    MacroTargets {
        protein_g: (calories * protein_frac / KCAL_PER_G_PROTEIN).round() as u32,
        carbs_g: (calories * carbs_frac / KCAL_PER_G_CARBS).round() as u32,
        fat_g: (calories * fat_frac / KCAL_PER_G_FAT).round() as u32,
        protein_pct: (protein_frac * 100.0).round() as u32,
        carbs_pct: (carbs_frac * 100.0).round() as u32,
        fat_pct: (fat_frac * 100.0).round() as u32,
    }
}

/// Share of the daily calorie and macro budget assigned to each meal slot.
/// The four fractions sum to 1.0.
fn meal_fraction(meal_type: MealType) -> f64 {
    match meal_type {
        MealType::Breakfast => 0.25,
        MealType::Lunch => 0.35,
        MealType::Dinner => 0.30,
        MealType::Snack => 0.10,
    }
}

/// 35 ml per kg of bodyweight, floored at two liters.
fn hydration_target_liters(weight_kg: f64) -> f64 {
    let liters = (weight_kg * 35.0 / 1000.0 * 10.0).round() / 10.0;
    liters.max(2.0)
}

fn goal_supplements(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::FatLoss => &[WHEY_PROTEIN, "L-Carnitine", "Green tea extract"],
        Goal::MuscleBuilding => &[WHEY_PROTEIN, "Creatine", "BCAAs"],
        Goal::Maintenance => &[],
        Goal::Strength => &[WHEY_PROTEIN, "Creatine", "Beta-alanine"],
        Goal::Endurance => &["Electrolytes", "Beta-alanine"],
    }
}

fn supplement_stack(profile: &ResolvedProfile) -> Vec<String> {
    let mut stack: Vec<String> = BASE_SUPPLEMENTS.iter().map(|s| s.to_string()).collect();
    for supplement in goal_supplements(profile.goal) {
        if !stack.iter().any(|have| have == supplement) {
            stack.push(supplement.to_string());
        }
    }

    if profile.is_plant_based() {
        stack.retain(|supplement| supplement != WHEY_PROTEIN);
        if !stack.iter().any(|supplement| supplement == PLANT_PROTEIN) {
            stack.push(PLANT_PROTEIN.to_string());
        }
    }

    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, FitnessLevel, PlanRequest};
    use pretty_assertions::assert_eq;

    fn reference_profile() -> ResolvedProfile {
        ResolvedProfile {
            weight_kg: 80.0,
            height_cm: 180.0,
            age: 30,
            gender: Gender::Male,
            fitness_level: FitnessLevel::Intermediate,
            goal: Goal::Maintenance,
            activity_level: ActivityLevel::ModeratelyActive,
            train_days_per_week: 3,
            cardio_days_per_week: 2,
            dietary_restrictions: vec![],
        }
    }

    #[test]
    fn test_reference_profile_calorie_target() {
        // BMR = 10*80 + 6.25*180 - 5*30 + 5 = 1880; TDEE = 1880 * 1.55 = 2914.
        let regimen = NutritionPlanService::new().generate(&reference_profile());
        assert_eq!(regimen.daily_calorie_target, 2914);
    }

    #[test]
    fn test_female_bmr_offset() {
        let profile = ResolvedProfile {
            gender: Gender::Female,
            ..reference_profile()
        };
        assert_eq!(basal_metabolic_rate(&profile), 1614.0);
    }

    #[test]
    fn test_goal_delta_shifts_calorie_target() {
        let maintenance = NutritionPlanService::new().generate(&reference_profile());
        let cutting = NutritionPlanService::new().generate(&ResolvedProfile {
            goal: Goal::FatLoss,
            ..reference_profile()
        });

        assert_eq!(
            maintenance.daily_calorie_target - 500,
            cutting.daily_calorie_target
        );
    }

    #[test]
    fn test_macro_ratios_sum_to_one_for_every_goal() {
        for goal in Goal::ALL {
            let (protein, carbs, fat) = macro_ratio(goal);
            let total = protein + carbs + fat;
            assert!(
                (total - 1.0).abs() < 0.01,
                "{goal:?} ratios sum to {total}"
            );
        }
    }

    #[test]
    fn test_macro_grams_recombine_to_calorie_target() {
        for goal in Goal::ALL {
            let profile = ResolvedProfile {
                goal,
                ..reference_profile()
            };
            let regimen = NutritionPlanService::new().generate(&profile);
            let macros = regimen.macro_targets;

            let kcal = f64::from(macros.protein_g) * KCAL_PER_G_PROTEIN
                + f64::from(macros.carbs_g) * KCAL_PER_G_CARBS
                + f64::from(macros.fat_g) * KCAL_PER_G_FAT;
            let target = f64::from(regimen.daily_calorie_target);

            assert!(
                (kcal - target).abs() / target < 0.02,
                "{goal:?}: {kcal} kcal from macros vs {target} target"
            );
        }
    }

    #[test]
    fn test_meal_plan_covers_all_slots_and_calories() {
        let regimen = NutritionPlanService::new().generate(&reference_profile());

        let slots: Vec<MealType> = regimen.meal_plan.iter().map(|m| m.meal_type).collect();
        assert_eq!(slots, MealType::ALL.to_vec());

        let meal_total: u32 = regimen.meal_plan.iter().map(|m| m.target_calories).sum();
        let drift = i64::from(meal_total) - i64::from(regimen.daily_calorie_target);
        assert!(drift.abs() <= 4, "meal calories drift by {drift} kcal");

        for meal in &regimen.meal_plan {
            assert!(!meal.suggestions.is_empty());
        }
    }

    #[test]
    fn test_hydration_floor_and_scaling() {
        assert_eq!(hydration_target_liters(40.0), 2.0);
        assert_eq!(hydration_target_liters(80.0), 2.8);
        assert!(hydration_target_liters(120.0) > hydration_target_liters(80.0));
    }

    #[test]
    fn test_supplements_include_base_and_goal_stack() {
        let regimen = NutritionPlanService::new().generate(&ResolvedProfile {
            goal: Goal::MuscleBuilding,
            ..reference_profile()
        });

        assert_eq!(
            regimen.supplements,
            vec!["Multivitamin", "Omega-3", "Whey protein", "Creatine", "BCAAs"]
        );
    }

    #[test]
    fn test_plant_based_swaps_whey_for_plant_protein() {
        let request = PlanRequest {
            goal: Some(Goal::MuscleBuilding),
            dietary_restrictions: vec!["vegan".to_string()],
            ..PlanRequest::default()
        };
        let regimen = NutritionPlanService::new().generate(&request.resolve());

        assert!(!regimen.supplements.iter().any(|s| s == WHEY_PROTEIN));
        let plant_count = regimen
            .supplements
            .iter()
            .filter(|s| *s == PLANT_PROTEIN)
            .count();
        assert_eq!(plant_count, 1);
    }
}
