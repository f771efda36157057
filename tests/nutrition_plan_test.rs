use fitplan::models::{ActivityLevel, Gender, Goal, MealType, PlanRequest};
use fitplan::services::NutritionPlanService;
use proptest::prelude::*;

fn goal_strategy() -> impl Strategy<Value = Goal> {
    prop::sample::select(Goal::ALL.to_vec())
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop::sample::select(vec![Gender::Male, Gender::Female])
}

#[test]
fn test_reference_maintenance_scenario() {
    // BMR = 10*80 + 6.25*180 - 5*30 + 5 = 1880; TDEE = 1880 * 1.55 = 2914.
    let request = PlanRequest {
        weight_kg: Some(80.0),
        height_cm: Some(180.0),
        age: Some(30),
        gender: Some(Gender::Male),
        activity_level: Some(ActivityLevel::ModeratelyActive),
        goal: Some(Goal::Maintenance),
        ..PlanRequest::default()
    };
    let regimen = NutritionPlanService::new().generate(&request.resolve());

    assert_eq!(regimen.daily_calorie_target, 2914);
}

#[test]
fn test_meal_plan_has_one_template_per_meal_type() {
    let regimen = NutritionPlanService::new().generate(&PlanRequest::default().resolve());

    let slots: Vec<MealType> = regimen.meal_plan.iter().map(|m| m.meal_type).collect();
    assert_eq!(slots, MealType::ALL.to_vec());
}

#[test]
fn test_vegetarian_restriction_swaps_protein_source() {
    for goal in Goal::ALL {
        let request = PlanRequest {
            goal: Some(goal),
            dietary_restrictions: vec!["vegetarian".to_string()],
            ..PlanRequest::default()
        };
        let regimen = NutritionPlanService::new().generate(&request.resolve());

        assert!(
            !regimen.supplements.iter().any(|s| s == "Whey protein"),
            "{goal:?} kept whey for a vegetarian profile"
        );
        let plant_count = regimen
            .supplements
            .iter()
            .filter(|s| *s == "Plant protein")
            .count();
        assert_eq!(plant_count, 1, "{goal:?} must add plant protein exactly once");
    }
}

#[test]
fn test_supplements_have_no_duplicates() {
    for goal in Goal::ALL {
        let request = PlanRequest {
            goal: Some(goal),
            ..PlanRequest::default()
        };
        let regimen = NutritionPlanService::new().generate(&request.resolve());

        let mut seen = regimen.supplements.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), regimen.supplements.len(), "{goal:?} has duplicates");
    }
}

proptest! {
    #[test]
    fn prop_macro_grams_recombine_within_two_percent(
        weight in 40.0f64..180.0,
        height in 140.0f64..210.0,
        age in 16i32..80,
        goal in goal_strategy(),
        gender in gender_strategy(),
    ) {
        let request = PlanRequest {
            weight_kg: Some(weight),
            height_cm: Some(height),
            age: Some(age),
            gender: Some(gender),
            goal: Some(goal),
            ..PlanRequest::default()
        };
        let regimen = NutritionPlanService::new().generate(&request.resolve());
        let macros = regimen.macro_targets;

        let kcal = f64::from(macros.protein_g) * 4.0
            + f64::from(macros.carbs_g) * 4.0
            + f64::from(macros.fat_g) * 9.0;
        let target = f64::from(regimen.daily_calorie_target);

        prop_assert!(
            (kcal - target).abs() / target < 0.02,
            "macros recombine to {} kcal against a {} target",
            kcal,
            target
        );
    }

    #[test]
    fn prop_meal_calories_sum_to_daily_target(
        weight in 40.0f64..180.0,
        goal in goal_strategy(),
    ) {
        let request = PlanRequest {
            weight_kg: Some(weight),
            goal: Some(goal),
            ..PlanRequest::default()
        };
        let regimen = NutritionPlanService::new().generate(&request.resolve());

        let meal_total: u32 = regimen.meal_plan.iter().map(|m| m.target_calories).sum();
        let drift = i64::from(meal_total) - i64::from(regimen.daily_calorie_target);
        prop_assert!(drift.abs() <= 4, "meal calories drift by {} kcal", drift);
    }

    #[test]
    fn prop_hydration_is_monotone_with_floor(
        lighter in 20.0f64..150.0,
        delta in 0.5f64..60.0,
    ) {
        let service = NutritionPlanService::new();
        let light = service.generate(
            &PlanRequest { weight_kg: Some(lighter), ..PlanRequest::default() }.resolve(),
        );
        let heavy = service.generate(
            &PlanRequest { weight_kg: Some(lighter + delta), ..PlanRequest::default() }.resolve(),
        );

        prop_assert!(light.hydration_target_liters >= 2.0);
        prop_assert!(heavy.hydration_target_liters >= light.hydration_target_liters);
    }
}
