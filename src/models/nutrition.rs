use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Daily meal order used by every generated plan.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepDifficulty {
    Easy,
    Moderate,
    Involved,
}

/// Daily macronutrient targets in grams plus display percentages of total
/// calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

/// Macro amounts in grams without percentages; used for per-meal targets
/// and suggestion nutrition facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub name: String,
    pub ingredients: Vec<String>,
    pub calories: u32,
    pub macros: MacroSplit,
    pub prep_time_minutes: u32,
    pub difficulty: PrepDifficulty,
}

/// Calorie and macro targets for one meal slot, with pre-authored
/// suggestions attached from the meal catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanTemplate {
    pub meal_type: MealType,
    pub target_calories: u32,
    pub target_macros: MacroSplit,
    pub suggestions: Vec<MealSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRegimen {
    pub daily_calorie_target: u32,
    pub macro_targets: MacroTargets,
    pub meal_plan: Vec<MealPlanTemplate>,
    pub hydration_target_liters: f64,
    pub supplements: Vec<String>,
}
